//! # Registration Agent
//!
//! Client side of a small UDP service registration protocol.
//!
//! ## Overview
//!
//! The agent advertises services running on this host to a remote registry
//! and keeps those registrations alive. Each registration is a lease: the
//! registry grants a lifetime in seconds and the agent renews it shortly
//! before it runs out. The registry may also probe the agent at any time to
//! check that it is still there.
//!
//! ## Features
//!
//! - **Register / Unregister**: advertise a (port, data, name) triple for this host
//! - **Fetch**: list registered services by name prefix
//! - **Probe**: check that the registry answers, and answer its probes
//! - **Automatic renewal**: one renewal task per registered port
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use registration_agent::agent::agent::agent_service;
//! use registration_agent::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml")?;
//! agent_service(config, "registry.example.org", 46101).await?;
//! ```
//!
//! ## Modules
//!
//! - [`agent`] - Command interpreter and the shared agent context
//! - [`config`] - Configuration management and TOML parsing
//! - [`lease`] - Port locks and lease renewal tasks
//! - [`logging`] - Logger setup
//! - [`probe`] - Responder for registry-initiated probes
//! - [`protocol`] - Wire codec
//! - [`structs`] - CLI argument parsing
//! - [`transport`] - UDP endpoints and the request/response engine

/// Interactive command interpreter.
///
/// Turns user commands into protocol requests and owns the
/// [`agent::structs::agent_context::AgentContext`] shared with background tasks.
pub mod agent;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Lease bookkeeping and renewal.
pub mod lease;

/// Logger setup.
pub mod logging;

/// Probe responder on the secondary endpoint.
pub mod probe;

/// Binary frame format of the registration protocol.
pub mod protocol;

/// CLI argument parsing.
pub mod structs;

/// UDP endpoints and request retries.
pub mod transport;
