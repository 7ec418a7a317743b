//! Configuration management module.
//!
//! Loads the agent settings from a TOML file. Every key is optional; missing
//! keys fall back to the defaults of [`structs::configuration::Configuration::init`].
//!
//! # Configuration Structure
//!
//! - **log_level**: one of `off`, `error`, `warn`, `info`, `debug`, `trace`
//! - **agent**: endpoint binding, request timeout and retry budget, lease
//!   renewal margin and fetch buffer size
//!
//! # Example
//!
//! ```rust,ignore
//! use registration_agent::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml")?;
//! Configuration::create_file("config.toml")?;
//! ```

/// Configuration enumerations (log level, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
