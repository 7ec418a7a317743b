//! UDP transport of the agent.
//!
//! The agent owns two endpoints on consecutive local ports: the primary one
//! (`p`) carries every request it sends and the replies to them, the
//! secondary one (`p + 1`) only receives probes initiated by the registry.
//!
//! The [`structs::request_engine::RequestEngine`] implements the
//! request/response exchange on the primary endpoint: send, wait up to the
//! timeout for any datagram, resend on timeout, give up after the configured
//! number of attempts. Replies are not correlated with requests.

/// Enumerations for transport errors.
pub mod enums;

/// Implementation blocks for endpoints and the request engine.
pub mod impls;

/// Data structures for endpoints and the request engine.
pub mod structs;

/// Endpoint binding and address resolution.
#[allow(clippy::module_inception)]
pub mod transport;
