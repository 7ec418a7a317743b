//! Responder for registry-initiated probes.
//!
//! The registry checks that a registered agent is alive by sending a probe to
//! the secondary endpoint. Whatever arrives there is answered with an ACK
//! header carrying the same sequence number, addressed to the registry.

pub mod impls;
pub mod structs;

#[allow(clippy::module_inception)]
pub mod probe;

#[cfg(test)]
mod tests;
