use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("No response received after {attempts} tries")]
    NoResponse { attempts: u8 },

    #[error("Request cancelled by shutdown")]
    Cancelled,

    #[error("Could not resolve registry host {host}: {source}")]
    Resolve { host: String, source: io::Error },

    #[error("Registry host {0} has no IPv4 address")]
    NoIpv4Address(String),

    #[error("No local IPv4 address routes to {0}")]
    NoLocalAddress(String),

    #[error("Primary port {0} leaves no room for the probe endpoint")]
    PortExhausted(u16),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
