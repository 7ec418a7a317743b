use std::io;
use thiserror::Error;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::transport::enums::transport_error::TransportError;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Transport setup failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
