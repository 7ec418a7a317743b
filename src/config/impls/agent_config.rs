use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::agent_config::AgentConfig;
use crate::lease::lease::DEFAULT_RENEWAL_MARGIN;
use crate::protocol::protocol::REGISTER_REPLY_SIZE;

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            bind_address: String::from("0.0.0.0"),
            bind_port: 0,
            advertise_ip: None,
            reuse_address: false,
            request_timeout_ms: 5000,
            max_attempts: 3,
            renewal_margin: DEFAULT_RENEWAL_MARGIN,
            fetch_buffer_size: 5000,
        }
    }
}

impl AgentConfig {
    pub fn bind_ip(&self) -> Result<IpAddr, ConfigurationError> {
        self.bind_address.parse().map_err(|_| ConfigurationError::InvalidValue {
            field: "agent.bind_address",
            reason: format!("'{}' is not an IP address", self.bind_address),
        })
    }

    pub fn advertise_ipv4(&self) -> Result<Option<Ipv4Addr>, ConfigurationError> {
        match &self.advertise_ip {
            None => Ok(None),
            Some(ip) => ip.parse().map(Some).map_err(|_| ConfigurationError::InvalidValue {
                field: "agent.advertise_ip",
                reason: format!("'{ip}' is not an IPv4 address"),
            }),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn renewal_margin(&self) -> Duration {
        Duration::from_secs(self.renewal_margin)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.bind_ip()?;
        self.advertise_ipv4()?;

        if self.bind_port == u16::MAX {
            return Err(ConfigurationError::InvalidValue {
                field: "agent.bind_port",
                reason: String::from("the probe endpoint needs the next port"),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "agent.request_timeout_ms",
                reason: String::from("must be greater than zero"),
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "agent.max_attempts",
                reason: String::from("must be greater than zero"),
            });
        }
        if self.fetch_buffer_size < REGISTER_REPLY_SIZE {
            return Err(ConfigurationError::InvalidValue {
                field: "agent.fetch_buffer_size",
                reason: format!("must hold at least {REGISTER_REPLY_SIZE} bytes"),
            });
        }
        Ok(())
    }
}
