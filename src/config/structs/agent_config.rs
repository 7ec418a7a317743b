use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AgentConfig {
    pub bind_address: String,
    /// Port of the primary endpoint; 0 picks an ephemeral one. The probe
    /// endpoint always listens on the next port.
    pub bind_port: u16,
    /// IPv4 address advertised in register/unregister frames. Discovered from
    /// the route to the registry when unset.
    pub advertise_ip: Option<String>,
    pub reuse_address: bool,
    pub request_timeout_ms: u64,
    pub max_attempts: u8,
    /// Seconds subtracted from a granted lifetime to get the renewal delay.
    pub renewal_margin: u64,
    pub fetch_buffer_size: usize,
}
