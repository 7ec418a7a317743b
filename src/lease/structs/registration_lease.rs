use std::sync::Arc;
use std::time::Duration;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct RegistrationLease {
    pub port: u16,
    /// The register datagram exactly as first sent.
    pub request: Arc<[u8]>,
    pub lifetime: u16,
    pub renewal_delay: Duration,
}
