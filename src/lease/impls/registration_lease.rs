use std::sync::Arc;
use std::time::Duration;
use crate::lease::lease::renewal_delay;
use crate::lease::structs::registration_lease::RegistrationLease;

impl RegistrationLease {
    pub fn new(port: u16, request: Vec<u8>, lifetime: u16, margin: Duration) -> RegistrationLease
    {
        RegistrationLease {
            port,
            request: Arc::from(request),
            lifetime,
            renewal_delay: renewal_delay(lifetime, margin),
        }
    }

    /// The lease that supersedes this one after a successful renewal.
    pub fn renewed(&self, lifetime: u16, margin: Duration) -> RegistrationLease
    {
        RegistrationLease {
            port: self.port,
            request: self.request.clone(),
            lifetime,
            renewal_delay: renewal_delay(lifetime, margin),
        }
    }
}
