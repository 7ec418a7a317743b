use std::time::Duration;

/// Seconds subtracted from a granted lifetime before renewing.
pub const DEFAULT_RENEWAL_MARGIN: u64 = 30;

/// Time to wait before renewing a lease of `lifetime` seconds. Lifetimes
/// shorter than the margin renew immediately.
pub fn renewal_delay(lifetime: u16, margin: Duration) -> Duration
{
    Duration::from_secs(u64::from(lifetime)).saturating_sub(margin)
}
