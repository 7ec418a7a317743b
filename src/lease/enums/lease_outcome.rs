/// Why a lease task stopped.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LeaseOutcome {
    /// The port was unlocked when the renewal timer fired.
    Unregistered,
    /// The registry did not answer a renewal.
    RenewalFailed,
    /// The agent is shutting down, or a newer registration replaced this task.
    Cancelled,
}
