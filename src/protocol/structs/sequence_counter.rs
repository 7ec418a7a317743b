use std::sync::atomic::AtomicU8;

/// Process-wide source of request sequence numbers, wrapping modulo 256.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    pub(crate) next: AtomicU8,
}
