use std::sync::atomic::{AtomicU8, Ordering};
use crate::protocol::structs::sequence_counter::SequenceCounter;
use crate::protocol::structs::sequence_number::SequenceNumber;

impl SequenceCounter {
    pub fn new() -> SequenceCounter {
        SequenceCounter::starting_at(0)
    }

    pub fn starting_at(value: u8) -> SequenceCounter {
        SequenceCounter { next: AtomicU8::new(value) }
    }

    /// Hands out the current number and advances the counter. `fetch_add`
    /// on an atomic byte wraps, so 255 is followed by 0.
    #[inline]
    pub fn next(&self) -> SequenceNumber {
        SequenceNumber(self.next.fetch_add(1, Ordering::SeqCst))
    }

    #[inline]
    pub fn peek(&self) -> SequenceNumber {
        SequenceNumber(self.next.load(Ordering::SeqCst))
    }
}
