use std::time::Duration;
use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::enums::message::Message;
use crate::protocol::protocol::sequence_of;
use crate::protocol::structs::ack::Ack;

pub const PROBE_BUFFER_SIZE: usize = 1024;
const RECEIVE_BACKOFF_STEP: Duration = Duration::from_millis(10);
const RECEIVE_BACKOFF_MAX: Duration = Duration::from_secs(1);

/// Pause after the `failures`-th consecutive receive error, doubling up to
/// one second.
pub fn receive_backoff(failures: u32) -> Duration
{
    let exponent = failures.saturating_sub(1).min(7);
    RECEIVE_BACKOFF_STEP.saturating_mul(1 << exponent).min(RECEIVE_BACKOFF_MAX)
}

/// Builds the ACK answering `datagram`, echoing its sequence number.
#[tracing::instrument(level = "debug")]
pub fn acknowledge(datagram: &[u8]) -> Result<Vec<u8>, CodecError>
{
    let sequence = sequence_of(datagram)?;
    Message::from(Ack { sequence }).to_bytes()
}
