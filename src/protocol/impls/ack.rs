use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::protocol::{ensure_length, HEADER_SIZE};
use crate::protocol::structs::ack::Ack;
use crate::protocol::structs::sequence_number::SequenceNumber;

impl Ack {
    pub fn from_bytes(bytes: &[u8]) -> Result<Ack, CodecError> {
        ensure_length(bytes, HEADER_SIZE)?;
        Ok(Ack { sequence: SequenceNumber(bytes[2]) })
    }
}
