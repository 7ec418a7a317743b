use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::protocol::{ensure_length, REGISTER_REPLY_SIZE};
use crate::protocol::structs::register_reply::RegisterReply;
use crate::protocol::structs::sequence_number::SequenceNumber;

impl RegisterReply {
    /// Reads the lifetime at offset 4 without looking at magic or type.
    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<RegisterReply, CodecError> {
        ensure_length(bytes, REGISTER_REPLY_SIZE)?;
        Ok(RegisterReply {
            sequence: SequenceNumber(bytes[2]),
            lifetime: u16::from_be_bytes([bytes[4], bytes[5]]),
        })
    }
}
