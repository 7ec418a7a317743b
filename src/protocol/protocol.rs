use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::structs::sequence_number::SequenceNumber;

pub const MAGIC: [u8; 2] = [0xC4, 0x61];
pub const HEADER_SIZE: usize = 4;
pub const MAX_NAME_LENGTH: usize = u8::MAX as usize;
pub const REGISTER_REPLY_SIZE: usize = HEADER_SIZE + 2;
pub const FETCH_ENTRY_SIZE: usize = 10;

/// Reads the sequence byte of any datagram long enough to carry one.
pub fn sequence_of(bytes: &[u8]) -> Result<SequenceNumber, CodecError> {
    match bytes.get(2) {
        Some(sequence) => Ok(SequenceNumber(*sequence)),
        None => Err(CodecError::TooShort { expected: 3, actual: bytes.len() }),
    }
}

pub(crate) fn ensure_length(bytes: &[u8], expected: usize) -> Result<(), CodecError> {
    if bytes.len() < expected {
        return Err(CodecError::TooShort { expected, actual: bytes.len() });
    }
    Ok(())
}
