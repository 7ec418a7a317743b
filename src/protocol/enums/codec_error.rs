use std::io;
use thiserror::Error;
use crate::protocol::enums::message_type::MessageType;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Datagram too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("Truncated {0:?} frame")]
    Truncated(MessageType),

    #[error("Unknown message type: {0}")]
    UnknownType(u8),

    #[error("Name is {0} bytes long, at most 255 fit in a frame")]
    NameTooLong(usize),

    #[error("{0} entries do not fit in a fetch reply")]
    TooManyEntries(usize),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_display() {
        let error = CodecError::TooShort { expected: 6, actual: 4 };
        assert_eq!(format!("{}", error), "Datagram too short: expected at least 6 bytes, got 4");
    }

    #[test]
    fn test_truncated_display() {
        let error = CodecError::Truncated(MessageType::FetchReply);
        assert_eq!(format!("{}", error), "Truncated FetchReply frame");
    }

    #[test]
    fn test_name_too_long_display() {
        let error = CodecError::NameTooLong(300);
        assert_eq!(format!("{}", error), "Name is 300 bytes long, at most 255 fit in a frame");
    }
}
