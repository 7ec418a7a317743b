#[cfg(test)]
mod probe_tests {
    use std::time::Duration;
    use crate::probe::probe::{acknowledge, receive_backoff};
    use crate::protocol::enums::codec_error::CodecError;

    #[test]
    fn test_ack_echoes_probe_sequence() {
        assert_eq!(acknowledge(&[0xC4, 0x61, 99, 6]).unwrap(), vec![0xC4, 0x61, 99, 7]);
    }

    #[test]
    fn test_ack_ignores_type_and_magic() {
        assert_eq!(acknowledge(&[0, 0, 5]).unwrap(), vec![0xC4, 0x61, 5, 7]);
    }

    #[test]
    fn test_short_datagram_is_rejected() {
        assert!(matches!(acknowledge(&[0xC4, 0x61]), Err(CodecError::TooShort { expected: 3, actual: 2 })));
        assert!(acknowledge(&[]).is_err());
    }

    #[test]
    fn test_receive_backoff_grows_and_caps() {
        assert_eq!(receive_backoff(1), Duration::from_millis(10));
        assert_eq!(receive_backoff(2), Duration::from_millis(20));
        assert_eq!(receive_backoff(4), Duration::from_millis(80));
        assert_eq!(receive_backoff(8), Duration::from_secs(1));
        assert_eq!(receive_backoff(u32::MAX), Duration::from_secs(1));
    }
}
