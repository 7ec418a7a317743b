use std::io;
use std::net::Ipv4Addr;
use byteorder::{NetworkEndian, ReadBytesExt};
use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::enums::message_type::MessageType;
use crate::protocol::protocol::{ensure_length, FETCH_ENTRY_SIZE, HEADER_SIZE};
use crate::protocol::structs::fetch_entry::FetchEntry;
use crate::protocol::structs::fetch_reply::FetchReply;
use crate::protocol::structs::sequence_number::SequenceNumber;

impl FetchReply {
    /// Reads the entry count at offset 4 and that many 10 byte entries after
    /// it. Magic and type are not checked; bytes past the last entry are
    /// ignored.
    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<FetchReply, CodecError> {
        ensure_length(bytes, HEADER_SIZE + 1)?;
        let count = bytes[HEADER_SIZE] as usize;
        let body = &bytes[HEADER_SIZE + 1..];
        if body.len() < count * FETCH_ENTRY_SIZE {
            return Err(CodecError::Truncated(MessageType::FetchReply));
        }

        let entries = parse_entries(body, count)?;
        Ok(FetchReply {
            sequence: SequenceNumber(bytes[2]),
            entries,
        })
    }
}

#[inline]
fn parse_entries(bytes: &[u8], count: usize) -> Result<Vec<FetchEntry>, CodecError> {
    let mut entries = Vec::with_capacity(count);

    for chunk in bytes.chunks_exact(FETCH_ENTRY_SIZE).take(count) {
        let ip_bytes: [u8; 4] = chunk[..4].try_into().map_err(|_|
            io::Error::new(io::ErrorKind::InvalidData, "Invalid IPv4 address bytes")
        )?;
        let port = (&chunk[4..6]).read_u16::<NetworkEndian>()?;
        let data = (&chunk[6..10]).read_u32::<NetworkEndian>()?;

        entries.push(FetchEntry {
            ip: Ipv4Addr::from(ip_bytes),
            port,
            data,
        });
    }

    Ok(entries)
}
