use std::io;
use std::io::{Cursor, Read, Write};
use std::net::Ipv4Addr;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::enums::message::Message;
use crate::protocol::enums::message_type::MessageType;
use crate::protocol::protocol::{ensure_length, FETCH_ENTRY_SIZE, HEADER_SIZE, MAGIC};
use crate::protocol::structs::ack::Ack;
use crate::protocol::structs::fetch_reply::FetchReply;
use crate::protocol::structs::fetch_request::FetchRequest;
use crate::protocol::structs::probe_request::ProbeRequest;
use crate::protocol::structs::register_reply::RegisterReply;
use crate::protocol::structs::register_request::RegisterRequest;
use crate::protocol::structs::sequence_number::SequenceNumber;
use crate::protocol::structs::unregister_request::UnregisterRequest;

impl From<RegisterRequest> for Message {
    fn from(r: RegisterRequest) -> Self {
        Self::Register(r)
    }
}

impl From<RegisterReply> for Message {
    fn from(r: RegisterReply) -> Self {
        Self::RegisterReply(r)
    }
}

impl From<FetchRequest> for Message {
    fn from(r: FetchRequest) -> Self {
        Self::Fetch(r)
    }
}

impl From<FetchReply> for Message {
    fn from(r: FetchReply) -> Self {
        Self::FetchReply(r)
    }
}

impl From<UnregisterRequest> for Message {
    fn from(r: UnregisterRequest) -> Self {
        Self::Unregister(r)
    }
}

impl From<ProbeRequest> for Message {
    fn from(r: ProbeRequest) -> Self {
        Self::Probe(r)
    }
}

impl From<Ack> for Message {
    fn from(r: Ack) -> Self {
        Self::Ack(r)
    }
}

impl Message {
    pub fn message_type(&self) -> MessageType {
        match self {
            Message::Register(_) => MessageType::Register,
            Message::RegisterReply(_) => MessageType::RegisterReply,
            Message::Fetch(_) => MessageType::Fetch,
            Message::FetchReply(_) => MessageType::FetchReply,
            Message::Unregister(_) => MessageType::Unregister,
            Message::Probe(_) => MessageType::Probe,
            Message::Ack(_) => MessageType::Ack,
        }
    }

    pub fn sequence(&self) -> SequenceNumber {
        match self {
            Message::Register(r) => r.sequence,
            Message::RegisterReply(r) => r.sequence,
            Message::Fetch(r) => r.sequence,
            Message::FetchReply(r) => r.sequence,
            Message::Unregister(r) => r.sequence,
            Message::Probe(r) => r.sequence,
            Message::Ack(r) => r.sequence,
        }
    }

    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), CodecError> {
        // Length checks come first so a rejected frame leaves nothing behind.
        let name_length = match self {
            Message::Register(r) => Some(length_byte(r.name.len())?),
            Message::Fetch(r) => Some(length_byte(r.prefix.len())?),
            Message::FetchReply(r) => Some(
                u8::try_from(r.entries.len()).map_err(|_| CodecError::TooManyEntries(r.entries.len()))?
            ),
            _ => None,
        };

        bytes.write_all(&MAGIC)?;
        bytes.write_u8(self.sequence().0)?;
        bytes.write_u8(self.message_type().to_u8())?;

        match self {
            Message::Register(r) => {
                bytes.write_all(&r.ip.octets())?;
                bytes.write_u16::<NetworkEndian>(r.port)?;
                bytes.write_u32::<NetworkEndian>(r.data)?;
                bytes.write_u8(name_length.unwrap_or_default())?;
                bytes.write_all(r.name.as_bytes())?;
            }
            Message::RegisterReply(r) => {
                bytes.write_u16::<NetworkEndian>(r.lifetime)?;
            }
            Message::Fetch(r) => {
                bytes.write_u8(name_length.unwrap_or_default())?;
                bytes.write_all(r.prefix.as_bytes())?;
            }
            Message::FetchReply(r) => {
                bytes.write_u8(name_length.unwrap_or_default())?;
                let mut entry_buffer = Vec::with_capacity(r.entries.len() * FETCH_ENTRY_SIZE);
                for entry in &r.entries {
                    entry_buffer.extend_from_slice(&entry.ip.octets());
                    entry_buffer.write_u16::<NetworkEndian>(entry.port)?;
                    entry_buffer.write_u32::<NetworkEndian>(entry.data)?;
                }
                bytes.write_all(&entry_buffer)?;
            }
            Message::Unregister(r) => {
                bytes.write_all(&r.ip.octets())?;
                bytes.write_u16::<NetworkEndian>(r.port)?;
            }
            Message::Probe(_) | Message::Ack(_) => {}
        }

        Ok(())
    }

    /// Decodes a frame of any type, dispatching on the type byte. The magic
    /// bytes are not checked.
    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        ensure_length(bytes, HEADER_SIZE)?;

        let sequence = SequenceNumber(bytes[2]);
        let message_type = MessageType::from_u8(bytes[3]).ok_or(CodecError::UnknownType(bytes[3]))?;

        let mut cursor = Cursor::new(&bytes[HEADER_SIZE..]);
        let truncated = |_: io::Error| CodecError::Truncated(message_type);

        match message_type {
            MessageType::Register => {
                let mut ip = [0; 4];
                cursor.read_exact(&mut ip).map_err(truncated)?;
                let port = cursor.read_u16::<NetworkEndian>().map_err(truncated)?;
                let data = cursor.read_u32::<NetworkEndian>().map_err(truncated)?;
                let name = read_name(&mut cursor).map_err(truncated)?;

                Ok(RegisterRequest {
                    sequence,
                    ip: Ipv4Addr::from(ip),
                    port,
                    data,
                    name,
                }.into())
            }
            MessageType::RegisterReply => {
                RegisterReply::from_bytes(bytes).map(Into::into)
            }
            MessageType::Fetch => {
                // A fetch that ends right after the header asks for everything.
                let prefix = if bytes.len() == HEADER_SIZE {
                    String::new()
                } else {
                    read_name(&mut cursor).map_err(truncated)?
                };

                Ok(FetchRequest { sequence, prefix }.into())
            }
            MessageType::FetchReply => {
                FetchReply::from_bytes(bytes).map(Into::into)
            }
            MessageType::Unregister => {
                let mut ip = [0; 4];
                cursor.read_exact(&mut ip).map_err(truncated)?;
                let port = cursor.read_u16::<NetworkEndian>().map_err(truncated)?;

                Ok(UnregisterRequest {
                    sequence,
                    ip: Ipv4Addr::from(ip),
                    port,
                }.into())
            }
            MessageType::Probe => Ok(ProbeRequest { sequence }.into()),
            MessageType::Ack => Ok(Ack { sequence }.into()),
        }
    }

    #[inline]
    pub fn estimated_size(&self) -> usize {
        match self {
            Message::Register(r) => HEADER_SIZE + 11 + r.name.len(),
            Message::RegisterReply(_) => HEADER_SIZE + 2,
            Message::Fetch(r) => HEADER_SIZE + 1 + r.prefix.len(),
            Message::FetchReply(r) => HEADER_SIZE + 1 + r.entries.len() * FETCH_ENTRY_SIZE,
            Message::Unregister(_) => HEADER_SIZE + 6,
            Message::Probe(_) | Message::Ack(_) => HEADER_SIZE,
        }
    }

    #[inline]
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut buffer = Vec::with_capacity(self.estimated_size());
        self.write(&mut buffer)?;
        Ok(buffer)
    }
}

#[inline]
fn length_byte(length: usize) -> Result<u8, CodecError> {
    u8::try_from(length).map_err(|_| CodecError::NameTooLong(length))
}

fn read_name(cursor: &mut Cursor<&[u8]>) -> Result<String, io::Error> {
    let length = cursor.read_u8()? as usize;
    let mut name = vec![0; length];
    cursor.read_exact(&mut name)?;
    Ok(String::from_utf8_lossy(&name).into_owned())
}
