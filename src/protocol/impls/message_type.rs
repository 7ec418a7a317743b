use std::fmt;
use crate::protocol::enums::message_type::MessageType;

impl MessageType {
    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Register),
            2 => Some(Self::RegisterReply),
            3 => Some(Self::Fetch),
            4 => Some(Self::FetchReply),
            5 => Some(Self::Unregister),
            6 => Some(Self::Probe),
            7 => Some(Self::Ack),
            _ => None,
        }
    }

    #[inline]
    pub fn to_u8(self) -> u8 {
        match self {
            MessageType::Register => 1,
            MessageType::RegisterReply => 2,
            MessageType::Fetch => 3,
            MessageType::FetchReply => 4,
            MessageType::Unregister => 5,
            MessageType::Probe => 6,
            MessageType::Ack => 7,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageType::Register => "register",
            MessageType::RegisterReply => "register reply",
            MessageType::Fetch => "fetch",
            MessageType::FetchReply => "fetch reply",
            MessageType::Unregister => "unregister",
            MessageType::Probe => "probe",
            MessageType::Ack => "ack",
        };
        f.write_str(name)
    }
}
