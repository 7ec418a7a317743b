use crate::protocol::structs::sequence_number::SequenceNumber;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RegisterReply {
    pub sequence: SequenceNumber,
    pub lifetime: u16,
}
