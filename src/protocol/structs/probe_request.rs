use crate::protocol::structs::sequence_number::SequenceNumber;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ProbeRequest {
    pub sequence: SequenceNumber,
}
