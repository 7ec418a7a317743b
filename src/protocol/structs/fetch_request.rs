use crate::protocol::structs::sequence_number::SequenceNumber;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct FetchRequest {
    pub sequence: SequenceNumber,
    pub prefix: String,
}
