use crate::protocol::structs::fetch_entry::FetchEntry;
use crate::protocol::structs::sequence_number::SequenceNumber;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct FetchReply {
    pub sequence: SequenceNumber,
    pub entries: Vec<FetchEntry>,
}
