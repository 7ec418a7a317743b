use std::net::Ipv4Addr;
use crate::protocol::structs::sequence_number::SequenceNumber;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct UnregisterRequest {
    pub sequence: SequenceNumber,
    pub ip: Ipv4Addr,
    pub port: u16,
}
