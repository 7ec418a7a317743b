use std::net::Ipv4Addr;
use crate::protocol::structs::sequence_number::SequenceNumber;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct RegisterRequest {
    pub sequence: SequenceNumber,
    pub ip: Ipv4Addr,
    pub port: u16,
    pub data: u32,
    pub name: String,
}
