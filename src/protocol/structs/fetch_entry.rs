use std::net::Ipv4Addr;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct FetchEntry {
    pub ip: Ipv4Addr,
    pub port: u16,
    pub data: u32,
}
