use crate::protocol::structs::ack::Ack;
use crate::protocol::structs::fetch_reply::FetchReply;
use crate::protocol::structs::fetch_request::FetchRequest;
use crate::protocol::structs::probe_request::ProbeRequest;
use crate::protocol::structs::register_reply::RegisterReply;
use crate::protocol::structs::register_request::RegisterRequest;
use crate::protocol::structs::unregister_request::UnregisterRequest;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Message {
    Register(RegisterRequest),
    RegisterReply(RegisterReply),
    Fetch(FetchRequest),
    FetchReply(FetchReply),
    Unregister(UnregisterRequest),
    Probe(ProbeRequest),
    Ack(Ack),
}
