#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum MessageType {
    Register,
    RegisterReply,
    Fetch,
    FetchReply,
    Unregister,
    Probe,
    Ack,
}
