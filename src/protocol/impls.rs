pub mod ack;
pub mod fetch_reply;
pub mod message;
pub mod message_type;
pub mod register_reply;
pub mod sequence_counter;
