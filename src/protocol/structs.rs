pub mod ack;
pub mod fetch_entry;
pub mod fetch_reply;
pub mod fetch_request;
pub mod probe_request;
pub mod register_reply;
pub mod register_request;
pub mod sequence_counter;
pub mod sequence_number;
pub mod unregister_request;
