pub mod codec_error;
pub mod message;
pub mod message_type;
