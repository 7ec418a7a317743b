pub mod endpoints;
pub mod request_engine;
