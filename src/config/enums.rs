pub mod configuration_error;
pub mod log_level;
