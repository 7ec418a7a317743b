pub mod agent_config;
pub mod configuration;
pub mod log_level;
