pub mod agent_error;
pub mod command;
pub mod command_error;
pub mod flow;
