pub mod agent_context;
pub mod command;
pub mod command_interpreter;
pub mod console;
