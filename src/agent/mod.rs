//! Interactive side of the agent.
//!
//! [`agent::agent_service`] resolves the registry, binds the two endpoints
//! and hands an [`structs::agent_context::AgentContext`] to the
//! [`structs::command_interpreter::CommandInterpreter`], which reads one
//! command per line:
//!
//! | Command | Arguments | Request |
//! |---------|-----------|---------|
//! | `r` | port, data, service name | REGISTER, then lease renewal starts |
//! | `f` | optional name prefix | FETCH |
//! | `u` | port | UNREGISTER, only for ports this agent registered |
//! | `p` | none | PROBE |
//! | `q` | none | stops every background task and exits |
//!
//! The context is shared by `Arc` with every lease task and the probe
//! responder; nothing lives in globals.

pub mod enums;
pub mod impls;
pub mod structs;

#[allow(clippy::module_inception)]
pub mod agent;
