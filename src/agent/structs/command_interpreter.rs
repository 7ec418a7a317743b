use std::sync::Arc;
use crate::agent::structs::agent_context::AgentContext;

pub struct CommandInterpreter {
    pub(crate) context: Arc<AgentContext>,
}
