use serde::{Deserialize, Serialize};
use crate::config::enums::log_level::LogLevel;
use crate::config::structs::agent_config::AgentConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: LogLevel,
    pub agent: AgentConfig,
}
