use std::sync::Arc;
use crate::agent::structs::agent_context::AgentContext;
use crate::lease::structs::registration_lease::RegistrationLease;

pub struct LeaseManager {
    pub(crate) context: Arc<AgentContext>,
    pub(crate) lease: RegistrationLease,
}
