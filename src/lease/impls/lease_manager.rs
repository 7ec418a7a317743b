use std::sync::Arc;
use log::{debug, info, warn};
use tokio::task::JoinHandle;
use crate::agent::structs::agent_context::AgentContext;
use crate::lease::enums::lease_outcome::LeaseOutcome;
use crate::lease::structs::lease_manager::LeaseManager;
use crate::lease::structs::registration_lease::RegistrationLease;
use crate::protocol::enums::message_type::MessageType;
use crate::protocol::structs::register_reply::RegisterReply;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::transport::wait_for_shutdown;

impl LeaseManager {
    pub fn new(context: Arc<AgentContext>, lease: RegistrationLease) -> LeaseManager
    {
        LeaseManager {
            context,
            lease,
        }
    }

    pub fn spawn(self) -> JoinHandle<LeaseOutcome>
    {
        tokio::spawn(self.run())
    }

    pub async fn run(self) -> LeaseOutcome
    {
        let LeaseManager { context, mut lease } = self;
        let mut shutdown = context.subscribe_shutdown();
        let port = lease.port;

        loop {
            debug!("[LEASE] Port {port} renews in {:?}", lease.renewal_delay);
            tokio::select! {
                _ = wait_for_shutdown(&mut shutdown) => {
                    debug!("[LEASE] Renewal of port {port} cancelled");
                    return LeaseOutcome::Cancelled;
                }
                _ = tokio::time::sleep(lease.renewal_delay) => {}
            }

            if context.drop_unregistered(port) {
                info!("[LEASE] Port {port} was unregistered, dropping its lease");
                return LeaseOutcome::Unregistered;
            }

            context.sequence.next();
            let reply = match context.engine.send(MessageType::Register, &lease.request).await {
                Ok(response) => RegisterReply::from_bytes(&response),
                Err(TransportError::Cancelled) => return LeaseOutcome::Cancelled,
                Err(error) => {
                    warn!("[LEASE] Renewal of port {port} failed: {error}");
                    return Self::give_up(&context, port);
                }
            };

            match reply {
                Ok(reply) => {
                    context.console.line(format!("Reregister {}:{} succeed with lifetime = {}", context.local_ip, port, reply.lifetime));
                    lease = lease.renewed(reply.lifetime, context.renewal_margin());
                    context.record_lease(lease.clone());
                }
                Err(error) => {
                    warn!("[LEASE] Unreadable renewal reply for port {port}: {error}");
                    return Self::give_up(&context, port);
                }
            }
        }
    }

    fn give_up(context: &AgentContext, port: u16) -> LeaseOutcome
    {
        context.port_locks.release(port);
        context.forget_lease(port);
        context.console.line(format!("Reregister {}:{} failed.", context.local_ip, port));
        LeaseOutcome::RenewalFailed
    }
}
