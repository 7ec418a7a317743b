use std::collections::BTreeMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, error};
use parking_lot::Mutex;
use tokio::sync::watch;
use crate::agent::structs::agent_context::AgentContext;
use crate::agent::structs::console::Console;
use crate::config::structs::agent_config::AgentConfig;
use crate::lease::structs::lease_manager::LeaseManager;
use crate::lease::structs::port_lock_table::PortLockTable;
use crate::lease::structs::registration_lease::RegistrationLease;
use crate::probe::structs::probe_responder::ProbeResponder;
use crate::protocol::structs::sequence_counter::SequenceCounter;
use crate::transport::structs::endpoints::Endpoints;
use crate::transport::structs::request_engine::RequestEngine;

impl AgentContext {
    pub fn new(config: AgentConfig, local_ip: Ipv4Addr, registry: SocketAddr, endpoints: Endpoints, console: Console) -> Arc<AgentContext>
    {
        let (shutdown, shutdown_rx) = watch::channel(false);
        let engine = RequestEngine::new(
            endpoints.primary,
            registry,
            config.request_timeout(),
            config.max_attempts,
            config.fetch_buffer_size,
            shutdown_rx,
        );

        Arc::new(AgentContext {
            config,
            local_ip,
            engine,
            probe_endpoint: endpoints.secondary,
            port_locks: PortLockTable::new(),
            sequence: SequenceCounter::new(),
            console,
            leases: Mutex::new(BTreeMap::new()),
            lease_tasks: Mutex::new(BTreeMap::new()),
            probe_responder: Mutex::new(None),
            shutdown,
        })
    }

    pub fn subscribe_shutdown(&self) -> watch::Receiver<bool>
    {
        self.shutdown.subscribe()
    }

    /// Wakes every blocked request, lease sleep and probe receive.
    pub fn shutdown(&self)
    {
        self.shutdown.send_replace(true);
    }

    pub fn is_shutting_down(&self) -> bool
    {
        *self.shutdown.borrow()
    }

    pub fn renewal_margin(&self) -> Duration
    {
        self.config.renewal_margin()
    }

    pub fn lease(&self, port: u16) -> Option<RegistrationLease>
    {
        self.leases.lock().get(&port).cloned()
    }

    pub fn record_lease(&self, lease: RegistrationLease)
    {
        self.leases.lock().insert(lease.port, lease);
    }

    pub fn forget_lease(&self, port: u16)
    {
        self.leases.lock().remove(&port);
    }

    /// Drops the lock entry and lease of a port that is no longer locked.
    /// Returns false, touching nothing, while the port is locked.
    pub fn drop_unregistered(&self, port: u16) -> bool
    {
        let mut leases = self.leases.lock();
        if !self.port_locks.remove_if_unlocked(port) {
            return false;
        }
        leases.remove(&port);
        true
    }

    pub fn has_lease_task(&self, port: u16) -> bool
    {
        self.lease_tasks.lock().get(&port).is_some_and(|task| !task.is_finished())
    }

    /// Records `lease` and starts its renewal task. A task already running for
    /// the same port is aborted, so each port has at most one.
    pub fn start_lease(self: &Arc<Self>, lease: RegistrationLease)
    {
        let port = lease.port;
        self.record_lease(lease.clone());

        let task = LeaseManager::new(self.clone(), lease).spawn();
        if let Some(previous) = self.lease_tasks.lock().insert(port, task) {
            debug!("[AGENT] Replacing renewal task of port {port}");
            previous.abort();
        }
    }

    /// Starts the probe responder unless it is already running. Returns
    /// whether this call started it.
    pub fn ensure_probe_responder(self: &Arc<Self>) -> bool
    {
        let mut slot = self.probe_responder.lock();
        if slot.is_some() {
            return false;
        }

        let responder = ProbeResponder::new(
            self.probe_endpoint.clone(),
            self.engine.registry(),
            self.console.clone(),
            self.subscribe_shutdown(),
        );
        *slot = Some(responder.spawn());
        true
    }

    /// Waits for every lease task and the probe responder to stop. Call after
    /// [`AgentContext::shutdown`].
    pub async fn join_background(&self)
    {
        let lease_tasks = std::mem::take(&mut *self.lease_tasks.lock());
        for (port, task) in lease_tasks {
            match task.await {
                Ok(outcome) => debug!("[AGENT] Renewal task of port {port} ended: {outcome:?}"),
                Err(e) if e.is_cancelled() => {}
                Err(e) => error!("[AGENT] Renewal task of port {port} failed: {e}"),
            }
        }

        let probe_responder = self.probe_responder.lock().take();
        if let Some(task) = probe_responder {
            if let Err(e) = task.await {
                error!("[AGENT] Probe responder failed: {e}");
            }
        }
    }
}
