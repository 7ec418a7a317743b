use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use parking_lot::Mutex;
use tokio::net::UdpSocket;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::agent::structs::console::Console;
use crate::config::structs::agent_config::AgentConfig;
use crate::lease::enums::lease_outcome::LeaseOutcome;
use crate::lease::structs::port_lock_table::PortLockTable;
use crate::lease::structs::registration_lease::RegistrationLease;
use crate::protocol::structs::sequence_counter::SequenceCounter;
use crate::transport::structs::request_engine::RequestEngine;

/// State shared by the command loop, the lease tasks and the probe responder.
pub struct AgentContext {
    pub config: AgentConfig,
    /// Address advertised in register and unregister frames.
    pub local_ip: Ipv4Addr,
    pub engine: RequestEngine,
    pub probe_endpoint: Arc<UdpSocket>,
    pub port_locks: PortLockTable,
    pub sequence: SequenceCounter,
    pub console: Console,
    pub(crate) leases: Mutex<BTreeMap<u16, RegistrationLease>>,
    pub(crate) lease_tasks: Mutex<BTreeMap<u16, JoinHandle<LeaseOutcome>>>,
    pub(crate) probe_responder: Mutex<Option<JoinHandle<()>>>,
    pub(crate) shutdown: watch::Sender<bool>,
}
