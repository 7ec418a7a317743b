use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::{watch, Mutex};

#[derive(Debug)]
pub struct RequestEngine {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) registry: SocketAddr,
    pub(crate) timeout: Duration,
    pub(crate) max_attempts: u8,
    pub(crate) buffer_size: usize,
    /// Held for a whole exchange so concurrent callers never read each
    /// other's replies.
    pub(crate) exchange: Mutex<()>,
    pub(crate) shutdown: watch::Receiver<bool>,
}
