use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::watch;
use crate::agent::structs::console::Console;

#[derive(Debug)]
pub struct ProbeResponder {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) registry: SocketAddr,
    pub(crate) console: Console,
    pub(crate) shutdown: watch::Receiver<bool>,
}
