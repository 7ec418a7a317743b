use std::sync::Arc;
use tokio::net::UdpSocket;

/// The two local UDP endpoints, bound to consecutive ports.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub primary: Arc<UdpSocket>,
    pub secondary: Arc<UdpSocket>,
}
