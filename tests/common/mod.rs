#![allow(dead_code)]
use std::io::Write;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use parking_lot::Mutex;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use registration_agent::agent::structs::agent_context::AgentContext;
use registration_agent::agent::structs::console::Console;
use registration_agent::config::structs::agent_config::AgentConfig;
use registration_agent::transport::transport::bind_endpoints;

pub const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Captures console output for assertions.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A UDP socket standing in for the registration service.
pub struct FakeRegistry {
    pub socket: Arc<UdpSocket>,
    pub addr: SocketAddr,
}

impl FakeRegistry {
    pub async fn bind() -> FakeRegistry {
        let socket = UdpSocket::bind(SocketAddr::new(LOCALHOST, 0)).await.unwrap();
        let addr = socket.local_addr().unwrap();
        FakeRegistry { socket: Arc::new(socket), addr }
    }

    /// Next datagram, or `None` if nothing arrives within `within`.
    pub async fn recv(&self, within: Duration) -> Option<(Vec<u8>, SocketAddr)> {
        let mut buffer = [0u8; 2048];
        match tokio::time::timeout(within, self.socket.recv_from(&mut buffer)).await {
            Ok(Ok((size, from))) => Some((buffer[..size].to_vec(), from)),
            _ => None,
        }
    }

    /// Receives `count` datagrams, stamping each with its arrival time.
    pub async fn collect_timed(&self, count: usize, within: Duration) -> Vec<(Vec<u8>, Instant)> {
        let mut datagrams = Vec::with_capacity(count);
        while datagrams.len() < count {
            match self.recv(within).await {
                Some((datagram, _)) => datagrams.push((datagram, Instant::now())),
                None => break,
            }
        }
        datagrams
    }

    pub async fn drain(&self, within: Duration) -> Vec<Vec<u8>> {
        let mut datagrams = Vec::new();
        while let Some((datagram, _)) = self.recv(within).await {
            datagrams.push(datagram);
        }
        datagrams
    }

    pub async fn send_to(&self, bytes: &[u8], to: SocketAddr) {
        self.socket.send_to(bytes, to).await.unwrap();
    }

    /// Answers every request with `handler`'s output, keeping a copy of each
    /// request.
    pub fn serve<F>(&self, handler: F) -> (JoinHandle<()>, Arc<Mutex<Vec<Vec<u8>>>>)
    where
        F: Fn(&[u8]) -> Option<Vec<u8>> + Send + 'static,
    {
        let socket = self.socket.clone();
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = received.clone();
        let task = tokio::spawn(async move {
            let mut buffer = [0u8; 2048];
            while let Ok((size, from)) = socket.recv_from(&mut buffer).await {
                let request = buffer[..size].to_vec();
                log.lock().push(request.clone());
                if let Some(reply) = handler(&request) {
                    let _ = socket.send_to(&reply, from).await;
                }
            }
        });
        (task, received)
    }
}

pub fn register_reply(sequence: u8, lifetime: u16) -> Vec<u8> {
    let mut reply = vec![0xC4, 0x61, sequence, 2];
    reply.extend_from_slice(&lifetime.to_be_bytes());
    reply
}

pub fn ack(sequence: u8) -> Vec<u8> {
    vec![0xC4, 0x61, sequence, 7]
}

pub fn test_agent_config() -> AgentConfig {
    AgentConfig {
        bind_address: String::from("127.0.0.1"),
        request_timeout_ms: 150,
        max_attempts: 3,
        ..AgentConfig::default()
    }
}

pub fn create_test_context(registry: SocketAddr, config: AgentConfig) -> (Arc<AgentContext>, SharedBuffer) {
    let output = SharedBuffer::default();
    let endpoints = bind_endpoints(LOCALHOST, 0, false).unwrap();
    let context = AgentContext::new(config, Ipv4Addr::LOCALHOST, registry, endpoints, Console::from_writer(output.clone()));
    (context, output)
}

/// Polls `condition` until it holds or two seconds pass.
pub async fn eventually<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
