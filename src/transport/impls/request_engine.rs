use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, warn};
use tokio::net::UdpSocket;
use tokio::sync::{watch, Mutex};
use tokio::time::Instant;
use crate::protocol::enums::message_type::MessageType;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::structs::request_engine::RequestEngine;
use crate::transport::transport::wait_for_shutdown;

const RECV_ERROR_PAUSE: Duration = Duration::from_millis(10);

impl RequestEngine {
    pub fn new(socket: Arc<UdpSocket>, registry: SocketAddr, timeout: Duration, max_attempts: u8, buffer_size: usize, shutdown: watch::Receiver<bool>) -> RequestEngine
    {
        RequestEngine {
            socket,
            registry,
            timeout,
            max_attempts,
            buffer_size,
            exchange: Mutex::new(()),
            shutdown,
        }
    }

    pub fn registry(&self) -> SocketAddr {
        self.registry
    }

    /// Sends `request` to the registry and returns the first datagram that
    /// arrives on the primary endpoint within an attempt window. The reply is
    /// not matched against the request's sequence number or type.
    #[tracing::instrument(skip(self, request), level = "debug")]
    pub async fn send(&self, kind: MessageType, request: &[u8]) -> Result<Vec<u8>, TransportError>
    {
        let _exchange = self.exchange.lock().await;
        let mut shutdown = self.shutdown.clone();
        let mut buffer = vec![0u8; self.buffer_size];

        for attempt in 1..=self.max_attempts {
            if *shutdown.borrow() {
                return Err(TransportError::Cancelled);
            }

            self.socket.send_to(request, self.registry).await?;
            debug!("[REQUEST] Sent {kind} request ({} bytes) to {}, attempt {attempt}", request.len(), self.registry);

            if let Some(response) = self.await_reply(kind, &mut buffer, &mut shutdown).await? {
                return Ok(response);
            }
        }

        warn!("No response received after {} tries.", self.max_attempts);
        Err(TransportError::NoResponse { attempts: self.max_attempts })
    }

    /// Waits one attempt window for any datagram. Receive errors do not end
    /// the window; the wait resumes after a short pause until the deadline.
    async fn await_reply(&self, kind: MessageType, buffer: &mut [u8], shutdown: &mut watch::Receiver<bool>) -> Result<Option<Vec<u8>>, TransportError>
    {
        let deadline = Instant::now() + self.timeout;

        loop {
            tokio::select! {
                _ = wait_for_shutdown(shutdown) => {
                    return Err(TransportError::Cancelled);
                }
                result = tokio::time::timeout_at(deadline, self.socket.recv_from(buffer)) => {
                    match result {
                        Ok(Ok((size, remote_addr))) => {
                            debug!("[REQUEST] Received {size} bytes from {remote_addr} for {kind} request");
                            return Ok(Some(buffer[..size].to_vec()));
                        }
                        Ok(Err(error)) => {
                            warn!("[REQUEST] Receive error while waiting on {kind} response: {error}");
                            tokio::time::sleep_until(deadline.min(Instant::now() + RECV_ERROR_PAUSE)).await;
                        }
                        Err(_) => {
                            warn!("Timed out waiting on response for {kind} request.");
                            return Ok(None);
                        }
                    }
                }
            }
        }
    }
}
