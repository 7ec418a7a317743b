use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::net::UdpSocket;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::agent::structs::console::Console;
use crate::probe::probe::{acknowledge, receive_backoff, PROBE_BUFFER_SIZE};
use crate::probe::structs::probe_responder::ProbeResponder;
use crate::protocol::protocol::sequence_of;
use crate::transport::transport::wait_for_shutdown;

impl ProbeResponder {
    pub fn new(socket: Arc<UdpSocket>, registry: SocketAddr, console: Console, shutdown: watch::Receiver<bool>) -> ProbeResponder
    {
        ProbeResponder {
            socket,
            registry,
            console,
            shutdown,
        }
    }

    pub fn spawn(self) -> JoinHandle<()>
    {
        tokio::spawn(self.run())
    }

    pub async fn run(mut self)
    {
        let mut data = [0u8; PROBE_BUFFER_SIZE];
        let local_addr = self.socket.local_addr().ok();
        info!("[PROBE] Listening for registry probes on {local_addr:?}");
        let mut failed_receives = 0u32;

        loop {
            tokio::select! {
                _ = wait_for_shutdown(&mut self.shutdown) => {
                    info!("[PROBE] Stopping probe responder on {local_addr:?}");
                    break;
                }
                result = self.socket.recv_from(&mut data) => {
                    match result {
                        Ok((valid_bytes, remote_addr)) => {
                            failed_receives = 0;
                            debug!("[PROBE] Received {valid_bytes} bytes from {remote_addr}");
                            self.answer(&data[..valid_bytes]).await;
                        }
                        Err(e) => {
                            failed_receives = failed_receives.saturating_add(1);
                            if failed_receives == 1 {
                                error!("[PROBE] recv_from error: {e}");
                            } else {
                                debug!("[PROBE] recv_from error #{failed_receives}: {e}");
                            }
                            tokio::time::sleep(receive_backoff(failed_receives)).await;
                        }
                    }
                }
            }
        }
    }

    async fn answer(&self, datagram: &[u8])
    {
        let (sequence, ack) = match sequence_of(datagram).and_then(|sequence| Ok((sequence, acknowledge(datagram)?))) {
            Ok(answer) => answer,
            Err(e) => {
                warn!("[PROBE] Ignoring datagram: {e}");
                return;
            }
        };

        self.console.line(format!("Registration service probed me! (sequence {})", sequence.0));

        if let Err(e) = self.socket.send_to(&ack, self.registry).await {
            error!("[PROBE] Failed to send ACK to {}: {e}", self.registry);
        }
    }
}
