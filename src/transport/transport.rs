use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use log::debug;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::{lookup_host, UdpSocket};
use tokio::sync::watch;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::structs::endpoints::Endpoints;

/// How often an ephemeral primary port is re-drawn when `p + 1` is taken.
pub const EPHEMERAL_BIND_ATTEMPTS: usize = 16;

pub fn bind_udp(bind_address: SocketAddr, reuse_address: bool) -> io::Result<UdpSocket>
{
    let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

    socket.set_reuse_address(reuse_address)?;
    socket.bind(&bind_address.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

/// Binds the primary endpoint on `bind_port` and the probe endpoint on the
/// port right after it. Must run inside a tokio runtime.
pub fn bind_endpoints(bind_ip: IpAddr, bind_port: u16, reuse_address: bool) -> Result<Endpoints, TransportError>
{
    let attempts = if bind_port == 0 { EPHEMERAL_BIND_ATTEMPTS } else { 1 };
    let mut failure = TransportError::PortExhausted(bind_port);

    for _ in 0..attempts {
        let primary = bind_udp(SocketAddr::new(bind_ip, bind_port), reuse_address)?;
        let primary_port = primary.local_addr()?.port();

        let Some(secondary_port) = primary_port.checked_add(1) else {
            failure = TransportError::PortExhausted(primary_port);
            continue;
        };

        match bind_udp(SocketAddr::new(bind_ip, secondary_port), reuse_address) {
            Ok(secondary) => {
                debug!("[TRANSPORT] Bound primary endpoint on port {primary_port} and probe endpoint on port {secondary_port}");
                return Ok(Endpoints {
                    primary: Arc::new(primary),
                    secondary: Arc::new(secondary),
                });
            }
            Err(error) => {
                debug!("[TRANSPORT] Probe endpoint port {secondary_port} unavailable: {error}");
                failure = TransportError::Io(error);
            }
        }
    }

    Err(failure)
}

pub async fn resolve_registry(host: &str, port: u16) -> Result<SocketAddr, TransportError>
{
    let mut addresses = lookup_host((host, port)).await.map_err(|source| TransportError::Resolve {
        host: host.to_string(),
        source,
    })?;

    addresses
        .find(SocketAddr::is_ipv4)
        .ok_or_else(|| TransportError::NoIpv4Address(host.to_string()))
}

/// Finds the local IPv4 address the kernel would use to reach `registry`.
/// Connecting a UDP socket sends nothing; it only selects a route.
pub fn discover_local_ip(registry: SocketAddr) -> Result<Ipv4Addr, TransportError>
{
    let socket = std::net::UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect(registry)?;

    match socket.local_addr()?.ip() {
        IpAddr::V4(ip) if !ip.is_unspecified() => Ok(ip),
        _ => Err(TransportError::NoLocalAddress(registry.to_string())),
    }
}

/// Resolves once the shutdown flag is set, or once its sender is gone.
pub async fn wait_for_shutdown(shutdown: &mut watch::Receiver<bool>)
{
    let _ = shutdown.wait_for(|stopped| *stopped).await;
}
