use hickory_server::ServerFuture;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use zonedns_infrastructure::dns::server::DnsServerHandler;

/// Serves UDP and TCP on the same address until Ctrl-C or `shutdown` fires.
pub async fn start_dns_server(
    bind_addr: String,
    handler: DnsServerHandler,
    tcp_timeout: Duration,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    info!(bind_address = %socket_addr, "Starting DNS server");

    let mut server = ServerFuture::new(handler);
    server.register_socket(create_udp_socket(domain, socket_addr)?);
    server.register_listener(create_tcp_listener(domain, socket_addr)?, tcp_timeout);

    info!("DNS server ready on {} (udp+tcp)", socket_addr);

    tokio::select! {
        result = server.block_until_done() => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
            }
            shutdown.cancel();
            return Ok(());
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received, shutting down");
        }
        _ = shutdown.cancelled() => {
            info!("Shutdown requested");
        }
    }

    shutdown.cancel();
    if let Err(e) = server.shutdown_gracefully().await {
        error!(error = %e, "DNS server did not shut down cleanly");
    }

    Ok(())
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
