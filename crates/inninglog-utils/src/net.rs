use listenfd::ListenFd;
use std::io;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

/// Resolves the address to bind, filling in whatever was not configured.
#[must_use]
pub fn bind_address(host: Option<IpAddr>, port: Option<u16>, default: SocketAddr) -> SocketAddr {
    SocketAddr::new(host.unwrap_or(default.ip()), port.unwrap_or(default.port()))
}

/// Binds the http listener.
///
/// Without an explicit host or port a socket handed over through `LISTEN_FDS` (systemfd, systemd) is
/// reused, so restarts during development keep the port open.
pub async fn create_listener(host: Option<IpAddr>, port: Option<u16>, default: SocketAddr) -> io::Result<TcpListener> {
    if host.is_none() && port.is_none() {
        let mut listenfd = ListenFd::from_env();
        if let Some(listener) = listenfd.take_tcp_listener(0)? {
            listener.set_nonblocking(true)?;
            tracing::debug!("using inherited listener");
            return TcpListener::from_std(listener);
        }
    }

    let address = bind_address(host, port, default);
    tracing::debug!(%address, "binding listener");
    TcpListener::bind(address).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use test_log::test;

    const DEFAULT: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3030);

    #[test]
    fn test_bind_address_defaults() {
        assert_eq!(bind_address(None, None, DEFAULT), DEFAULT);
        assert_eq!(
            bind_address(Some(IpAddr::V4(Ipv4Addr::UNSPECIFIED)), Some(8080), DEFAULT),
            "0.0.0.0:8080".parse().unwrap()
        );
    }

    #[test(tokio::test)]
    async fn test_create_listener_on_free_port() {
        let listener = create_listener(Some(IpAddr::V4(Ipv4Addr::LOCALHOST)), Some(0), DEFAULT)
            .await
            .unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
