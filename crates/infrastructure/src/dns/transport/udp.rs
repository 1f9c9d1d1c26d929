//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One socket per exchange. The server name is resolved once, under the same
//! deadline as a receive. Each attempt sends the query and waits up to the
//! configured timeout for a non-empty reply; timeouts and socket errors are
//! retried immediately until the attempt budget is spent.

use super::TransportFailure;
use crate::dns::wire::MAX_MESSAGE_LEN;
use async_trait::async_trait;
use dnsclient_application::ports::{Exchange, QueryTransport};
use dnsclient_domain::DomainError;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{Duration, Instant};
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// DNS over UDP transport with bounded retry
pub struct UdpTransport {
    server: String,
    port: u16,
    timeout: Duration,
    max_retries: u32,
}

impl UdpTransport {
    pub fn new(server: impl Into<String>, port: u16, timeout: Duration, max_retries: u32) -> Self {
        Self {
            server: server.into(),
            port,
            timeout,
            max_retries,
        }
    }

    /// Resolves the server once per exchange, bounded by the receive timeout.
    async fn resolve(&self) -> Result<SocketAddr, DomainError> {
        let lookup = tokio::net::lookup_host((self.server.as_str(), self.port));
        let mut addrs = tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| DomainError::Socket {
                server: self.server(),
                detail: "timed out resolving server address".to_string(),
            })?
            .map_err(|e| DomainError::Socket {
                server: self.server(),
                detail: format!("cannot resolve server address: {}", e),
            })?;

        addrs.next().ok_or_else(|| DomainError::Socket {
            server: self.server(),
            detail: "server name resolved to no addresses".to_string(),
        })
    }

    async fn attempt(
        &self,
        socket: &UdpSocket,
        target: SocketAddr,
        query: &[u8],
        recv_buf: &mut [u8],
    ) -> Result<(usize, Duration), TransportFailure> {
        let started = Instant::now();

        socket
            .send_to(query, target)
            .await
            .map_err(|e| TransportFailure::Socket(e.to_string()))?;

        let (len, from) = tokio::time::timeout(self.timeout, socket.recv_from(recv_buf))
            .await
            .map_err(|_| TransportFailure::Timeout)?
            .map_err(|e| TransportFailure::Socket(e.to_string()))?;
        let elapsed = started.elapsed();

        if len == 0 {
            return Err(TransportFailure::EmptyReply);
        }

        if !is_expected_source(target, from) {
            warn!(
                expected = %target,
                received_from = %from,
                "UDP response from unexpected source"
            );
        }

        Ok((len, elapsed))
    }
}

fn bind_addr(target: SocketAddr) -> SocketAddr {
    if target.is_ipv6() {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
    } else {
        SocketAddr::from(([0, 0, 0, 0], 0))
    }
}

/// Compares ip and port; an IPv4-mapped IPv6 peer counts as its IPv4 form.
fn is_expected_source(target: SocketAddr, from: SocketAddr) -> bool {
    let canonical = |ip: IpAddr| match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(ip),
        v4 => v4,
    };
    canonical(target.ip()) == canonical(from.ip()) && target.port() == from.port()
}

#[async_trait]
impl QueryTransport for UdpTransport {
    async fn exchange(&self, query: &[u8]) -> Result<Exchange, DomainError> {
        let target = self.resolve().await?;
        let socket = UdpSocket::bind(bind_addr(target))
            .await
            .map_err(|e| DomainError::Socket {
                server: self.server(),
                detail: format!("failed to bind UDP socket: {}", e),
            })?;

        let mut recv_buf = vec![0u8; MAX_MESSAGE_LEN];
        let mut retries = 0u32;

        while retries < self.max_retries {
            match self.attempt(&socket, target, query, &mut recv_buf).await {
                Ok((len, elapsed)) => {
                    debug!(
                        server = %self.server(),
                        bytes_received = len,
                        retries,
                        "UDP response received"
                    );
                    recv_buf.truncate(len);
                    return Ok(Exchange {
                        bytes: recv_buf,
                        elapsed,
                        retries,
                    });
                }
                Err(failure) => {
                    retries += 1;
                    warn!(
                        server = %self.server(),
                        attempt = retries,
                        max_retries = self.max_retries,
                        "UDP attempt failed: {}",
                        failure
                    );
                }
            }
        }

        Err(DomainError::RetriesExhausted {
            attempts: self.max_retries,
        })
    }

    fn server(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }
}
