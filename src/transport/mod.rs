//! # Datagram Transport
//!
//! The transport capability the protocol is built over: something that moves
//! whole datagrams to and from peer addresses. The services depend only on
//! the [`Transport`] trait, so the UDP implementation can be swapped for the
//! in-memory mock (or an IPv6 socket) without touching codec or protocol
//! logic.

use std::net::SocketAddr;
use std::time::Instant;

use async_trait::async_trait;

use crate::error::Result;

pub mod mock;
pub mod udp;

pub use mock::{MockNetwork, MockTransport};
pub use udp::UdpTransport;

/// Metadata about the source of a received datagram.
///
/// Carries the peer address the acknowledgment must be sent to, plus the
/// receive timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatagramSource {
    /// Source address (IP and port).
    pub addr: SocketAddr,
    /// When the datagram was received.
    pub received_at: Instant,
}

impl DatagramSource {
    /// Creates a `DatagramSource` stamped with the current time.
    #[must_use]
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            received_at: Instant::now(),
        }
    }

    /// Time elapsed since the datagram was received.
    #[must_use]
    pub fn age(&self) -> std::time::Duration {
        self.received_at.elapsed()
    }
}

/// Abstract interface for datagram-based transport.
///
/// Implementations must be `Send + Sync` so a transport can be shared by
/// async tasks. Buffer management is the caller's responsibility: `recv`
/// writes into a caller-supplied buffer and reports how many bytes one
/// datagram occupied.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Receives one datagram, blocking until data arrives or the transport
    /// fails.
    ///
    /// # Errors
    /// Returns `Transport` if the receive fails.
    async fn recv(&self, buf: &mut [u8]) -> Result<(usize, DatagramSource)>;

    /// Sends one datagram to `dest`, returning the number of bytes sent.
    ///
    /// # Errors
    /// Returns `Transport` if the send fails.
    async fn send(&self, buf: &[u8], dest: &SocketAddr) -> Result<usize>;

    /// Local address this transport is bound to.
    ///
    /// # Errors
    /// Returns an error if the address cannot be determined.
    fn local_addr(&self) -> Result<SocketAddr>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datagram_source_age() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let source = DatagramSource::new(addr);

        assert_eq!(source.addr, addr);
        assert!(source.age() < std::time::Duration::from_secs(1));
    }
}
