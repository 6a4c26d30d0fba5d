//! # UDP Transport
//!
//! Tokio-backed UDP implementation of the [`Transport`] trait.
//!
//! UDP is connectionless: there is no delivery guarantee, and a datagram
//! larger than the receive buffer is silently truncated by the socket. The
//! services size their buffers to the protocol's maximum datagram, so a
//! well-formed peer never triggers truncation.

use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::net::UdpSocket;
use tracing::{debug, trace};

use crate::error::{ProtocolError, Result};
use crate::transport::{DatagramSource, Transport};

/// UDP-based transport bound to a local address.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    local_addr: SocketAddr,
}

impl UdpTransport {
    /// Binds a new UDP transport to the given address string
    /// (e.g. `"0.0.0.0:4546"`).
    ///
    /// # Errors
    /// Returns `Transport` for an unparseable address, `Io` if binding
    /// fails.
    pub async fn bind(addr: impl AsRef<str>) -> Result<Self> {
        let addr_str = addr.as_ref();
        let socket_addr: SocketAddr = addr_str.parse().map_err(|_| {
            ProtocolError::Transport(format!("invalid bind address: {addr_str}"))
        })?;
        Self::bind_addr(socket_addr).await
    }

    /// Binds a new UDP transport to the given socket address.
    ///
    /// # Errors
    /// Returns `Io` if binding fails.
    pub async fn bind_addr(addr: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        let local_addr = socket.local_addr()?;

        debug!(%local_addr, "UDP transport bound");

        Ok(Self { socket, local_addr })
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn recv(&self, buf: &mut [u8]) -> Result<(usize, DatagramSource)> {
        let (len, addr) = self.socket.recv_from(buf).await.map_err(|e| {
            ProtocolError::Transport(format!("receive failed: {e}"))
        })?;

        trace!(bytes = len, peer = %addr, "Datagram received");

        Ok((len, DatagramSource::new(addr)))
    }

    async fn send(&self, buf: &[u8], dest: &SocketAddr) -> Result<usize> {
        let len = self.socket.send_to(buf, dest).await.map_err(|e| {
            ProtocolError::Transport(format!("send to {dest} failed: {e}"))
        })?;

        trace!(bytes = len, peer = %dest, "Datagram sent");

        Ok(len)
    }

    fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.local_addr)
    }
}
