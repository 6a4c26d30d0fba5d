//! # Exchange Client
//!
//! One request, one reply. The client encodes a request packet, sends it to
//! the configured server address, and blocks on a single receive until the
//! acknowledgment arrives or the configured timeout elapses. There is no
//! retry; every failure is surfaced to the caller.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::core::packet::Packet;
use crate::error::{ProtocolError, Result};
use crate::protocol::exchange;
use crate::transport::{Transport, UdpTransport};
use crate::utils::buffer_pool::RECV_BUFFER_SIZE;
use crate::utils::timeout::with_timeout_error;

/// The decoded reply to one request.
#[derive(Debug, Clone)]
pub struct Reply {
    /// The acknowledgment packet.
    pub packet: Packet,
    /// Address the reply came from.
    pub responder: SocketAddr,
}

/// Single-exchange client over an injected datagram transport.
pub struct Client<T> {
    transport: T,
    server_addr: SocketAddr,
    connection_id: u64,
    response_timeout: Duration,
}

impl Client<UdpTransport> {
    /// Creates a UDP client targeting the configured server address,
    /// bound to an ephemeral local port of the matching address family.
    ///
    /// # Errors
    /// Returns `ConfigError` for an unparseable server address, or a
    /// transport error if the local bind fails.
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let server_addr: SocketAddr = config.address.parse().map_err(|_| {
            ProtocolError::ConfigError(format!("Invalid server address: '{}'", config.address))
        })?;

        let bind_addr = if server_addr.is_ipv4() {
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
        } else {
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
        };

        let transport = UdpTransport::bind_addr(bind_addr).await?;
        Ok(Self::new(transport, server_addr, config.response_timeout))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over an already-bound transport with a freshly
    /// drawn random connection id.
    pub fn new(transport: T, server_addr: SocketAddr, response_timeout: Duration) -> Self {
        Self {
            transport,
            server_addr,
            connection_id: rand::random(),
            response_timeout,
        }
    }

    /// Replaces the connection id with a caller-chosen value.
    #[must_use]
    pub fn with_connection_id(mut self, connection_id: u64) -> Self {
        self.connection_id = connection_id;
        self
    }

    /// The connection id carried by this client's requests.
    #[must_use]
    pub fn connection_id(&self) -> u64 {
        self.connection_id
    }

    /// Performs one request/reply exchange.
    ///
    /// Sends the payload as a request packet and awaits exactly one reply
    /// datagram. The receive is bounded by the configured response
    /// timeout; the protocol itself models none.
    ///
    /// # Errors
    /// - `PayloadTooLarge` if the payload exceeds the wire bound.
    /// - `Timeout` if no reply arrives in time.
    /// - Decode errors if the reply is malformed. No retry is attempted.
    #[instrument(skip(self, payload), fields(server = %self.server_addr))]
    pub async fn request(&self, payload: impl Into<Vec<u8>>) -> Result<Reply> {
        let request = exchange::request(self.connection_id, payload)?;
        let encoded = request.to_bytes()?;

        self.transport.send(&encoded, &self.server_addr).await?;
        debug!(
            bytes = encoded.len(),
            connection_id = request.connection_id,
            packet_number = request.packet_number,
            "Request sent"
        );

        let mut buf = vec![0u8; RECV_BUFFER_SIZE];
        let (len, source) = with_timeout_error(
            self.transport.recv(&mut buf),
            self.response_timeout,
        )
        .await?;

        let packet = Packet::from_bytes(&buf[..len])?;
        debug!(
            peer = %source.addr,
            packet_number = packet.packet_number,
            bytes = packet.payload.len(),
            "Reply received"
        );

        Ok(Reply {
            packet,
            responder: source.addr,
        })
    }
}
