//! # Datagram Protocol
//!
//! Minimal UDP-transported packet protocol: a fixed-layout binary header
//! plus a single-exchange request/acknowledgment protocol over raw
//! datagram I/O.
//!
//! ## Wire Format
//! ```text
//! [ConnectionId(8)] [PacketNumber(4)] [Payload(0..=1024)]
//! ```
//! Big-endian throughout; the payload length is implicit in the datagram
//! length. Minimum valid datagram is 12 bytes, maximum 1036.
//!
//! ## Components
//! - [`core`]: the `Packet` type and its wire codec
//! - [`protocol`]: request/acknowledgment construction rules
//! - [`transport`]: the datagram capability (`Transport` trait, UDP and
//!   mock implementations)
//! - [`service`]: the client and server roles built on the above
//! - [`config`]: TOML/env-backed configuration for both roles
//!
//! ## Example
//! ```ignore
//! use datagram_protocol::config::NetworkConfig;
//! use datagram_protocol::service::{Client, Server};
//!
//! let config = NetworkConfig::from_file("config.toml")?;
//! config.validate_strict()?;
//!
//! let server = Server::bind(&config.server).await?;
//! tokio::spawn(async move { server.run().await });
//!
//! let client = Client::connect(&config.client).await?;
//! let reply = client.request(b"Hello".to_vec()).await?;
//! println!("ack #{} from {}", reply.packet.packet_number, reply.responder);
//! ```
//!
//! ## Out of Scope
//! Connection lifecycle, multiplexing of in-flight packets,
//! retransmission/congestion control, and encryption are deliberately not
//! part of this crate.

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod service;
pub mod transport;
pub mod utils;

pub use crate::core::packet::{Packet, HEADER_SIZE, MAX_DATAGRAM_SIZE, MAX_PAYLOAD_SIZE};
pub use crate::error::{ProtocolError, Result};
pub use crate::service::{Client, Reply, Server};
pub use crate::transport::{Transport, UdpTransport};
