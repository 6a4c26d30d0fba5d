//! # Core Protocol Components
//!
//! Low-level packet handling and wire-format encoding.
//!
//! This module is the foundation of the protocol: the `Packet` type and its
//! binary codec. It depends on nothing else in the crate besides the error
//! types.
//!
//! ## Wire Format
//! ```text
//! [ConnectionId(8)] [PacketNumber(4)] [Payload(0..=1024)]
//! ```
//! All multi-byte fields are big-endian (network byte order). The payload
//! length is implicit: total datagram length minus the 12-byte header.
//!
//! ## Security
//! - Maximum payload size: 1024 bytes, validated on decode *before* any copy
//! - Encode refuses short buffers instead of writing partial data

pub mod packet;

pub use packet::{Packet, HEADER_SIZE, MAX_DATAGRAM_SIZE, MAX_PAYLOAD_SIZE};
