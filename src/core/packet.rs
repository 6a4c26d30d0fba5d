//! # Packet Type and Codec
//!
//! The sole domain entity of the protocol and its wire-format codec.
//!
//! A `Packet` carries an opaque 64-bit connection identifier, a 32-bit
//! packet number, and up to [`MAX_PAYLOAD_SIZE`] bytes of payload. Encoding
//! lays the two header fields out big-endian and appends the payload with no
//! padding and no explicit length field; the payload length is recovered on
//! decode from the datagram length.
//!
//! ## Validation
//! - `encode_into` fails with `BufferTooSmall` rather than writing partial
//!   data, and with `PayloadTooLarge` rather than truncating.
//! - `from_bytes` rejects datagrams shorter than the fixed header
//!   (`TruncatedHeader`) and validates the implied payload length against
//!   [`MAX_PAYLOAD_SIZE`] before copying a single payload byte.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{ProtocolError, Result};

/// Fixed header size: 8-byte connection id + 4-byte packet number.
pub const HEADER_SIZE: usize = 12;

/// Maximum payload length in bytes.
pub const MAX_PAYLOAD_SIZE: usize = 1024;

/// Largest valid datagram: header plus a full payload.
pub const MAX_DATAGRAM_SIZE: usize = HEADER_SIZE + MAX_PAYLOAD_SIZE;

/// A single protocol packet.
///
/// Constructed immediately before encoding or immediately after decoding;
/// it is not persisted and has no identity beyond one send/receive call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Opaque identifier chosen by the sender and echoed back by the
    /// responder.
    pub connection_id: u64,
    /// Sequence value. The codec preserves it exactly; no ordering or
    /// uniqueness is enforced at this layer.
    pub packet_number: u32,
    /// Application payload, at most [`MAX_PAYLOAD_SIZE`] bytes.
    pub payload: Vec<u8>,
}

impl Packet {
    /// Creates a packet, validating the payload bound up front.
    ///
    /// # Errors
    /// Returns `PayloadTooLarge` if the payload exceeds [`MAX_PAYLOAD_SIZE`].
    pub fn new(
        connection_id: u64,
        packet_number: u32,
        payload: impl Into<Vec<u8>>,
    ) -> Result<Self> {
        let payload = payload.into();
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(ProtocolError::PayloadTooLarge {
                len: payload.len(),
            });
        }
        Ok(Self {
            connection_id,
            packet_number,
            payload,
        })
    }

    /// Total encoded size of this packet on the wire.
    #[must_use]
    pub fn wire_len(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }

    /// Encodes the packet into a caller-supplied buffer.
    ///
    /// Writes the connection id (8 bytes, big-endian), the packet number
    /// (4 bytes, big-endian), and the payload, contiguous and unpadded.
    /// Returns the number of bytes written.
    ///
    /// # Errors
    /// - `PayloadTooLarge` if the payload exceeds [`MAX_PAYLOAD_SIZE`];
    ///   the packet is never truncated to fit.
    /// - `BufferTooSmall` if `buf` cannot hold header plus payload. Nothing
    ///   is written on failure.
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<usize> {
        if self.payload.len() > MAX_PAYLOAD_SIZE {
            return Err(ProtocolError::PayloadTooLarge {
                len: self.payload.len(),
            });
        }

        let required = self.wire_len();
        if buf.len() < required {
            return Err(ProtocolError::BufferTooSmall {
                required,
                available: buf.len(),
            });
        }

        buf[0..8].copy_from_slice(&self.connection_id.to_be_bytes());
        buf[8..HEADER_SIZE].copy_from_slice(&self.packet_number.to_be_bytes());
        buf[HEADER_SIZE..required].copy_from_slice(&self.payload);

        Ok(required)
    }

    /// Encodes the packet into a freshly allocated buffer.
    ///
    /// # Errors
    /// Returns `PayloadTooLarge` if the payload exceeds [`MAX_PAYLOAD_SIZE`].
    pub fn to_bytes(&self) -> Result<Bytes> {
        if self.payload.len() > MAX_PAYLOAD_SIZE {
            return Err(ProtocolError::PayloadTooLarge {
                len: self.payload.len(),
            });
        }

        let mut buf = BytesMut::with_capacity(self.wire_len());
        buf.put_u64(self.connection_id);
        buf.put_u32(self.packet_number);
        buf.put_slice(&self.payload);
        Ok(buf.freeze())
    }

    /// Decodes a packet from a received datagram.
    ///
    /// The buffer must be exactly the bytes of one datagram; everything
    /// after the 12-byte header becomes the payload.
    ///
    /// # Errors
    /// - `TruncatedHeader` if fewer than [`HEADER_SIZE`] bytes were
    ///   received.
    /// - `PayloadTooLarge` if the implied payload length exceeds
    ///   [`MAX_PAYLOAD_SIZE`]. Checked before any payload copy.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(ProtocolError::TruncatedHeader { len: buf.len() });
        }

        // Bound check must precede the copy: an adversarial datagram must
        // never write past the fixed payload capacity.
        let payload_len = buf.len() - HEADER_SIZE;
        if payload_len > MAX_PAYLOAD_SIZE {
            return Err(ProtocolError::PayloadTooLarge { len: payload_len });
        }

        let mut header = &buf[..HEADER_SIZE];
        let connection_id = header.get_u64();
        let packet_number = header.get_u32();

        Ok(Self {
            connection_id,
            packet_number,
            payload: buf[HEADER_SIZE..].to_vec(),
        })
    }
}
