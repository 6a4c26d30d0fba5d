//! # Request/Acknowledgment Rules
//!
//! The single-exchange protocol layered on the packet codec: a client sends
//! one request, the responder answers each received datagram with one
//! acknowledgment. No state survives an exchange; the acknowledgment is
//! derived entirely from the packet it answers.

use crate::core::packet::Packet;
use crate::error::Result;

/// Packet number carried by a client's initial request.
pub const INITIAL_PACKET_NUMBER: u32 = 1;

/// Fixed payload marker carried by every acknowledgment.
pub const ACK_PAYLOAD: &[u8] = b"ACK";

/// Builds a client request packet.
///
/// # Errors
/// Returns `PayloadTooLarge` if the message exceeds the payload bound.
pub fn request(connection_id: u64, payload: impl Into<Vec<u8>>) -> Result<Packet> {
    Packet::new(connection_id, INITIAL_PACKET_NUMBER, payload)
}

/// Builds the acknowledgment for a received packet.
///
/// The connection id is echoed back unchanged and the packet number is the
/// request's plus one (wrapping at `u32::MAX`); the payload is the fixed
/// [`ACK_PAYLOAD`] marker.
#[must_use]
pub fn acknowledge(request: &Packet) -> Packet {
    Packet {
        connection_id: request.connection_id,
        packet_number: request.packet_number.wrapping_add(1),
        payload: ACK_PAYLOAD.to_vec(),
    }
}

/// Returns `true` if the packet carries the acknowledgment marker.
#[must_use]
pub fn is_acknowledgment(packet: &Packet) -> bool {
    packet.payload == ACK_PAYLOAD
}
