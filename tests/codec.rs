//! Wire-format tests for the packet codec: the round-trip law, bounds
//! rejection, encode capacity checks, and the byte-order fixture.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use datagram_protocol::core::packet::{
    Packet, HEADER_SIZE, MAX_DATAGRAM_SIZE, MAX_PAYLOAD_SIZE,
};
use datagram_protocol::error::ProtocolError;
use proptest::prelude::*;

// ============================================================================
// ROUND-TRIP LAW
// ============================================================================

#[test]
fn test_roundtrip_across_extremes() {
    let connection_ids = [0u64, 1, 0x1234, u64::MAX];
    let packet_numbers = [0u32, 1, u32::MAX];
    let payload_lens = [0usize, 1, MAX_PAYLOAD_SIZE];

    for &connection_id in &connection_ids {
        for &packet_number in &packet_numbers {
            for &len in &payload_lens {
                let packet =
                    Packet::new(connection_id, packet_number, vec![0x5A; len]).unwrap();
                let bytes = packet.to_bytes().unwrap();
                assert_eq!(bytes.len(), HEADER_SIZE + len);

                let decoded = Packet::from_bytes(&bytes).expect("round-trip should decode");
                assert_eq!(decoded, packet);
            }
        }
    }
}

#[test]
fn test_encode_into_matches_to_bytes() {
    let packet = Packet::new(0xABCD, 42, b"payload".to_vec()).unwrap();

    let mut buf = [0u8; 64];
    let written = packet.encode_into(&mut buf).unwrap();
    let owned = packet.to_bytes().unwrap();

    assert_eq!(&buf[..written], &owned[..]);
}

// ============================================================================
// BOUNDS REJECTION
// ============================================================================

#[test]
fn test_decode_eleven_bytes_is_truncated() {
    let result = Packet::from_bytes(&[0u8; 11]);
    assert!(matches!(
        result,
        Err(ProtocolError::TruncatedHeader { len: 11 })
    ));
}

#[test]
fn test_decode_one_over_maximum_is_oversized() {
    let result = Packet::from_bytes(&vec![0u8; HEADER_SIZE + MAX_PAYLOAD_SIZE + 1]);
    assert!(matches!(
        result,
        Err(ProtocolError::PayloadTooLarge { len: 1025 })
    ));
}

#[test]
fn test_decode_exactly_maximum_succeeds() {
    let decoded = Packet::from_bytes(&vec![0u8; MAX_DATAGRAM_SIZE]).unwrap();
    assert_eq!(decoded.payload.len(), MAX_PAYLOAD_SIZE);
}

// ============================================================================
// ENCODE CAPACITY
// ============================================================================

#[test]
fn test_encode_into_eleven_byte_buffer_fails() {
    let packet = Packet::new(1, 1, b"x".to_vec()).unwrap();
    let mut buf = [0u8; 11];
    assert!(matches!(
        packet.encode_into(&mut buf),
        Err(ProtocolError::BufferTooSmall { .. })
    ));
}

#[test]
fn test_encode_into_exact_buffer_returns_exact_count() {
    for len in [0usize, 1, 16, MAX_PAYLOAD_SIZE] {
        let packet = Packet::new(9, 3, vec![0x77; len]).unwrap();
        let mut buf = vec![0u8; HEADER_SIZE + len];
        let written = packet.encode_into(&mut buf).unwrap();
        assert_eq!(written, HEADER_SIZE + len);
    }
}

// ============================================================================
// BYTE ORDER
// ============================================================================

#[test]
fn test_byte_order_fixture() {
    let packet = Packet::new(0x1122_3344_5566_7788, 0x0A0B_0C0D, Vec::new()).unwrap();
    let bytes = packet.to_bytes().unwrap();
    assert_eq!(
        &bytes[..],
        &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x0A, 0x0B, 0x0C, 0x0D]
    );
}

#[test]
fn test_payload_follows_header_contiguously() {
    let packet = Packet::new(0, 0, b"Hello".to_vec()).unwrap();
    let bytes = packet.to_bytes().unwrap();
    assert_eq!(&bytes[HEADER_SIZE..], b"Hello");
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_packet_roundtrip(
        connection_id in any::<u64>(),
        packet_number in any::<u32>(),
        payload in prop::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
    ) {
        let packet = Packet::new(connection_id, packet_number, payload).unwrap();
        let bytes = packet.to_bytes().unwrap();
        let decoded = Packet::from_bytes(&bytes).expect("round-trip should decode");

        prop_assert_eq!(decoded, packet);
    }
}

proptest! {
    #[test]
    fn prop_decode_never_accepts_oversized(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        match Packet::from_bytes(&data) {
            Ok(packet) => {
                prop_assert!(data.len() >= HEADER_SIZE);
                prop_assert!(packet.payload.len() <= MAX_PAYLOAD_SIZE);
            }
            Err(ProtocolError::TruncatedHeader { .. }) => prop_assert!(data.len() < HEADER_SIZE),
            Err(ProtocolError::PayloadTooLarge { .. }) => prop_assert!(data.len() > MAX_DATAGRAM_SIZE),
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }
}
