//! End-to-end exchange tests: the echo scenario over loopback UDP,
//! malformed-datagram resilience, and the mock-transport flow.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::SocketAddr;
use std::time::Duration;

use datagram_protocol::config::{ClientConfig, ServerConfig};
use datagram_protocol::protocol::exchange::ACK_PAYLOAD;
use datagram_protocol::service::{Client, Server};
use datagram_protocol::transport::{MockNetwork, Transport, UdpTransport};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Binds a server on an ephemeral loopback port and runs it on a task.
async fn spawn_server() -> (SocketAddr, mpsc::Sender<()>, JoinHandle<()>) {
    let config = ServerConfig {
        address: String::from("127.0.0.1:0"),
        ..ServerConfig::default()
    };
    let server = Server::bind(&config).await.unwrap();
    let addr = server.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
    let handle = tokio::spawn(async move {
        server.run_with_shutdown(shutdown_rx).await.unwrap();
    });

    (addr, shutdown_tx, handle)
}

fn client_config(server_addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        address: server_addr.to_string(),
        response_timeout: Duration::from_secs(2),
    }
}

#[tokio::test]
async fn test_echo_scenario() {
    let (server_addr, shutdown_tx, handle) = spawn_server().await;

    let client = Client::connect(&client_config(server_addr))
        .await
        .unwrap()
        .with_connection_id(0x1234);

    let reply = client.request(b"Hello".to_vec()).await.unwrap();

    assert_eq!(reply.packet.connection_id, 0x1234);
    assert_eq!(reply.packet.packet_number, 2);
    assert_eq!(reply.packet.payload, ACK_PAYLOAD);
    assert_eq!(reply.responder, server_addr);

    shutdown_tx.send(()).await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_malformed_datagram_does_not_stall_server() {
    let (server_addr, shutdown_tx, handle) = spawn_server().await;

    // Garbage from one peer: 5 bytes, shorter than the fixed header.
    let garbage_peer = UdpTransport::bind("127.0.0.1:0").await.unwrap();
    garbage_peer
        .send(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00], &server_addr)
        .await
        .unwrap();

    // A valid request from a different peer must still be acknowledged.
    let client = Client::connect(&client_config(server_addr))
        .await
        .unwrap()
        .with_connection_id(0x5678);

    let reply = client.request(b"still here?".to_vec()).await.unwrap();

    assert_eq!(reply.packet.connection_id, 0x5678);
    assert_eq!(reply.packet.packet_number, 2);
    assert_eq!(reply.packet.payload, ACK_PAYLOAD);

    shutdown_tx.send(()).await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_oversized_datagram_is_dropped_not_truncated() {
    let (server_addr, shutdown_tx, handle) = spawn_server().await;

    // 1200 bytes: over the 1036-byte maximum, under the receive buffer
    // size, so it arrives intact and must be rejected by decode.
    let oversized_peer = UdpTransport::bind("127.0.0.1:0").await.unwrap();
    oversized_peer
        .send(&vec![0u8; 1200], &server_addr)
        .await
        .unwrap();

    let client = Client::connect(&client_config(server_addr)).await.unwrap();
    let reply = client.request(b"after oversized".to_vec()).await.unwrap();
    assert_eq!(reply.packet.payload, ACK_PAYLOAD);

    shutdown_tx.send(()).await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_server_answers_multiple_peers() {
    let (server_addr, shutdown_tx, handle) = spawn_server().await;

    for id in [1u64, 2, 3] {
        let client = Client::connect(&client_config(server_addr))
            .await
            .unwrap()
            .with_connection_id(id);

        let reply = client.request(b"ping".to_vec()).await.unwrap();
        assert_eq!(reply.packet.connection_id, id);
    }

    shutdown_tx.send(()).await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_mock_transport_exchange() {
    let network = MockNetwork::new();
    let server_addr: SocketAddr = "10.0.0.1:4546".parse().unwrap();
    let client_addr: SocketAddr = "10.0.0.2:9000".parse().unwrap();

    let server = Server::new(network.endpoint(server_addr), &ServerConfig::default());
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
    let handle = tokio::spawn(async move {
        server.run_with_shutdown(shutdown_rx).await.unwrap();
    });

    let client = Client::new(
        network.endpoint(client_addr),
        server_addr,
        Duration::from_secs(1),
    )
    .with_connection_id(7);

    let reply = client.request(b"over the mock".to_vec()).await.unwrap();

    assert_eq!(reply.packet.connection_id, 7);
    assert_eq!(reply.packet.packet_number, 2);
    assert_eq!(reply.packet.payload, ACK_PAYLOAD);
    assert_eq!(reply.responder, server_addr);

    shutdown_tx.send(()).await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_times_out_without_responder() {
    let network = MockNetwork::new();
    let client_addr: SocketAddr = "10.0.0.2:9000".parse().unwrap();
    let silent_addr: SocketAddr = "10.0.0.9:9999".parse().unwrap();

    // The endpoint exists but nothing serves it.
    let _silent = network.endpoint(silent_addr);

    let client = Client::new(
        network.endpoint(client_addr),
        silent_addr,
        Duration::from_millis(50),
    );

    let result = client.request(b"anyone?".to_vec()).await;
    assert!(matches!(
        result,
        Err(datagram_protocol::error::ProtocolError::Timeout)
    ));
}
