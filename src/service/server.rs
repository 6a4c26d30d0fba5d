//! # Acknowledgment Server
//!
//! Receive loop answering every well-formed datagram with one
//! acknowledgment, addressed to whichever peer sent it. No per-peer state
//! is kept; datagrams are processed strictly sequentially.
//!
//! A malformed datagram is logged and dropped, never fatal: terminating
//! the loop on bad input from an arbitrary peer would be a
//! denial-of-service hazard. The only exits are an explicit shutdown
//! signal or a transport failure.

use std::net::SocketAddr;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::config::ServerConfig;
use crate::core::packet::Packet;
use crate::error::Result;
use crate::protocol::exchange;
use crate::transport::{DatagramSource, Transport, UdpTransport};
use crate::utils::buffer_pool::BufferPool;

/// Acknowledgment server over an injected datagram transport.
pub struct Server<T> {
    transport: T,
    pool: BufferPool,
}

impl Server<UdpTransport> {
    /// Binds a UDP server at the configured address.
    ///
    /// # Errors
    /// Returns an error if the bind fails.
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let transport = UdpTransport::bind(&config.address).await?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> Server<T> {
    /// Creates a server over an already-bound transport.
    pub fn new(transport: T, config: &ServerConfig) -> Self {
        Self {
            transport,
            pool: BufferPool::new(config.recv_buffer_pool_size),
        }
    }

    /// Local address the server is reachable at.
    ///
    /// # Errors
    /// Returns an error if the transport cannot report its address.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the receive loop until ctrl-c.
    ///
    /// # Errors
    /// Returns an error if the transport fails.
    pub async fn run(&self) -> Result<()> {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            if let Ok(()) = tokio::signal::ctrl_c().await {
                info!("Received CTRL+C signal, shutting down");
                let _ = shutdown_tx.send(()).await;
            }
        });

        self.run_with_shutdown(shutdown_rx).await
    }

    /// Runs the receive loop until the shutdown channel fires.
    ///
    /// Each iteration receives one datagram, decodes it, and sends the
    /// acknowledgment back to the datagram's source address. Malformed and
    /// empty datagrams are dropped; the loop continues.
    ///
    /// # Errors
    /// Returns an error if the transport fails.
    #[instrument(skip(self, shutdown_rx))]
    pub async fn run_with_shutdown(&self, mut shutdown_rx: mpsc::Receiver<()>) -> Result<()> {
        let local_addr = self.transport.local_addr()?;
        info!(%local_addr, "Server listening");

        loop {
            let mut buf = self.pool.acquire();

            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Shutdown signal received, stopping receive loop");
                    return Ok(());
                }

                received = self.transport.recv(&mut buf) => {
                    match received {
                        Ok((0, _)) => continue,
                        Ok((len, source)) => self.handle_datagram(&buf[..len], &source).await,
                        Err(e) => {
                            error!(error = %e, "Receive failed, stopping receive loop");
                            return Err(e);
                        }
                    }
                }
            }
        }
    }

    async fn handle_datagram(&self, data: &[u8], source: &DatagramSource) {
        let packet = match Packet::from_bytes(data) {
            Ok(packet) => packet,
            Err(e) => {
                warn!(peer = %source.addr, bytes = data.len(), error = %e, "Dropping malformed datagram");
                return;
            }
        };

        debug!(
            peer = %source.addr,
            connection_id = packet.connection_id,
            packet_number = packet.packet_number,
            bytes = packet.payload.len(),
            "Request received"
        );

        let ack = exchange::acknowledge(&packet);
        let encoded = match ack.to_bytes() {
            Ok(encoded) => encoded,
            Err(e) => {
                error!(error = %e, "Failed to encode acknowledgment");
                return;
            }
        };

        // Reply to the datagram's source, not the bind address: distinct
        // peers are each answered without per-peer state.
        if let Err(e) = self.transport.send(&encoded, &source.addr).await {
            warn!(peer = %source.addr, error = %e, "Failed to send acknowledgment");
        }
    }
}
