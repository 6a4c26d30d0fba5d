//! # Mock Transport
//!
//! Deterministic in-memory transport for exercising the service layer
//! without sockets. A [`MockNetwork`] is a routing table from socket
//! addresses to per-endpoint queues; each [`MockTransport`] endpoint
//! delivers its sends into the destination's queue, tagged with the
//! sender's address, so reply-to-sender behavior can be asserted exactly.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::{ProtocolError, Result};
use crate::transport::{DatagramSource, Transport};

type Datagram = (Vec<u8>, SocketAddr);
type RouteTable = Arc<Mutex<HashMap<SocketAddr, mpsc::UnboundedSender<Datagram>>>>;

/// A set of interconnected mock endpoints.
#[derive(Debug, Clone, Default)]
pub struct MockNetwork {
    routes: RouteTable,
}

impl MockNetwork {
    /// Creates an empty mock network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an endpoint reachable at `addr` from every other endpoint
    /// of this network.
    #[must_use]
    pub fn endpoint(&self, addr: SocketAddr) -> MockTransport {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert(addr, tx);
        }
        MockTransport {
            addr,
            routes: Arc::clone(&self.routes),
            incoming: tokio::sync::Mutex::new(rx),
        }
    }
}

/// One endpoint of a [`MockNetwork`].
#[derive(Debug)]
pub struct MockTransport {
    addr: SocketAddr,
    routes: RouteTable,
    incoming: tokio::sync::Mutex<mpsc::UnboundedReceiver<Datagram>>,
}

#[async_trait]
impl Transport for MockTransport {
    async fn recv(&self, buf: &mut [u8]) -> Result<(usize, DatagramSource)> {
        let mut incoming = self.incoming.lock().await;
        let (data, from) = incoming.recv().await.ok_or_else(|| {
            ProtocolError::Transport("mock network closed".to_string())
        })?;

        // Same truncation behavior as a real datagram socket.
        let len = data.len().min(buf.len());
        buf[..len].copy_from_slice(&data[..len]);

        Ok((len, DatagramSource::new(from)))
    }

    async fn send(&self, buf: &[u8], dest: &SocketAddr) -> Result<usize> {
        let route = self
            .routes
            .lock()
            .map_err(|_| ProtocolError::Transport("route table poisoned".to_string()))?
            .get(dest)
            .cloned()
            .ok_or_else(|| ProtocolError::Transport(format!("no route to {dest}")))?;

        route
            .send((buf.to_vec(), self.addr))
            .map_err(|_| ProtocolError::Transport(format!("endpoint {dest} closed")))?;

        Ok(buf.len())
    }

    fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.addr)
    }
}
