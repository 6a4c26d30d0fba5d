//! # Exchange Services
//!
//! The two roles of the single-exchange protocol: a client performing one
//! request/reply, and a server answering every received datagram with an
//! acknowledgment. Both are generic over the [`Transport`] capability and
//! take their addresses and timeouts from configuration.
//!
//! [`Transport`]: crate::transport::Transport

pub mod client;
pub mod server;

pub use client::{Client, Reply};
pub use server::Server;
