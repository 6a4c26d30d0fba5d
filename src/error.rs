//! # Error Types
//!
//! Error handling for the datagram protocol.
//!
//! This module defines all error variants that can occur during protocol
//! operations, from low-level I/O failures to wire-format violations.
//!
//! ## Error Categories
//! - **I/O Errors**: Socket and file system failures
//! - **Codec Errors**: Truncated headers, oversized payloads, short buffers
//! - **Transport Errors**: Failures surfaced from the datagram transport
//! - **Configuration Errors**: Invalid or unloadable configuration
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Propagation Policy
//! The codec never retries; on failure it reports the error kind and leaves
//! output state untouched. The client surfaces any failure to its caller and
//! stops. The server drops the offending datagram and keeps serving.

use std::io;
use thiserror::Error;

/// Primary error type for all protocol operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Buffer too small: {required} bytes required, {available} available")]
    BufferTooSmall { required: usize, available: usize },

    #[error("Truncated header: {len} bytes received, fixed header is 12")]
    TruncatedHeader { len: usize },

    #[error("Payload too large: {len} bytes exceeds maximum of 1024")]
    PayloadTooLarge { len: usize },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout occurred")]
    Timeout,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
