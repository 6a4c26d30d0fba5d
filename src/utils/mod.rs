//! # Utility Modules
//!
//! Supporting utilities for buffering, logging, and timing.
//!
//! ## Components
//! - **Buffer Pool**: Pooled fixed-size datagram receive buffers
//! - **Logging**: Structured logging configuration (tracing subscriber)
//! - **Timeout**: Async timeout wrapper and shared timeout constants

pub mod buffer_pool;
pub mod logging;
pub mod timeout;

pub use buffer_pool::{BufferPool, PooledBuffer};
