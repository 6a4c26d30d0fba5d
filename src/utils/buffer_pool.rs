//! # Buffer Pool
//!
//! Object pool for datagram receive buffers. Every buffer is
//! [`RECV_BUFFER_SIZE`] bytes, so the receive loop can hand a full-size
//! slice to the transport on each iteration without a fresh allocation.
//!
//! ## Usage
//! ```rust,no_run
//! use datagram_protocol::utils::buffer_pool::BufferPool;
//!
//! let pool = BufferPool::new(32); // 32 pre-allocated buffers
//! let mut buffer = pool.acquire();
//! // Receive into &mut buffer[..]...
//! // Buffer automatically returned to the pool on drop
//! ```

use std::sync::{Arc, Mutex};

/// Default receive buffer size, one typical MTU.
///
/// Deliberately larger than the maximum valid datagram (1036 bytes): an
/// oversized datagram must survive the receive intact so the decoder can
/// reject it as `PayloadTooLarge`, rather than being silently truncated
/// into something that parses.
pub const RECV_BUFFER_SIZE: usize = 1500;

/// A pooled buffer that returns itself to the pool when dropped
pub struct PooledBuffer {
    buffer: Vec<u8>,
    buffer_size: usize,
    pool: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        // Only buffers of the pool's own size go back; anything resized
        // by the caller is deallocated instead.
        if self.buffer.len() == self.buffer_size {
            if let Ok(mut pool) = self.pool.lock() {
                pool.push(std::mem::take(&mut self.buffer));
            }
        }
    }
}

impl std::ops::Deref for PooledBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl std::ops::DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

/// Thread-safe pool of fixed-size receive buffers
pub struct BufferPool {
    pool: Arc<Mutex<Vec<Vec<u8>>>>,
    buffer_size: usize,
}

impl BufferPool {
    /// Create a new pool of `pool_size` buffers, each of
    /// [`RECV_BUFFER_SIZE`] bytes
    pub fn new(pool_size: usize) -> Self {
        Self::with_buffer_size(pool_size, RECV_BUFFER_SIZE)
    }

    /// Create a pool with an explicit per-buffer size
    pub fn with_buffer_size(pool_size: usize, buffer_size: usize) -> Self {
        let mut pool = Vec::with_capacity(pool_size);

        for _ in 0..pool_size {
            pool.push(vec![0u8; buffer_size]);
        }

        Self {
            pool: Arc::new(Mutex::new(pool)),
            buffer_size,
        }
    }

    /// Acquire a buffer from the pool (or allocate a new one if the pool is
    /// empty)
    pub fn acquire(&self) -> PooledBuffer {
        let buffer = if let Ok(mut pool) = self.pool.lock() {
            pool.pop()
                .unwrap_or_else(|| vec![0u8; self.buffer_size])
        } else {
            vec![0u8; self.buffer_size]
        };

        PooledBuffer {
            buffer,
            buffer_size: self.buffer_size,
            pool: self.pool.clone(),
        }
    }

    /// Current number of available buffers in the pool
    pub fn available(&self) -> usize {
        self.pool.lock().map(|p| p.len()).unwrap_or(0)
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(32)
    }
}

impl Clone for BufferPool {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            buffer_size: self.buffer_size,
        }
    }
}
