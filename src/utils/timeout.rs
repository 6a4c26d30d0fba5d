//! Async timeout wrapper and shared timeout constants.
//!
//! The codec and protocol core model no timeouts; the services wrap their
//! blocking receives with these helpers.

use std::future::Future;
use std::time::Duration;

use crate::error::{ProtocolError, Result};

/// Default timeout for a single operation (e.g. awaiting one reply).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs `fut` with a deadline, mapping expiry to `ProtocolError::Timeout`.
pub async fn with_timeout_error<F, T>(fut: F, duration: Duration) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(duration, fut).await {
        Ok(result) => result,
        Err(_) => Err(ProtocolError::Timeout),
    }
}
