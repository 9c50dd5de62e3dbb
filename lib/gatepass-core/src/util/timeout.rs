use std::future::Future;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("Timed out after {timeout:?} while {operation}")]
pub struct StepTimeout {
    pub operation: &'static str,
    pub timeout: Duration,
}

/// Bounds a single collaborator call
pub(crate) async fn with_timeout<F: Future>(
    timeout: Duration,
    operation: &'static str,
    future: F,
) -> Result<F::Output, StepTimeout> {
    tokio::time::timeout(timeout, future)
        .await
        .map_err(|_| StepTimeout { operation, timeout })
}
