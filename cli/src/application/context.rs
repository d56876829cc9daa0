//! Per-invocation call context: cooperative cancellation plus a per-call timeout.
//!
//! Every call made to the Docker Desktop daemon runs through
//! [`CallContext::run`], which races the call against the cancellation token
//! and the timeout. Nothing is retried; the first of the three to finish wins.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::domain::ClusterError;

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancel: CancellationToken,
    timeout: Option<Duration>,
}

impl CallContext {
    /// A context with no timeout that is never cancelled unless asked to.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound each daemon call by `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Token shared with signal handlers; cancelling it aborts in-flight calls.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Drive `call` to completion unless the context is cancelled or the
    /// timeout elapses first. The in-flight future is dropped on abort.
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` or `DeadlineExceeded` for `operation`, or whatever
    /// error `call` itself produced.
    pub async fn run<T, F>(&self, operation: &'static str, call: F) -> Result<T, ClusterError>
    where
        F: Future<Output = Result<T, ClusterError>>,
    {
        if self.cancel.is_cancelled() {
            return Err(ClusterError::Cancelled { operation });
        }

        let timeout = self.timeout;
        let deadline = async move {
            match timeout {
                Some(t) => tokio::time::sleep(t).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(ClusterError::Cancelled { operation }),
            () = deadline => Err(ClusterError::DeadlineExceeded {
                operation,
                secs: timeout.map_or(0, |t| t.as_secs()),
            }),
            result = call => result,
        }
    }
}
