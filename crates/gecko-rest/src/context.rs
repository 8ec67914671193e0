//! Per-call cancellation
//!
//! Every request runs under a [`CallContext`]. A context can be cancelled
//! explicitly through the [`CancelSource`] it was created from, can carry a
//! deadline, or both. [`CallContext::background`] never fires.
//!
//! # Example
//!
//! ```no_run
//! use gecko_rest::{CallContext, CancelSource, CoinGeckoClient};
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), gecko_rest::RestError> {
//! let client = CoinGeckoClient::new()?;
//! let source = CancelSource::new();
//! let ctx = source.context().with_timeout(Duration::from_secs(5));
//!
//! let ping = client.with_context(ctx).general().ping().await?;
//! println!("{}", ping.gecko_says);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::future::pending;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};

/// Why a call was aborted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// [`CancelSource::cancel`] was called
    Cancelled,
    /// The context deadline passed
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("context cancelled"),
            Self::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

/// Cancellation signal carried by a single call
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancel: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that is never cancelled
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now
    pub fn timeout(timeout: Duration) -> Self {
        Self::background().with_timeout(timeout)
    }

    /// Add (or tighten) a deadline `timeout` from now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Add (or tighten) an absolute deadline
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Reason the context has already fired, if it has
    pub fn cancelled(&self) -> Option<CancelReason> {
        if self.cancel.as_ref().is_some_and(|rx| *rx.borrow()) {
            return Some(CancelReason::Cancelled);
        }
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Some(CancelReason::DeadlineExceeded),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled().is_some()
    }

    /// Resolves once the context fires; pending forever for a background context
    pub async fn done(&self) -> CancelReason {
        let cancelled = async {
            if let Some(rx) = &self.cancel {
                let mut rx = rx.clone();
                if rx.wait_for(|cancelled| *cancelled).await.is_ok() {
                    return;
                }
            }
            // No source, or the source was dropped without cancelling
            pending::<()>().await
        };

        let expired = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => CancelReason::Cancelled,
            _ = expired => CancelReason::DeadlineExceeded,
        }
    }
}

/// Owner side of an explicit cancellation signal
///
/// Contexts created from one source all fire together when it is cancelled.
/// Dropping the source without cancelling leaves its contexts live.
#[derive(Debug)]
pub struct CancelSource {
    tx: watch::Sender<bool>,
}

impl CancelSource {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// A new context tied to this source
    pub fn context(&self) -> CallContext {
        CallContext {
            cancel: Some(self.tx.subscribe()),
            deadline: None,
        }
    }

    /// Fire every context created from this source
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for CancelSource {
    fn default() -> Self {
        Self::new()
    }
}
