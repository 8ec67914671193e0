//! Thread-safe rate limiter shared by every call made through one client
//!
//! # Fairness
//!
//! Waiters are not queued. Each waiter sleeps until the bucket should hold
//! a token again and then races the others for it, so the aggregate rate is
//! exact but the first caller to start waiting is not guaranteed to be
//! served first. A waiter holds no reservation while sleeping, which is why
//! abandoning a wait (on cancellation) never burns a token.

use std::sync::Arc;
use std::time::Duration;

use gecko_types::{TokenBucket, TokenBucketConfig};
use parking_lot::Mutex;
use tracing::{instrument, trace};

use crate::error::RestResult;

/// Token-bucket limiter for outbound requests
#[derive(Debug)]
pub struct RateLimiter {
    config: TokenBucketConfig,
    bucket: Mutex<TokenBucket>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::from_valid(TokenBucketConfig::coingecko_defaults())
    }
}

impl RateLimiter {
    /// Create a new rate limiter with the given configuration
    ///
    /// Fails with `RestError::Configuration` for a zero burst or a refill
    /// rate that is not finite and positive.
    pub fn new(config: TokenBucketConfig) -> RestResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// One request every `interval`, allowing `burst` back-to-back requests
    pub fn every(interval: Duration, burst: u32) -> RestResult<Self> {
        Self::new(TokenBucketConfig::every(interval, burst))
    }

    /// `rate` requests per second, allowing `burst` back-to-back requests
    pub fn per_second(rate: f64, burst: u32) -> RestResult<Self> {
        Self::new(TokenBucketConfig::new(burst, rate))
    }

    /// Create a permissive rate limiter (for testing)
    pub fn permissive() -> Self {
        Self::from_valid(TokenBucketConfig::permissive())
    }

    fn from_valid(config: TokenBucketConfig) -> Self {
        Self {
            bucket: Mutex::new(config.create_bucket()),
            config,
        }
    }

    /// Try to take a token without waiting
    ///
    /// Returns the time until a token should be available when none is.
    pub fn try_acquire(&self) -> Result<(), Duration> {
        self.bucket.lock().try_acquire(1)
    }

    /// Check if a request would be allowed without consuming a token
    pub fn check(&self) -> bool {
        self.bucket.lock().check_available(1)
    }

    pub fn available(&self) -> u32 {
        self.bucket.lock().available()
    }

    /// Wait until a token is available, then take it
    ///
    /// Dropping the returned future before it completes consumes nothing.
    #[instrument(skip(self), level = "debug")]
    pub async fn acquire(&self) {
        loop {
            let wait = match self.try_acquire() {
                Ok(()) => return,
                Err(wait) => wait,
            };
            trace!(?wait, "rate limited, waiting for token");
            tokio::time::sleep(wait).await;
        }
    }

    /// Refill the bucket to its burst capacity
    pub fn reset(&self) {
        self.bucket.lock().reset();
    }

    pub fn config(&self) -> TokenBucketConfig {
        self.config
    }
}

/// Shared rate limiter that can be cloned and used across tasks
pub type SharedRateLimiter = Arc<RateLimiter>;

/// Create a shared rate limiter with the public API defaults
pub fn shared_rate_limiter() -> SharedRateLimiter {
    Arc::new(RateLimiter::default())
}
