//! Client-side rate limiting primitives
//!
//! CoinGecko's public API documents a ceiling of roughly 50 calls per minute.
//! The token bucket here is the single-threaded building block; the async,
//! shareable limiter lives in `gecko-rest`.

use std::time::{Duration, Instant};

use crate::error::RateLimitError;

/// Token bucket rate limiter
///
/// Implements the token bucket algorithm for rate limiting.
/// Tokens are consumed when making requests and refill at a constant rate.
#[derive(Debug)]
pub struct TokenBucket {
    /// Maximum number of tokens (bucket capacity)
    capacity: u32,
    /// Current number of available tokens
    tokens: f64,
    /// Tokens added per second (refill rate)
    refill_rate: f64,
    /// Last time tokens were refilled
    last_refill: Instant,
}

impl TokenBucket {
    /// Create a new token bucket, starting full
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of tokens the bucket can hold (the burst)
    /// * `refill_rate` - Number of tokens added per second
    pub fn new(capacity: u32, refill_rate: f64) -> Self {
        Self {
            capacity,
            tokens: capacity as f64,
            refill_rate,
            last_refill: Instant::now(),
        }
    }

    /// Try to acquire tokens from the bucket
    ///
    /// Returns `Ok(())` if tokens were acquired, or `Err(Duration)` with the
    /// time to wait before enough tokens will be available.
    pub fn try_acquire(&mut self, tokens: u32) -> Result<(), Duration> {
        self.refill();

        let tokens_f64 = tokens as f64;
        if self.tokens >= tokens_f64 {
            self.tokens -= tokens_f64;
            Ok(())
        } else {
            let needed = tokens_f64 - self.tokens;
            let wait_secs = needed / self.refill_rate;
            Err(Duration::try_from_secs_f64(wait_secs).unwrap_or(Duration::MAX))
        }
    }

    /// Check if tokens are available without consuming them
    pub fn check_available(&mut self, tokens: u32) -> bool {
        self.refill();
        self.tokens >= tokens as f64
    }

    /// Get current available tokens
    pub fn available(&mut self) -> u32 {
        self.refill();
        self.tokens.floor() as u32
    }

    /// Get the capacity of this bucket
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Get the refill rate (tokens per second)
    pub fn refill_rate(&self) -> f64 {
        self.refill_rate
    }

    /// Reset the bucket to full capacity
    pub fn reset(&mut self) {
        self.tokens = self.capacity as f64;
        self.last_refill = Instant::now();
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);
        let added = elapsed.as_secs_f64() * self.refill_rate;
        self.tokens = (self.tokens + added).min(self.capacity as f64);
        self.last_refill = now;
    }
}

/// Configuration for a single token bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenBucketConfig {
    /// Maximum tokens
    pub capacity: u32,
    /// Tokens per second refill rate
    pub refill_rate: f64,
}

impl TokenBucketConfig {
    /// Create a new token bucket configuration
    pub const fn new(capacity: u32, refill_rate: f64) -> Self {
        Self {
            capacity,
            refill_rate,
        }
    }

    /// One token every `interval`, with the given burst
    pub fn every(interval: Duration, burst: u32) -> Self {
        Self::new(burst, 1.0 / interval.as_secs_f64())
    }

    /// Public API limits: one request every 800ms, burst of 1
    pub fn coingecko_defaults() -> Self {
        Self::every(Duration::from_millis(800), 1)
    }

    /// A very permissive configuration (for testing)
    pub const fn permissive() -> Self {
        Self::new(1000, 1000.0)
    }

    /// Reject settings under which a bucket could never hand out a token
    pub fn validate(&self) -> Result<(), RateLimitError> {
        if self.capacity == 0 {
            return Err(RateLimitError::ZeroCapacity);
        }
        if !self.refill_rate.is_finite() || self.refill_rate <= 0.0 {
            return Err(RateLimitError::InvalidRefillRate(self.refill_rate));
        }
        Ok(())
    }

    /// Create a token bucket from this configuration
    pub fn create_bucket(&self) -> TokenBucket {
        TokenBucket::new(self.capacity, self.refill_rate)
    }

    /// Minimum spacing between tokens once the burst is spent
    ///
    /// `Duration::MAX` when the refill rate is not positive.
    pub fn interval(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.refill_rate).unwrap_or(Duration::MAX)
    }
}

impl Default for TokenBucketConfig {
    fn default() -> Self {
        Self::coingecko_defaults()
    }
}
