use crate::infrastructure::config::NetworkConfig;
use std::time::Duration;
use uuid::Uuid;

/// Why a single attempt may be repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryReason {
    /// HTTP 429 from the service.
    RateLimited,
    /// Connection, timeout, or body read failure.
    Transport(String),
}

/// Retry budget and delay schedule for one translate call.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub jitter_ratio: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&NetworkConfig::default())
    }
}

impl From<&NetworkConfig> for RetryPolicy {
    fn from(network: &NetworkConfig) -> Self {
        Self {
            max_retries: network.max_retries,
            initial_delay: Duration::from_millis(network.initial_retry_delay_ms),
            max_delay: Duration::from_millis(network.max_retry_delay_ms),
            jitter_ratio: network.jitter_ratio,
        }
    }
}

impl RetryPolicy {
    pub fn can_retry(&self, retry_count: u32) -> bool {
        retry_count < self.max_retries
    }

    pub fn delay_for(&self, reason: &RetryReason, retry_count: u32) -> Duration {
        match reason {
            RetryReason::RateLimited => self.rate_limit_delay(retry_count),
            RetryReason::Transport(_) => self.transport_delay(retry_count),
        }
    }

    /// `initial * 2^retry`, no jitter.
    pub fn rate_limit_delay(&self, retry_count: u32) -> Duration {
        self.initial_delay
            .saturating_mul(2u32.saturating_pow(retry_count))
    }

    pub fn transport_delay(&self, retry_count: u32) -> Duration {
        self.transport_delay_with(retry_count, unit_sample())
    }

    /// Jittered delay for a given sample in `[0, 1)`.
    ///
    /// The sample maps to a factor in `[-1, 1)`; the result is
    /// `min(base + factor * ratio * base, max_delay)`.
    pub fn transport_delay_with(&self, retry_count: u32, sample: f64) -> Duration {
        let base = self.rate_limit_delay(retry_count).as_secs_f64();
        let jitter = (sample * 2.0 - 1.0) * self.jitter_ratio * base;
        let secs = base + jitter;
        if !secs.is_finite() {
            return self.max_delay;
        }
        Duration::from_secs_f64(secs.clamp(0.0, self.max_delay.as_secs_f64()))
    }
}

// Uniform sample in [0, 1) taken from the random bytes of a v4 uuid.
// Bytes 10..16 carry no version or variant bits.
fn unit_sample() -> f64 {
    let bytes = Uuid::new_v4().into_bytes();
    let mut raw = [0u8; 8];
    raw[2..].copy_from_slice(&bytes[10..16]);
    u64::from_be_bytes(raw) as f64 / (1u64 << 48) as f64
}
