//! Reactive rate limiting
//!
//! Requests are unthrottled until the service answers 429. From then on
//! every request waits on a limiter whose quota comes from the
//! `X-RateLimit-Limit` header (requests per second) of the throttled
//! response.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::{debug, warn};
use reqwest::header::HeaderMap;
use tokio::sync::RwLock;

/// Requests per second assumed when the header is missing.
pub const DEFAULT_RATE_LIMIT: u32 = 30;

/// Header carrying the per-second quota.
pub const RATE_LIMIT_HEADER: &str = "x-ratelimit-limit";

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Parse the per-second quota from response headers.
pub fn limit_from_headers(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(RATE_LIMIT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| *v >= 1.0)
        .map(|v| v as u32)
}

/// Limiter shared by all requests of a client.
#[derive(Default)]
pub struct ReactiveRateLimiter {
    limiter: RwLock<Option<Arc<DirectLimiter>>>,
    limit: AtomicU32,
}

impl ReactiveRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start throttling at `per_second` (or the default). A later call with
    /// a different quota replaces the limiter.
    pub async fn activate(&self, per_second: Option<u32>) {
        let per_second = per_second.unwrap_or(DEFAULT_RATE_LIMIT).max(1);
        let previous = self.limit.swap(per_second, Ordering::SeqCst);
        if previous == per_second {
            return;
        }

        let quota = Quota::per_second(NonZeroU32::new(per_second).unwrap_or(NonZeroU32::MIN));
        *self.limiter.write().await = Some(Arc::new(RateLimiter::direct(quota)));

        if previous == 0 {
            warn!("Rate limiting activated at {} requests/second", per_second);
        } else {
            debug!(
                "Rate limit changed from {} to {} requests/second",
                previous, per_second
            );
        }
    }

    pub fn is_active(&self) -> bool {
        self.limit.load(Ordering::SeqCst) > 0
    }

    /// Current quota, 0 while inactive.
    pub fn limit(&self) -> u32 {
        self.limit.load(Ordering::SeqCst)
    }

    /// Wait for permission if rate limiting is active.
    pub async fn wait_if_active(&self) {
        if !self.is_active() {
            return;
        }
        let limiter = self.limiter.read().await.clone();
        if let Some(limiter) = limiter {
            limiter.until_ready().await;
        }
    }
}
