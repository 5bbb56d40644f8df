//! Sliding-window per-user rate limiting.
//!
//! [`RateLimiter`] keeps, per user id, the times of recently *accepted* requests. Each check prunes
//! entries older than the window for that user only; rejected attempts are never recorded, so only
//! accepted requests consume quota. Windows of users who stop writing are not reclaimed.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use aget_core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

pub const RATE_LIMITED_TEXT: &str = "Too many requests. Please wait before sending more messages.";

/// Per-user sliding-window limiter. Share one instance (via `Arc`) across all handler tasks.
pub struct RateLimiter {
    window: Duration,
    max_requests: usize,
    windows: Mutex<HashMap<i64, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            window,
            max_requests,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Decides whether `user_id` may make a request at `now`, recording it when accepted.
    pub async fn allow(&self, user_id: i64, now: Instant) -> bool {
        let mut windows = self.windows.lock().await;
        let times = windows.entry(user_id).or_default();
        times.retain(|t| now.saturating_duration_since(*t) < self.window);

        if times.len() >= self.max_requests {
            return false;
        }
        times.push(now);
        true
    }

    /// [`RateLimiter::allow`] at the current instant.
    pub async fn check(&self, user_id: i64) -> bool {
        self.allow(user_id, Instant::now()).await
    }

    /// Number of users that currently have a window entry.
    pub async fn tracked_users(&self) -> usize {
        self.windows.lock().await.len()
    }
}

/// Replies with [`RATE_LIMITED_TEXT`] and ends the chain when the sender is over quota.
pub struct RateLimitHandler {
    limiter: Arc<RateLimiter>,
}

impl RateLimitHandler {
    pub fn new(limiter: Arc<RateLimiter>) -> Self {
        Self { limiter }
    }
}

#[async_trait]
impl Handler for RateLimitHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let user_id = message.user.id;
        if self.limiter.check(user_id).await {
            return Ok(HandlerResponse::Continue);
        }
        warn!(
            user_id = user_id,
            window_secs = self.limiter.window().as_secs(),
            max_requests = self.limiter.max_requests(),
            "Rate limit exceeded"
        );
        info!(user_id = user_id, "step: request rejected by rate limiter");
        Ok(HandlerResponse::Reply(RATE_LIMITED_TEXT.to_string()))
    }
}
