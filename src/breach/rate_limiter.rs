// src/breach/rate_limiter.rs
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use log::debug;

pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(1500);

/// Blocking throttle enforcing a minimum gap between the starts of
/// consecutive outbound lookups.
///
/// Each caller reserves its dispatch slot inside the lock and sleeps
/// outside of it, so a waiting request never holds up slot reservation
/// for others. A reserved slot counts as used even if the caller is
/// cancelled while waiting or while its lookup is in flight.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_dispatch: Mutex<Option<Instant>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_dispatch: Mutex::new(None),
        }
    }

    /// Waits until this caller may dispatch. Returns the time spent waiting.
    pub async fn acquire(&self) -> Duration {
        let now = Instant::now();
        let slot = self.reserve(now);
        let wait = slot.saturating_duration_since(now);
        if !wait.is_zero() {
            debug!("Rate limiter: waiting {} ms for next lookup slot", wait.as_millis());
            tokio::time::sleep_until(slot).await;
        }
        wait
    }

    fn reserve(&self, now: Instant) -> Instant {
        let mut last = self.last_dispatch.lock().unwrap_or_else(PoisonError::into_inner);
        let slot = match *last {
            Some(previous) => (previous + self.min_interval).max(now),
            None => now,
        };
        *last = Some(slot);
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn first_call_does_not_wait() {
        let limiter = RateLimiter::default();
        assert_eq!(limiter.acquire().await, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn sequential_calls_are_spaced() {
        let limiter = RateLimiter::default();
        limiter.acquire().await;
        let first = Instant::now();
        limiter.acquire().await;
        let second = Instant::now();
        assert!(second - first >= DEFAULT_MIN_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_calls_are_spaced() {
        let limiter = Arc::new(RateLimiter::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                tokio::spawn(async move {
                    limiter.acquire().await;
                    Instant::now()
                })
            })
            .collect();

        let mut starts = Vec::new();
        for handle in handles {
            starts.push(handle.await.unwrap());
        }
        starts.sort();
        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= DEFAULT_MIN_INTERVAL, "{:?}", pair);
        }
        assert_eq!(starts.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn no_wait_after_interval_elapsed() {
        let limiter = RateLimiter::new(Duration::from_millis(200));
        limiter.acquire().await;
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(limiter.acquire().await, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_wait_still_consumes_slot() {
        let limiter = RateLimiter::default();
        limiter.acquire().await;
        let start = Instant::now();

        // Gives up before its slot arrives.
        let cancelled = tokio::time::timeout(Duration::from_millis(100), limiter.acquire()).await;
        assert!(cancelled.is_err());

        limiter.acquire().await;
        assert!(Instant::now() - start >= DEFAULT_MIN_INTERVAL * 2);
    }
}
