//! Fixed-window rate limiting keyed by caller identity.
//!
//! Each identity gets a counter that resets at fixed window boundaries.
//! Fixed windows keep the state at O(1) per identity; the accepted tradeoff
//! is that a caller can burst up to twice the limit across a window boundary
//! (L at the end of one window, L at the start of the next). That behavior is
//! part of the contract here and is not to be "fixed" by swapping in a
//! sliding window or token bucket.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::Utc;
use tracing::{debug, warn};

use ig_shared::RateLimitConfig;

/// Outcome of a single admission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// The request may proceed; `remaining` calls are left in this window
    Admitted { remaining: u32 },
    /// The request is rejected; the caller may retry after this many seconds
    Rejected { retry_after_seconds: u64 },
}

impl Admission {
    /// Whether the request was admitted
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }
}

/// Per-identity counter state
#[derive(Debug)]
struct WindowState {
    /// Unix timestamp at which the current window opened
    window_start: i64,
    /// Requests admitted in the current window; never exceeds the limit
    count: u32,
}

/// Fixed-window rate limiter with identity-partitioned locking
///
/// The map of identities is guarded by an `RwLock` that is only write-locked
/// when a new identity shows up; the check-and-increment for each admission
/// happens under that identity's own mutex, so concurrent requests from the
/// same identity serialize against each other while requests from different
/// identities never contend.
pub struct FixedWindowLimiter {
    windows: RwLock<HashMap<String, Arc<Mutex<WindowState>>>>,
    limit: u32,
    window_seconds: i64,
}

impl FixedWindowLimiter {
    /// Creates a limiter admitting `limit` requests per `window_seconds`
    pub fn new(limit: u32, window_seconds: u64) -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
            limit,
            window_seconds: window_seconds as i64,
        }
    }

    /// Creates the inference-call limiter from configuration
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.requests_per_window, config.window_seconds)
    }

    /// Creates the login-attempt limiter from configuration
    pub fn for_login(config: &RateLimitConfig) -> Self {
        Self::new(config.login_attempts_per_window, config.window_seconds)
    }

    /// Attempts to admit one request for `identity` right now
    pub fn try_admit(&self, identity: &str) -> Admission {
        self.admit_at(identity, Utc::now().timestamp())
    }

    /// Admission logic against an explicit clock reading
    fn admit_at(&self, identity: &str, now: i64) -> Admission {
        let slot = self.window_for(identity);
        let mut window = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if now >= window.window_start + self.window_seconds {
            window.window_start = now;
            window.count = 0;
        }

        if window.count < self.limit {
            window.count += 1;
            let remaining = self.limit - window.count;
            debug!(identity, remaining, "request admitted");
            Admission::Admitted { remaining }
        } else {
            let retry_after_seconds = (window.window_start + self.window_seconds - now) as u64;
            warn!(identity, retry_after_seconds, "rate limit exceeded");
            Admission::Rejected { retry_after_seconds }
        }
    }

    /// Returns the counter slot for an identity, creating it lazily
    fn window_for(&self, identity: &str) -> Arc<Mutex<WindowState>> {
        {
            let map = self.windows.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = map.get(identity) {
                return Arc::clone(slot);
            }
        }

        let mut map = self.windows.write().unwrap_or_else(PoisonError::into_inner);
        let slot = map.entry(identity.to_string()).or_insert_with(|| {
            // window_start of 0 forces a reset on the first admission
            Arc::new(Mutex::new(WindowState {
                window_start: 0,
                count: 0,
            }))
        });
        Arc::clone(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_admits_exactly_limit_then_rejects() {
        let limiter = FixedWindowLimiter::new(5, 60);

        for i in 0..5 {
            let admission = limiter.admit_at("alice", NOW + i);
            assert!(admission.is_admitted(), "call {} should be admitted", i + 1);
        }

        match limiter.admit_at("alice", NOW + 5) {
            Admission::Rejected { retry_after_seconds } => {
                assert!(retry_after_seconds > 0);
                assert_eq!(retry_after_seconds, 55);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_remaining_counts_down() {
        let limiter = FixedWindowLimiter::new(3, 60);

        assert_eq!(limiter.admit_at("a", NOW), Admission::Admitted { remaining: 2 });
        assert_eq!(limiter.admit_at("a", NOW), Admission::Admitted { remaining: 1 });
        assert_eq!(limiter.admit_at("a", NOW), Admission::Admitted { remaining: 0 });
    }

    #[test]
    fn test_window_rollover_readmits() {
        let limiter = FixedWindowLimiter::new(5, 60);

        for _ in 0..5 {
            assert!(limiter.admit_at("alice", NOW).is_admitted());
        }
        assert!(!limiter.admit_at("alice", NOW + 59).is_admitted());

        // One past the boundary starts a fresh window
        assert!(limiter.admit_at("alice", NOW + 60).is_admitted());
    }

    #[test]
    fn test_identities_do_not_interfere() {
        let limiter = FixedWindowLimiter::new(1, 60);

        assert!(limiter.admit_at("alice", NOW).is_admitted());
        assert!(!limiter.admit_at("alice", NOW).is_admitted());

        assert!(limiter.admit_at("bob", NOW).is_admitted());
    }

    #[test]
    fn test_retry_after_shrinks_as_window_ages() {
        let limiter = FixedWindowLimiter::new(1, 60);
        assert!(limiter.admit_at("alice", NOW).is_admitted());

        let early = match limiter.admit_at("alice", NOW + 10) {
            Admission::Rejected { retry_after_seconds } => retry_after_seconds,
            other => panic!("expected rejection, got {:?}", other),
        };
        let late = match limiter.admit_at("alice", NOW + 50) {
            Admission::Rejected { retry_after_seconds } => retry_after_seconds,
            other => panic!("expected rejection, got {:?}", other),
        };

        assert_eq!(early, 50);
        assert_eq!(late, 10);
    }

    #[test]
    fn test_concurrent_admissions_never_exceed_limit() {
        let limiter = Arc::new(FixedWindowLimiter::new(5, 60));
        let mut handles = Vec::new();

        for _ in 0..20 {
            let limiter = Arc::clone(&limiter);
            handles.push(thread::spawn(move || {
                limiter.admit_at("alice", NOW).is_admitted()
            }));
        }

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap_or(false))
            .filter(|admitted| *admitted)
            .count();

        // Exactly min(N, L) of the N parallel attempts get through
        assert_eq!(admitted, 5);
    }

    #[test]
    fn test_zero_limit_rejects_everything() {
        let limiter = FixedWindowLimiter::new(0, 60);
        assert!(!limiter.admit_at("alice", NOW).is_admitted());
    }
}
