//! Wall-clock abstraction for testability
//!
//! Components that reason about elapsed wall time (for example the location
//! cache staleness check) take a [`Clock`] instead of calling
//! `SystemTime::now()` directly, so tests can move time forward without
//! sleeping.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use polaris_common::time::{Clock, MockClock};
//!
//! let clock = MockClock::new();
//! let start = clock.now_millis();
//! clock.advance(Duration::from_secs(5));
//! assert_eq!(clock.now_millis() - start, 5_000);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of wall-clock time in milliseconds since the UNIX epoch.
pub trait Clock: Send + Sync {
    /// Current time as milliseconds since the UNIX epoch.
    fn now_millis(&self) -> u64;

    /// Milliseconds elapsed since `earlier`, saturating at zero when the
    /// clock went backwards.
    fn millis_since(&self, earlier: u64) -> u64 {
        self.now_millis().saturating_sub(earlier)
    }
}

/// Real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default()
    }
}

/// Manually driven clock for deterministic tests.
///
/// Clones share the same underlying time, so a clock handed to a component
/// can still be advanced from the test body.
#[derive(Debug, Clone)]
pub struct MockClock {
    millis: Arc<AtomicU64>,
}

impl MockClock {
    /// Fixed starting point (2024-01-01T00:00:00Z) so assertions never depend
    /// on the machine clock.
    pub const DEFAULT_START_MILLIS: u64 = 1_704_067_200_000;

    /// Create a mock clock at [`Self::DEFAULT_START_MILLIS`].
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Self::DEFAULT_START_MILLIS)
    }

    /// Create a mock clock at an explicit epoch-millisecond value.
    #[must_use]
    pub fn starting_at(millis: u64) -> Self {
        Self { millis: Arc::new(AtomicU64::new(millis)) }
    }

    /// Move time forward.
    pub fn advance(&self, duration: Duration) {
        let delta = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }

    /// Jump to an absolute epoch-millisecond value.
    pub fn set_millis(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}
