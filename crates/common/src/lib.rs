//! Small shared utilities for the Polaris crates.
//!
//! # Feature Tiers
//!
//! - `foundation`: wall-clock abstraction ([`time::Clock`])
//! - `runtime`: tokio-backed scoped timers ([`time::timer`])

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

#[cfg(feature = "foundation")]
pub mod time;

#[cfg(feature = "foundation")]
pub use time::{Clock, MockClock, SystemClock};
#[cfg(feature = "runtime")]
pub use time::{ScopedTimer, TimerHandle};
