//! Time utilities
//!
//! - **[`clock`]**: wall-clock abstraction with a controllable mock for tests
//! - **[`timer`]**: one-shot timers that are cancelled when their owner drops

pub mod clock;
#[cfg(feature = "runtime")]
pub mod timer;

pub use clock::{Clock, MockClock, SystemClock};
#[cfg(feature = "runtime")]
pub use timer::{ScopedTimer, TimerHandle};
