//! One-shot timers tied to their owner's lifetime
//!
//! A [`ScopedTimer`] fires its callback once after a delay unless it is
//! cancelled first. Dropping the timer cancels it, so a component that owns
//! a timer can never trigger a side effect after it has been torn down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

/// Handle used to cancel a timer or observe whether it fired.
#[derive(Debug, Clone, Default)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
    fired: Arc<AtomicBool>,
}

impl TimerHandle {
    fn new() -> Self {
        Self::default()
    }

    /// Cancel the timer. Has no effect once the callback ran.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether the timer has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Whether the callback has run.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

/// One-shot timer cancelled on drop.
///
/// Must be created from within a tokio runtime.
///
/// ```no_run
/// use std::time::Duration;
///
/// use polaris_common::time::ScopedTimer;
///
/// #[tokio::main]
/// async fn main() {
///     let timer = ScopedTimer::after(Duration::from_secs(2), || {
///         println!("fired");
///     });
///     drop(timer); // never fires
/// }
/// ```
#[derive(Debug)]
pub struct ScopedTimer {
    handle: TimerHandle,
    delay: Duration,
    task: Option<JoinHandle<()>>,
}

impl ScopedTimer {
    /// Schedule `callback` to run once after `delay`.
    pub fn after<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = TimerHandle::new();
        let task_handle = handle.clone();

        let task = tokio::spawn(async move {
            sleep(delay).await;
            if !task_handle.is_cancelled() {
                task_handle.fired.store(true, Ordering::SeqCst);
                callback();
            }
        });

        Self { handle, delay, task: Some(task) }
    }

    /// Delay this timer was scheduled with.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cloneable handle for observing or cancelling the timer.
    pub fn handle(&self) -> TimerHandle {
        self.handle.clone()
    }

    /// Cancel the timer now.
    pub fn cancel(&mut self) {
        self.handle.cancel();
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                let delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX);
                debug!(delay_ms, "cancelling pending timer");
                task.abort();
            }
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let timer = ScopedTimer::after(Duration::from_secs(2), move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        sleep(Duration::from_millis(1_999)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(timer.handle().has_fired());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_timer_cancels_it() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let timer = ScopedTimer::after(Duration::from_secs(1), move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });
        let handle = timer.handle();
        drop(timer);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(handle.is_cancelled());
        assert!(!handle.has_fired());
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_cancel_is_idempotent() {
        let mut timer = ScopedTimer::after(Duration::from_secs(1), || {});
        timer.cancel();
        timer.cancel();

        sleep(Duration::from_secs(2)).await;
        assert!(!timer.handle().has_fired());
        assert_eq!(timer.delay(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelling_an_unbounded_delay_does_not_overflow() {
        let mut timer = ScopedTimer::after(Duration::MAX, || {});
        timer.cancel();

        assert!(timer.handle().is_cancelled());
        assert!(!timer.handle().has_fired());
        assert_eq!(timer.delay(), Duration::MAX);
    }
}
