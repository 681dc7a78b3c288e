//! Navigation port used by the callback screens

use parking_lot::Mutex;

/// Performs a client-side navigation.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, target: &str);
}

/// Navigator that records every target instead of navigating, for headless
/// callers and tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets in the order they were navigated to.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        self.visited.lock().push(target.to_string());
    }
}
