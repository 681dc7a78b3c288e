//! Location cache
//!
//! Holds at most one geolocation reading plus the user's denial flag. The
//! reading and its timestamp are stored together so they can only be set or
//! cleared as a pair. Staleness is recomputed from the clock on every call.

use parking_lot::RwLock;
use polaris_common::time::{Clock, SystemClock};
use polaris_domain::constants::LOCATION_STALE_AFTER;
use polaris_domain::{LocationSnapshot, LocationStatus, UserLocation};
use tracing::debug;

#[derive(Debug, Default)]
struct LocationState {
    /// Reading and the epoch milliseconds it was recorded at.
    reading: Option<(UserLocation, u64)>,
    denied: bool,
}

/// Shared location cache.
///
/// Share it through an `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct LocationStore<C: Clock = SystemClock> {
    clock: C,
    state: RwLock<LocationState>,
}

impl LocationStore<SystemClock> {
    /// Store backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for LocationStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> LocationStore<C> {
    /// Store backed by an explicit clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock, state: RwLock::new(LocationState::default()) }
    }

    /// Record a fresh reading and clear the denial flag.
    pub fn set_coords(&self, lat: f64, lng: f64) {
        let now = self.clock.now_millis();
        let mut state = self.state.write();
        state.reading = Some((UserLocation::new(lat, lng), now));
        state.denied = false;
        debug!(recorded_at = now, "location updated");
    }

    /// Forget the reading. The denial flag is left as is.
    pub fn clear_coords(&self) {
        self.state.write().reading = None;
    }

    pub fn set_denied(&self, denied: bool) {
        self.state.write().denied = denied;
    }

    pub fn is_denied(&self) -> bool {
        self.state.read().denied
    }

    /// True when there is no reading or it is older than five minutes.
    pub fn is_stale(&self) -> bool {
        let reading = self.state.read().reading;
        match reading {
            Some((_, recorded_at)) => self.is_expired(recorded_at),
            None => true,
        }
    }

    /// Cached coordinates, or `None` when the caller must ask the platform
    /// for a new reading (nothing cached, stale, or `force_refresh`).
    pub fn get_current_location(&self, force_refresh: bool) -> Option<UserLocation> {
        if force_refresh {
            return None;
        }
        let reading = self.state.read().reading;
        reading.filter(|(_, recorded_at)| !self.is_expired(*recorded_at)).map(|(coords, _)| coords)
    }

    /// Derived label. Denial takes precedence over any cached reading.
    pub fn status(&self) -> LocationStatus {
        let (reading, denied) = {
            let state = self.state.read();
            (state.reading, state.denied)
        };

        if denied {
            return LocationStatus::Denied;
        }
        match reading {
            None => LocationStatus::Unset,
            Some((_, recorded_at)) if self.is_expired(recorded_at) => LocationStatus::Stale,
            Some(_) => LocationStatus::Fresh,
        }
    }

    pub fn snapshot(&self) -> LocationSnapshot {
        let state = self.state.read();
        LocationSnapshot {
            coords: state.reading.map(|(coords, _)| coords),
            last_updated: state.reading.map(|(_, recorded_at)| recorded_at),
            denied: state.denied,
        }
    }

    fn is_expired(&self, recorded_at: u64) -> bool {
        let window = u64::try_from(LOCATION_STALE_AFTER.as_millis()).unwrap_or(u64::MAX);
        self.clock.millis_since(recorded_at) > window
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use polaris_common::time::MockClock;

    use super::*;

    fn store() -> (LocationStore<MockClock>, MockClock) {
        let clock = MockClock::new();
        (LocationStore::with_clock(clock.clone()), clock)
    }

    #[test]
    fn empty_store_is_stale_and_unset() {
        let (store, _) = store();

        assert!(store.is_stale());
        assert_eq!(store.status(), LocationStatus::Unset);
        assert_eq!(store.get_current_location(false), None);
    }

    #[test]
    fn staleness_window_is_exclusive() {
        let (store, clock) = store();

        store.set_coords(1.0, 2.0);
        assert!(!store.is_stale());

        clock.advance(LOCATION_STALE_AFTER);
        assert!(!store.is_stale());
        assert_eq!(store.status(), LocationStatus::Fresh);

        clock.advance(Duration::from_millis(1));
        assert!(store.is_stale());
        assert_eq!(store.status(), LocationStatus::Stale);
    }

    #[test]
    fn clear_coords_makes_store_stale_again() {
        let (store, _) = store();
        store.set_coords(1.0, 2.0);

        store.clear_coords();

        assert!(store.is_stale());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.coords, None);
        assert_eq!(snapshot.last_updated, None);
    }

    #[test]
    fn cached_location_is_returned_until_stale_or_forced() {
        let (store, clock) = store();
        store.set_coords(48.85, 2.35);

        assert_eq!(store.get_current_location(false), Some(UserLocation::new(48.85, 2.35)));
        assert_eq!(store.get_current_location(true), None);

        clock.advance(LOCATION_STALE_AFTER + Duration::from_millis(1));
        assert_eq!(store.get_current_location(false), None);
    }

    #[test]
    fn set_coords_clears_denial_but_clear_coords_keeps_it() {
        let (store, _) = store();

        store.set_denied(true);
        assert_eq!(store.status(), LocationStatus::Denied);

        store.set_coords(1.0, 2.0);
        assert!(!store.is_denied());

        store.set_denied(true);
        store.clear_coords();
        assert!(store.is_denied());
        assert_eq!(store.status(), LocationStatus::Denied);
    }

    #[test]
    fn snapshot_carries_reading_time() {
        let (store, clock) = store();
        store.set_coords(1.0, 2.0);

        let snapshot = store.snapshot();

        assert_eq!(snapshot.coords, Some(UserLocation::new(1.0, 2.0)));
        assert_eq!(snapshot.last_updated, Some(clock.now_millis()));
        assert!(!snapshot.denied);
    }
}
