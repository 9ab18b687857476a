//! The latest known device position.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};

use lt_core::GeoPoint;
use lt_services::{AuthorizationStatus, LocationEvents};

#[derive(Debug, Default)]
struct TrackerState {
    last_fix:      Option<GeoPoint>,
    fixes:         u64,
    authorization: AuthorizationStatus,
}

/// Shared handle to the most recent fix from the location service.
///
/// Clones share state.  The location service writes through
/// [`LocationEvents::on_location_update`]; readers copy the value out under a
/// lock held for a single assignment, so a read never waits on anything but
/// another copy.  Last write wins.
#[derive(Clone, Debug, Default)]
pub struct PositionTracker {
    inner: Arc<Mutex<TrackerState>>,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, TrackerState> {
        // The state is plain data; a panic mid-write cannot leave it torn.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Latest coordinate, or `(0, 0)` before the first fix.
    pub fn current_position(&self) -> GeoPoint {
        self.state().last_fix.unwrap_or_default()
    }

    /// Latest coordinate, `None` before the first fix.
    pub fn last_fix(&self) -> Option<GeoPoint> {
        self.state().last_fix
    }

    /// Number of fixes received.
    pub fn fix_count(&self) -> u64 {
        self.state().fixes
    }

    /// Last authorization status reported by the location service.
    pub fn authorization(&self) -> AuthorizationStatus {
        self.state().authorization
    }

    /// Record a fix.
    pub fn update(&self, point: GeoPoint) {
        let mut s = self.state();
        s.last_fix = Some(point);
        s.fixes += 1;
    }
}

impl LocationEvents for PositionTracker {
    fn on_location_update(&self, point: GeoPoint) {
        self.update(point);
        debug!("tracker: fix {point}");
    }

    fn on_authorization_change(&self, status: AuthorizationStatus) {
        self.state().authorization = status;
        match status {
            AuthorizationStatus::NotDetermined => debug!("tracker: authorization not determined"),
            AuthorizationStatus::Restricted => warn!("tracker: location access restricted"),
            AuthorizationStatus::Denied => warn!("tracker: user denied location access"),
            AuthorizationStatus::AuthorizedWhenInUse => {
                info!("tracker: authorized when in use; region monitoring needs always")
            }
            AuthorizationStatus::AuthorizedAlways => info!("tracker: region monitoring available"),
        }
    }
}
