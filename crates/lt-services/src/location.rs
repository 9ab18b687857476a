//! Location service contract and the event-subscription interface.
//!
//! Platform location managers report through delegate callbacks.  Here the
//! subscriber side is a capability trait with one handler slot per event;
//! implementors override what they need and inherit no-ops for the rest.

use std::sync::Arc;

use lt_core::GeoPoint;

use crate::ServiceResult;

/// What the user has allowed the app to do with location data.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    #[default]
    NotDetermined,
    /// Parental controls or device policy forbid location access.
    Restricted,
    /// The user declined.
    Denied,
    /// Updates while the app is in the foreground.
    AuthorizedWhenInUse,
    /// Updates in the background plus region monitoring.
    AuthorizedAlways,
}

impl AuthorizationStatus {
    /// `true` if position updates may be started.
    #[inline]
    pub fn allows_updates(self) -> bool {
        matches!(
            self,
            AuthorizationStatus::AuthorizedWhenInUse | AuthorizationStatus::AuthorizedAlways
        )
    }

    /// `true` if geofences may be registered.
    #[inline]
    pub fn allows_region_monitoring(self) -> bool {
        matches!(self, AuthorizationStatus::AuthorizedAlways)
    }
}

impl std::fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AuthorizationStatus::NotDetermined       => "not determined",
            AuthorizationStatus::Restricted          => "restricted",
            AuthorizationStatus::Denied              => "denied",
            AuthorizationStatus::AuthorizedWhenInUse => "authorized when in use",
            AuthorizationStatus::AuthorizedAlways    => "authorized always",
        };
        f.write_str(s)
    }
}

/// Callbacks a location service pushes to its subscriber.
///
/// Called from whatever thread the service delivers on, so handlers take
/// `&self` and implementors use interior mutability.
pub trait LocationEvents: Send + Sync {
    /// A new fix.  Only the latest matters; earlier fixes may be dropped.
    fn on_location_update(&self, _point: GeoPoint) {}

    /// The device entered the monitored region `identifier`.
    fn on_region_enter(&self, _identifier: &str) {}

    /// The device left the monitored region `identifier`.
    fn on_region_exit(&self, _identifier: &str) {}

    /// The user changed the app's location permission.
    fn on_authorization_change(&self, _status: AuthorizationStatus) {}
}

/// Push-based coordinate stream with start/stop controls.
pub trait LocationService: Send + Sync {
    /// Current permission state.
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Begin delivering events to `events`.  Replaces any previous
    /// subscriber.
    fn start_updates(&self, events: Arc<dyn LocationEvents>) -> ServiceResult<()>;

    /// Stop delivering events.  Stopping an idle service is a no-op.
    fn stop_updates(&self);
}

/// Forwards every event to each subscriber in registration order.
///
/// Location services accept a single subscriber; the fan-out lets the
/// position tracker and the region monitor both listen.
#[derive(Default, Clone)]
pub struct LocationEventsFanout {
    subscribers: Vec<Arc<dyn LocationEvents>>,
}

impl LocationEventsFanout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber.
    pub fn with(mut self, subscriber: Arc<dyn LocationEvents>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl LocationEvents for LocationEventsFanout {
    fn on_location_update(&self, point: GeoPoint) {
        for s in &self.subscribers {
            s.on_location_update(point);
        }
    }

    fn on_region_enter(&self, identifier: &str) {
        for s in &self.subscribers {
            s.on_region_enter(identifier);
        }
    }

    fn on_region_exit(&self, identifier: &str) {
        for s in &self.subscribers {
            s.on_region_exit(identifier);
        }
    }

    fn on_authorization_change(&self, status: AuthorizationStatus) {
        for s in &self.subscribers {
            s.on_authorization_change(status);
        }
    }
}
