//! Geofence around the vehicle with local notifications on crossings.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{info, warn};

use lt_core::{GeoPoint, TrackingConfig};
use lt_services::{
    CircularRegion, GeofenceService, LocationEvents, Notification, NotificationService,
};

use crate::{PositionTracker, TrackingError, TrackingResult};

/// Arms a circular region around the vehicle's position and reacts to
/// crossings.
///
/// On exit a notification is scheduled and the region is re-armed around
/// the new position, so the vehicle is always inside a fresh fence.  If
/// there is no fix to re-arm around, monitoring stops.
///
/// Register the monitor as a [`LocationEvents`] subscriber to receive
/// crossings.
pub struct RegionMonitor<G: GeofenceService, N: NotificationService> {
    geofence:   G,
    notifier:   N,
    tracker:    PositionTracker,
    identifier: String,
    radius_m:   f64,
    delay:      Duration,
    active:     Mutex<Option<CircularRegion>>,
}

impl<G: GeofenceService, N: NotificationService> RegionMonitor<G, N> {
    pub fn new(geofence: G, notifier: N, tracker: PositionTracker, config: &TrackingConfig) -> Self {
        Self {
            geofence,
            notifier,
            tracker,
            identifier: config.geofence_identifier.clone(),
            radius_m:   config.geofence_radius_m,
            delay:      config.notification_delay(),
            active:     Mutex::new(None),
        }
    }

    fn active(&self) -> MutexGuard<'_, Option<CircularRegion>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The region currently armed.
    pub fn active_region(&self) -> Option<CircularRegion> {
        self.active().clone()
    }

    /// Arm the region around the tracker's latest fix.
    ///
    /// # Errors
    ///
    /// - [`TrackingError::MonitoringUnavailable`] if the geofence service
    ///   cannot monitor regions.
    /// - [`TrackingError::PermissionDenied`] unless the user granted
    ///   always-on location access.
    /// - [`TrackingError::NoFix`] before the first fix.
    /// - [`TrackingError::Service`] if registration fails.
    ///
    /// None of these are fatal; callers log them and carry on without a
    /// fence.
    pub fn start(&self) -> TrackingResult<CircularRegion> {
        if !self.geofence.is_monitoring_available() {
            return Err(TrackingError::MonitoringUnavailable);
        }
        let status = self.tracker.authorization();
        if !status.allows_region_monitoring() {
            return Err(TrackingError::PermissionDenied(status));
        }
        let center = self.tracker.last_fix().ok_or(TrackingError::NoFix)?;
        self.arm(center)
    }

    /// Disarm the region.  Does nothing if none is armed.
    pub fn stop(&self) {
        if let Some(region) = self.active().take() {
            self.geofence.stop_monitoring(&region.identifier);
            info!("region: disarmed {}", region.identifier);
        }
    }

    fn arm(&self, center: GeoPoint) -> TrackingResult<CircularRegion> {
        let region = CircularRegion::exit_only(self.identifier.clone(), center, self.radius_m);
        self.geofence.start_monitoring(region.clone())?;
        info!("region: armed {} at {center} (r = {:.0} m)", region.identifier, region.radius_m);
        *self.active() = Some(region.clone());
        Ok(region)
    }

    fn notify(&self, title: &str, body: String) {
        let notification = Notification {
            title: title.to_string(),
            body,
            delay: self.delay,
        };
        if let Err(e) = self.notifier.schedule(notification) {
            warn!("region: {e}");
        }
    }

    fn is_ours(&self, identifier: &str) -> bool {
        self.active()
            .as_ref()
            .is_some_and(|r| r.identifier == identifier)
    }
}

impl<G: GeofenceService, N: NotificationService> LocationEvents for RegionMonitor<G, N> {
    fn on_region_enter(&self, identifier: &str) {
        if !self.is_ours(identifier) {
            return;
        }
        self.notify("Entered area", format!("The vehicle entered {identifier}."));
    }

    fn on_region_exit(&self, identifier: &str) {
        if !self.is_ours(identifier) {
            return;
        }
        match self.tracker.last_fix() {
            Some(position) => {
                self.notify(
                    "Left area",
                    format!(
                        "The vehicle left the {:.0} m area and is now at {position}.",
                        self.radius_m
                    ),
                );
                self.geofence.stop_monitoring(identifier);
                if let Err(e) = self.arm(position) {
                    warn!("region: could not re-arm {identifier}: {e}");
                    *self.active() = None;
                }
            }
            None => {
                warn!("region: exit from {identifier} without a fix; stopping");
                self.stop();
            }
        }
    }
}
