//! Geofencing contract and an in-process detector.
//!
//! A platform geofencing service watches registered circles and calls back on
//! entry and exit.  [`SoftwareGeofence`] does the same from a stream of fixes,
//! for hosts without native region monitoring.

use std::sync::{Mutex, PoisonError};

use log::{debug, info};
use rustc_hash::FxHashMap;

use lt_core::GeoPoint;

use crate::{ServiceError, ServiceResult};

// ── CircularRegion ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircularRegion {
    pub identifier:      String,
    pub center:          GeoPoint,
    pub radius_m:        f64,
    pub notify_on_entry: bool,
    pub notify_on_exit:  bool,
}

impl CircularRegion {
    /// A region that reports exits only.
    pub fn exit_only(identifier: impl Into<String>, center: GeoPoint, radius_m: f64) -> Self {
        Self {
            identifier: identifier.into(),
            center,
            radius_m,
            notify_on_entry: false,
            notify_on_exit:  true,
        }
    }

    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.within_radius(self.center, self.radius_m)
    }
}

/// A boundary crossing, named by region identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionEvent {
    Enter(String),
    Exit(String),
}

// ── GeofenceService trait ─────────────────────────────────────────────────────

pub trait GeofenceService: Send + Sync {
    /// `false` on hardware that cannot monitor circular regions.
    fn is_monitoring_available(&self) -> bool {
        true
    }

    /// Start watching `region`.  Registering an identifier that is already
    /// monitored replaces the old region.
    fn start_monitoring(&self, region: CircularRegion) -> ServiceResult<()>;

    /// Stop watching `identifier`.  Unknown identifiers are ignored.
    fn stop_monitoring(&self, identifier: &str);
}

impl<G: GeofenceService + ?Sized> GeofenceService for std::sync::Arc<G> {
    fn is_monitoring_available(&self) -> bool {
        (**self).is_monitoring_available()
    }

    fn start_monitoring(&self, region: CircularRegion) -> ServiceResult<()> {
        (**self).start_monitoring(region)
    }

    fn stop_monitoring(&self, identifier: &str) {
        (**self).stop_monitoring(identifier)
    }
}

// ── SoftwareGeofence ──────────────────────────────────────────────────────────

struct Watched {
    region: CircularRegion,
    /// `None` until the first fix after registration.
    inside: Option<bool>,
}

/// Detects region crossings from fixes passed to [`observe`][Self::observe].
///
/// The first fix after a region is registered only establishes whether the
/// device is inside; it never produces an event.  After that each change of
/// side yields `Enter` or `Exit`, filtered by the region's notify flags.
#[derive(Default)]
pub struct SoftwareGeofence {
    regions:  Mutex<FxHashMap<String, Watched>>,
    capacity: Option<usize>,
}

impl SoftwareGeofence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of simultaneously monitored regions, as platform
    /// services do.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self { regions: Mutex::default(), capacity: Some(limit) }
    }

    /// Number of regions currently monitored.
    pub fn monitored_count(&self) -> usize {
        self.regions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// The region registered under `identifier`, if any.
    pub fn region(&self, identifier: &str) -> Option<CircularRegion> {
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(identifier)
            .map(|w| w.region.clone())
    }

    /// Feed one fix; returns crossings in identifier order.
    pub fn observe(&self, point: GeoPoint) -> Vec<RegionEvent> {
        let mut regions = self.regions.lock().unwrap_or_else(PoisonError::into_inner);
        let mut events = Vec::new();
        for (id, watched) in regions.iter_mut() {
            let now_inside = watched.region.contains(point);
            let was_inside = watched.inside.replace(now_inside);
            match (was_inside, now_inside) {
                (Some(false), true) if watched.region.notify_on_entry => {
                    events.push(RegionEvent::Enter(id.clone()));
                }
                (Some(true), false) if watched.region.notify_on_exit => {
                    events.push(RegionEvent::Exit(id.clone()));
                }
                _ => {}
            }
        }
        // FxHashMap iteration order is arbitrary.
        events.sort_by(|a, b| event_id(a).cmp(event_id(b)));
        if !events.is_empty() {
            debug!("geofence: {} crossing(s) at {point}", events.len());
        }
        events
    }
}

fn event_id(e: &RegionEvent) -> &str {
    match e {
        RegionEvent::Enter(id) | RegionEvent::Exit(id) => id,
    }
}

impl GeofenceService for SoftwareGeofence {
    fn start_monitoring(&self, region: CircularRegion) -> ServiceResult<()> {
        let mut regions = self.regions.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(limit) = self.capacity
            && !regions.contains_key(&region.identifier)
            && regions.len() >= limit
        {
            return Err(ServiceError::Geofence {
                identifier: region.identifier,
                reason:     format!("monitoring limit of {limit} regions reached"),
            });
        }
        info!(
            "geofence: monitoring {} at {} (r = {:.0} m)",
            region.identifier, region.center, region.radius_m
        );
        regions.insert(region.identifier.clone(), Watched { region, inside: None });
        Ok(())
    }

    fn stop_monitoring(&self, identifier: &str) {
        let removed = self
            .regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(identifier);
        if removed.is_some() {
            info!("geofence: stopped monitoring {identifier}");
        }
    }
}
