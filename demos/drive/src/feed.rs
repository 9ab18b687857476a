//! Simulated GPS: a vehicle driving in a straight line with noisy fixes.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;

use lt_core::{GeoPoint, bearing};
use lt_services::{
    AuthorizationStatus, LocationEvents, LocationService, RegionEvent, ServiceError,
    ServiceResult, SoftwareGeofence,
};

// ── Drive ─────────────────────────────────────────────────────────────────────

/// Position generator: moves `step_m` toward the destination per fix and
/// scatters each fix by up to `jitter_m`.
pub struct Drive {
    truth:       GeoPoint,
    destination: GeoPoint,
    step_m:      f64,
    jitter_m:    f64,
    rng:         SmallRng,
}

impl Drive {
    pub fn new(origin: GeoPoint, destination: GeoPoint, step_m: f64, jitter_m: f64, seed: u64) -> Self {
        Self {
            truth: origin,
            destination,
            step_m,
            jitter_m,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn arrived(&self) -> bool {
        self.truth == self.destination
    }

    /// Advance one step and return the reported fix.
    ///
    /// Once arrived, the destination is reported exactly, so the marker
    /// comes to rest.
    pub fn next_fix(&mut self) -> GeoPoint {
        if self.truth.distance_m(self.destination) <= self.step_m {
            self.truth = self.destination;
            return self.truth;
        }
        self.truth = self.truth.project(bearing(self.truth, self.destination), self.step_m);
        if self.jitter_m <= 0.0 {
            return self.truth;
        }
        let heading = self.rng.gen_range(0.0..360.0);
        let offset = self.rng.gen_range(0.0..self.jitter_m);
        self.truth.project(heading, offset)
    }
}

// ── SimulatedFeed ─────────────────────────────────────────────────────────────

/// [`LocationService`] that replays a [`Drive`] on a timer.
///
/// Every fix is also run through the software geofence so region crossings
/// reach the subscriber right after the fix that caused them.
pub struct SimulatedFeed {
    drive:    Arc<Mutex<Drive>>,
    geofence: Arc<SoftwareGeofence>,
    period:   Duration,
    task:     Mutex<Option<JoinHandle<()>>>,
}

impl SimulatedFeed {
    pub fn new(drive: Drive, geofence: Arc<SoftwareGeofence>, period: Duration) -> Self {
        Self {
            drive: Arc::new(Mutex::new(drive)),
            geofence,
            period,
            task: Mutex::new(None),
        }
    }

    pub fn arrived(&self) -> bool {
        self.drive.lock().unwrap_or_else(PoisonError::into_inner).arrived()
    }

    fn task(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LocationService for SimulatedFeed {
    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::AuthorizedAlways
    }

    fn start_updates(&self, events: Arc<dyn LocationEvents>) -> ServiceResult<()> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| ServiceError::Unavailable(format!("simulated feed needs a tokio runtime: {e}")))?;

        events.on_authorization_change(self.authorization_status());

        let drive = Arc::clone(&self.drive);
        let geofence = Arc::clone(&self.geofence);
        let period = self.period;
        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let fix = drive.lock().unwrap_or_else(PoisonError::into_inner).next_fix();
                debug!("feed: fix {fix}");
                events.on_location_update(fix);
                for event in geofence.observe(fix) {
                    match event {
                        RegionEvent::Enter(id) => events.on_region_enter(&id),
                        RegionEvent::Exit(id) => events.on_region_exit(&id),
                    }
                }
            }
        });

        if let Some(previous) = self.task().replace(handle) {
            previous.abort();
        }
        info!("feed: started (fix every {:?})", self.period);
        Ok(())
    }

    fn stop_updates(&self) {
        if let Some(handle) = self.task().take() {
            handle.abort();
            info!("feed: stopped");
        }
    }
}
