//! drive — a simulated car trip across San Francisco.
//!
//! Wires the whole stack together: a simulated GPS feed drives the position
//! tracker, a software geofence feeds the region monitor, and a tokio session
//! animates the car marker on a console "map" while straight-line routes are
//! redrawn in the background.
//!
//! ```text
//! drive [config.json]
//! RUST_LOG=debug drive      # per-tick log lines
//! ```

mod console;
mod feed;
mod gazetteer;

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use log::warn;

use lt_core::{GeoPoint, TrackingConfig};
use lt_runtime::SessionBuilder;
use lt_services::{
    LocationEventsFanout, LocationService, MapSurface, SoftwareGeofence, StraightLineDirections,
};
use lt_tracking::{AddressPicker, PositionTracker, RegionMonitor, TripAnimator};

use console::{ConsoleMap, ConsoleNotifier, EtaPrinter};
use feed::{Drive, SimulatedFeed};
use gazetteer::{Gazetteer, PLACES_CSV};

// ── Constants ─────────────────────────────────────────────────────────────────

const ORIGIN:           GeoPoint = GeoPoint { latitude: 37.7749, longitude: -122.4194 };
const DESTINATION:      GeoPoint = GeoPoint { latitude: 37.73471755, longitude: -122.45290792 };
const FIX_PERIOD:       Duration = Duration::from_secs(1);
const STEP_M:           f64      = 60.0;  // fast-forward: 60 m per fix
const JITTER_M:         f64      = 5.0;
const SEED:             u64      = 42;
const GAZETTEER_RADIUS: f64      = 1_500.0;
const MAX_RUN:          Duration = Duration::from_secs(180);

fn load_config(path: Option<&str>) -> Result<TrackingConfig> {
    let config = match path {
        None => TrackingConfig::default(),
        Some(p) => {
            let text = std::fs::read_to_string(Path::new(p))
                .with_context(|| format!("reading config {p}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {p}"))?
        }
    };
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref())?;

    println!("=== drive — live_track demo ===");
    println!(
        "From {ORIGIN} to {DESTINATION} ({:.0} m)  |  tick {:?}  |  seed {SEED}",
        ORIGIN.distance_m(DESTINATION),
        config.tick_interval()
    );
    println!();

    // 1. Destination label, as the address bar under the map pin would show it.
    let gazetteer = Arc::new(Gazetteer::from_reader(Cursor::new(PLACES_CSV), GAZETTEER_RADIUS)?);
    println!("Gazetteer: {} places", gazetteer.len());
    let mut picker = AddressPicker::new(Arc::clone(&gazetteer));
    picker.camera_will_move();
    match picker.camera_did_move(DESTINATION) {
        Some(name) => println!("Destination: {name}"),
        None => println!("Destination: unknown place"),
    }
    let Some(destination) = picker.destination() else {
        bail!("no named place near {DESTINATION}; nothing to drive to");
    };

    // 2. Location plumbing: feed → fan-out → tracker + region monitor.
    let tracker = PositionTracker::new();
    let geofence = Arc::new(SoftwareGeofence::new());
    let monitor = Arc::new(RegionMonitor::new(
        Arc::clone(&geofence),
        ConsoleNotifier,
        tracker.clone(),
        &config,
    ));
    let events = LocationEventsFanout::new()
        .with(Arc::new(tracker.clone()))
        .with(monitor.clone());

    let feed = SimulatedFeed::new(
        Drive::new(ORIGIN, destination, STEP_M, JITTER_M, SEED),
        Arc::clone(&geofence),
        FIX_PERIOD,
    );
    feed.start_updates(Arc::new(events))?;

    while tracker.last_fix().is_none() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    // 3. Geofence around the car.  Failure here only loses notifications.
    let mut map = ConsoleMap::default();
    match monitor.start() {
        Ok(region) => map.show_region(&region),
        Err(e) => warn!("region monitoring off: {e}"),
    }

    // 4. Trip session.
    let animator = TripAnimator::new(tracker.clone(), config);
    let session = SessionBuilder::new(animator, StraightLineDirections::default(), map)
        .observer(EtaPrinter::default())
        .spawn();
    session.start(destination).await?;

    let t0 = Instant::now();
    loop {
        tokio::time::sleep(Duration::from_millis(500)).await;
        let snap = session.snapshot().await?;
        let parked = snap.marker.is_some_and(|m| m.position == destination);
        if parked || t0.elapsed() >= MAX_RUN {
            break;
        }
    }

    // 5. Tear down.
    session.stop().await?;
    monitor.stop();
    feed.stop_updates();
    let map = session.shutdown().await?;

    println!();
    println!("Trip complete in {:.1} s", t0.elapsed().as_secs_f64());
    println!("  arrived       : {}", if feed.arrived() { "yes" } else { "no" });
    println!("  fixes         : {}", tracker.fix_count());
    println!("  marker moves  : {}", map.moves);
    println!("  routes drawn  : {}", map.routes);

    Ok(())
}
