//! Console stand-ins for the map and the notification centre.

use std::time::Duration;

use lt_core::{GeoPoint, Tick, heading_to_compass_8point};
use lt_runtime::SessionObserver;
use lt_services::{
    CircularRegion, MapRegion, MapSurface, MarkerPose, Notification, NotificationService,
    ServiceResult,
};
use lt_tracking::{RouteSummary, TripSnapshot};

// ── Map ───────────────────────────────────────────────────────────────────────

/// Prints map calls instead of drawing them.
#[derive(Default)]
pub struct ConsoleMap {
    pub moves:  usize,
    pub routes: usize,
}

impl MapSurface for ConsoleMap {
    fn add_marker(&mut self, pose: MarkerPose) {
        println!("[map] car placed at {}", pose.position);
    }

    fn animate_marker(&mut self, pose: MarkerPose, move_duration: Duration, _rotate: Duration) {
        self.moves += 1;
        let (compass, heading) = heading_to_compass_8point(pose.heading_degrees);
        println!(
            "[map] car → {} heading {heading:>5.1}° ({compass}) over {:.1} s",
            pose.position,
            move_duration.as_secs_f64()
        );
    }

    fn remove_marker(&mut self) {
        println!("[map] car removed");
    }

    fn show_route(&mut self, polyline: &[GeoPoint]) {
        self.routes += 1;
        println!("[map] route redrawn ({} vertices)", polyline.len());
    }

    fn clear_overlays(&mut self) {
        println!("[map] overlays cleared");
    }

    fn show_region(&mut self, region: &CircularRegion) {
        println!("[map] region {} at {} r={:.0} m", region.identifier, region.center, region.radius_m);
    }

    fn fit_region(&mut self, region: MapRegion, edge_padding: f64) {
        println!(
            "[map] camera fit {} … {} (padding {edge_padding})",
            region.south_west, region.north_east
        );
    }
}

// ── Notifications ─────────────────────────────────────────────────────────────

pub struct ConsoleNotifier;

impl NotificationService for ConsoleNotifier {
    fn schedule(&self, notification: Notification) -> ServiceResult<()> {
        println!(
            "[notify +{:.1} s] {}: {}",
            notification.delay.as_secs_f64(),
            notification.title,
            notification.body
        );
        Ok(())
    }
}

// ── Session observer ──────────────────────────────────────────────────────────

/// Prints the ETA whenever a new route is drawn.
#[derive(Default)]
pub struct EtaPrinter {
    pub last_tick: Tick,
}

impl SessionObserver for EtaPrinter {
    fn on_trip_start(&mut self, destination: GeoPoint) {
        println!("[trip] heading for {destination}");
    }

    fn on_tick(&mut self, tick: Tick, _moved: bool) {
        self.last_tick = tick;
    }

    fn on_route(&mut self, route: &RouteSummary) {
        println!(
            "[trip] {}: {:.0} m to go, about {}",
            self.last_tick, route.distance_m, format_eta(route.expected_travel_secs)
        );
    }

    fn on_trip_end(&mut self, last: &TripSnapshot) {
        println!("[trip] ended after {}", last.ticks);
    }
}

/// `1h 02m 03s`, `4m 05s`, `7s`.  Rounds to the nearest second.
pub fn format_eta(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "0s".to_string();
    }
    let total = secs.round() as u64;
    let (h, m, s) = (total / 3600, total / 60 % 60, total % 60);
    match (h, m) {
        (0, 0) => format!("{s}s"),
        (0, _) => format!("{m}m {s:02}s"),
        _ => format!("{h}h {m:02}m {s:02}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eta_uses_hours_minutes_seconds() {
        assert_eq!(format_eta(7.0), "7s");
        assert_eq!(format_eta(245.0), "4m 05s");
        assert_eq!(format_eta(3723.4), "1h 02m 03s");
        assert_eq!(format_eta(3600.0), "1h 00m 00s");
        assert_eq!(format_eta(59.6), "1m 00s");
    }

    #[test]
    fn eta_degenerate_inputs_are_zero() {
        assert_eq!(format_eta(0.0), "0s");
        assert_eq!(format_eta(-5.0), "0s");
        assert_eq!(format_eta(f64::NAN), "0s");
    }
}
