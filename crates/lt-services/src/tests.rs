//! Unit tests for lt-services.

use lt_core::{GeoPoint, TransportMode};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sf() -> GeoPoint {
    GeoPoint::new(37.7749, -122.4194)
}

// ── Directions ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod directions {
    use super::*;
    use crate::{DirectionsService, RouteRequest, ServiceError, StraightLineDirections};

    fn request(origin: GeoPoint, destination: GeoPoint) -> RouteRequest {
        RouteRequest { origin, destination, mode: TransportMode::Automobile }
    }

    #[test]
    fn same_point_is_trivial_route() {
        let route = StraightLineDirections::default()
            .calculate(&request(sf(), sf()))
            .unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.expected_travel_secs, 0.0);
        assert_eq!(route.polyline, vec![sf()]);
    }

    #[test]
    fn polyline_spans_origin_to_destination() {
        let dest = sf().project(90.0, 1_100.0);
        let route = StraightLineDirections::default()
            .calculate(&request(sf(), dest))
            .unwrap();

        assert_eq!(route.polyline.first(), Some(&sf()));
        assert_eq!(route.polyline.last(), Some(&dest));
        // 1100 m / 250 m segments → 5 legs, 6 vertices.
        assert_eq!(route.polyline.len(), 6);
        assert!((route.distance_m() - 1_100.0).abs() < 5.0, "got {}", route.distance_m());
        assert!((route.expected_travel_secs - 1_100.0 / 13.9).abs() < 1.0);
    }

    #[test]
    fn walking_takes_longer() {
        let dest = sf().project(0.0, 2_000.0);
        let svc = StraightLineDirections::default();
        let car = svc.calculate(&request(sf(), dest)).unwrap();
        let walk = svc
            .calculate(&RouteRequest { mode: TransportMode::Walking, ..request(sf(), dest) })
            .unwrap();
        assert!(walk.expected_travel_secs > car.expected_travel_secs * 5.0);
    }

    #[test]
    fn too_far_is_no_route() {
        let svc = StraightLineDirections { max_distance_m: 100.0, ..Default::default() };
        let dest = sf().project(0.0, 1_000.0);
        let err = svc.calculate(&request(sf(), dest)).unwrap_err();
        assert_eq!(err, ServiceError::NoRoute { from: sf(), to: dest });
        assert!(err.to_string().starts_with("no route from"));
    }

    #[test]
    fn bounds_enclose_polyline() {
        let dest = GeoPoint::new(37.73471755, -122.45290792);
        let route = StraightLineDirections::default()
            .calculate(&request(sf(), dest))
            .unwrap();
        let bounds = route.bounds().unwrap();
        assert!(bounds.contains(sf()));
        assert!(bounds.contains(dest));
        assert!(bounds.contains(bounds.center()));
    }
}

// ── Map ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod map {
    use super::*;
    use crate::{MapRegion, MarkerPose};

    #[test]
    fn empty_region_is_none() {
        assert!(MapRegion::enclosing(&[]).is_none());
    }

    #[test]
    fn enclosing_and_center() {
        let r = MapRegion::enclosing(&[
            GeoPoint::new(1.0, 5.0),
            GeoPoint::new(-1.0, 3.0),
            GeoPoint::new(0.0, 4.0),
        ])
        .unwrap();
        assert_eq!(r.south_west, GeoPoint::new(-1.0, 3.0));
        assert_eq!(r.north_east, GeoPoint::new(1.0, 5.0));
        assert_eq!(r.center(), GeoPoint::new(0.0, 4.0));
        assert!(!r.contains(GeoPoint::new(2.0, 4.0)));
    }

    #[test]
    fn pose_rotation_in_radians() {
        let pose = MarkerPose { position: sf(), heading_degrees: 180.0 };
        assert!((pose.rotation_radians() - std::f64::consts::PI).abs() < 1e-12);
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod location {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{AuthorizationStatus, LocationEvents, LocationEventsFanout};

    #[derive(Default)]
    struct Recorder {
        log: Mutex<Vec<String>>,
    }

    impl LocationEvents for Recorder {
        fn on_location_update(&self, point: GeoPoint) {
            self.log.lock().unwrap().push(format!("fix {point}"));
        }

        fn on_region_exit(&self, identifier: &str) {
            self.log.lock().unwrap().push(format!("exit {identifier}"));
        }
    }

    #[test]
    fn authorization_capabilities() {
        assert!(!AuthorizationStatus::NotDetermined.allows_updates());
        assert!(!AuthorizationStatus::Denied.allows_updates());
        assert!(AuthorizationStatus::AuthorizedWhenInUse.allows_updates());
        assert!(!AuthorizationStatus::AuthorizedWhenInUse.allows_region_monitoring());
        assert!(AuthorizationStatus::AuthorizedAlways.allows_region_monitoring());
        assert_eq!(AuthorizationStatus::default(), AuthorizationStatus::NotDetermined);
    }

    #[test]
    fn fanout_forwards_to_every_subscriber() {
        let a = Arc::new(Recorder::default());
        let b = Arc::new(Recorder::default());
        let fan = LocationEventsFanout::new().with(a.clone()).with(b.clone());
        assert_eq!(fan.len(), 2);

        fan.on_location_update(GeoPoint::new(1.0, 2.0));
        fan.on_region_exit("home");
        // Not overridden by Recorder → default no-op.
        fan.on_region_enter("home");

        let expected = vec!["fix (1.000000, 2.000000)".to_string(), "exit home".to_string()];
        assert_eq!(*a.log.lock().unwrap(), expected);
        assert_eq!(*b.log.lock().unwrap(), expected);
    }
}

// ── Geofence ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geofence {
    use super::*;
    use crate::{CircularRegion, GeofenceService, RegionEvent, ServiceError, SoftwareGeofence};

    fn both_ways(id: &str, center: GeoPoint) -> CircularRegion {
        CircularRegion {
            identifier:      id.to_string(),
            center,
            radius_m:        300.0,
            notify_on_entry: true,
            notify_on_exit:  true,
        }
    }

    #[test]
    fn first_fix_is_silent() {
        let fence = SoftwareGeofence::new();
        fence.start_monitoring(both_ways("a", sf())).unwrap();
        assert!(fence.observe(sf()).is_empty());
    }

    #[test]
    fn exit_then_enter() {
        let fence = SoftwareGeofence::new();
        fence.start_monitoring(both_ways("a", sf())).unwrap();
        let outside = sf().project(45.0, 500.0);

        assert!(fence.observe(sf()).is_empty());
        assert_eq!(fence.observe(outside), vec![RegionEvent::Exit("a".into())]);
        assert!(fence.observe(outside).is_empty());
        assert_eq!(fence.observe(sf()), vec![RegionEvent::Enter("a".into())]);
    }

    #[test]
    fn exit_only_region_ignores_entry() {
        let fence = SoftwareGeofence::new();
        fence
            .start_monitoring(CircularRegion::exit_only("driver", sf(), 300.0))
            .unwrap();
        let outside = sf().project(0.0, 1_000.0);

        fence.observe(outside);
        assert!(fence.observe(sf()).is_empty());
        assert_eq!(fence.observe(outside), vec![RegionEvent::Exit("driver".into())]);
    }

    #[test]
    fn events_sorted_by_identifier() {
        let fence = SoftwareGeofence::new();
        for id in ["c", "a", "b"] {
            fence.start_monitoring(both_ways(id, sf())).unwrap();
        }
        fence.observe(sf());
        let events = fence.observe(sf().project(0.0, 5_000.0));
        assert_eq!(
            events,
            vec![
                RegionEvent::Exit("a".into()),
                RegionEvent::Exit("b".into()),
                RegionEvent::Exit("c".into()),
            ]
        );
    }

    #[test]
    fn re_registering_replaces_and_resets() {
        let fence = SoftwareGeofence::new();
        fence.start_monitoring(both_ways("a", sf())).unwrap();
        fence.observe(sf());

        let elsewhere = sf().project(90.0, 2_000.0);
        fence.start_monitoring(both_ways("a", elsewhere)).unwrap();
        assert_eq!(fence.monitored_count(), 1);
        assert_eq!(fence.region("a").unwrap().center, elsewhere);
        // State reset: the next fix is silent even though it is outside.
        assert!(fence.observe(sf()).is_empty());
    }

    #[test]
    fn stop_monitoring_removes() {
        let fence = SoftwareGeofence::new();
        fence.start_monitoring(both_ways("a", sf())).unwrap();
        fence.stop_monitoring("a");
        fence.stop_monitoring("missing");
        assert_eq!(fence.monitored_count(), 0);
        assert!(fence.region("a").is_none());
    }

    #[test]
    fn capacity_limit() {
        let fence = SoftwareGeofence::with_capacity_limit(1);
        fence.start_monitoring(both_ways("a", sf())).unwrap();
        // Replacing an existing identifier does not count against the limit.
        fence.start_monitoring(both_ways("a", sf())).unwrap();
        let err = fence.start_monitoring(both_ways("b", sf())).unwrap_err();
        assert!(matches!(err, ServiceError::Geofence { identifier, .. } if identifier == "b"));
    }
}
