//! Effects — what the trip animator asks its collaborators to do.

use std::fmt;
use std::time::Duration;

use lt_core::GeoPoint;
use lt_services::{MapRegion, MapSurface, MarkerPose, RouteRequest};

/// Identifies one route request.
///
/// `trip` changes every time tracking starts; `seq` increases with every
/// request within a trip.  A completion is applied only if its ticket belongs
/// to the current trip and is newer than the last one applied.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RouteTicket {
    pub trip: u32,
    pub seq:  u64,
}

impl fmt::Display for RouteTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}.{}", self.trip, self.seq)
    }
}

/// One side effect requested by the animator.
///
/// Returned in the order they should be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum TripEffect {
    /// Put the marker on the map, unanimated.
    PlaceMarker(MarkerPose),

    /// Animate the marker to `pose`.
    MoveMarker {
        pose:            MarkerPose,
        move_duration:   Duration,
        rotate_duration: Duration,
    },

    /// Take the marker off the map.
    RemoveMarker,

    /// Ask the directions collaborator for a route; report the outcome with
    /// the same `ticket`.
    RequestRoute {
        ticket:  RouteTicket,
        request: RouteRequest,
    },

    /// Replace the route overlay.  `fit` is set for the first route of a trip
    /// so the camera frames it.
    ShowRoute {
        polyline: Vec<GeoPoint>,
        fit:      Option<MapRegion>,
    },

    /// Remove the route overlay.
    ClearRoute,
}

impl TripEffect {
    /// Apply a map effect to `map`.
    ///
    /// Returns `false` for [`TripEffect::RequestRoute`], which is not a map
    /// concern and is left to the caller.
    pub fn apply_to_map<M: MapSurface + ?Sized>(&self, map: &mut M, edge_padding: f64) -> bool {
        match self {
            TripEffect::PlaceMarker(pose) => map.add_marker(*pose),
            TripEffect::MoveMarker { pose, move_duration, rotate_duration } => {
                map.animate_marker(*pose, *move_duration, *rotate_duration)
            }
            TripEffect::RemoveMarker => map.remove_marker(),
            TripEffect::RequestRoute { .. } => return false,
            TripEffect::ShowRoute { polyline, fit } => {
                map.show_route(polyline);
                if let Some(region) = fit {
                    map.fit_region(*region, edge_padding);
                }
            }
            TripEffect::ClearRoute => map.clear_overlays(),
        }
        true
    }

    #[inline]
    pub fn is_route_request(&self) -> bool {
        matches!(self, TripEffect::RequestRoute { .. })
    }
}
