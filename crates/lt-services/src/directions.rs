//! Directions contract and a default straight-line implementation.
//!
//! # Pluggability
//!
//! The tracker calls routing via the [`DirectionsService`] trait, so an app
//! can plug in a platform directions API or a road-graph router without
//! touching the animator.  [`StraightLineDirections`] needs no network and is
//! what tests and the demo use.

use lt_core::{GeoPoint, TransportMode};

use crate::{MapRegion, ServiceError, ServiceResult};

// ── RouteRequest ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    pub origin:      GeoPoint,
    pub destination: GeoPoint,
    pub mode:        TransportMode,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A drawable route and its travel-time estimate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Vertices from origin to destination.
    pub polyline: Vec<GeoPoint>,
    /// Estimated travel time in seconds.
    pub expected_travel_secs: f64,
}

impl Route {
    /// Sum of great-circle leg lengths in metres.
    pub fn distance_m(&self) -> f64 {
        self.polyline
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .sum()
    }

    /// `true` if origin and destination coincide.
    pub fn is_trivial(&self) -> bool {
        self.polyline.len() < 2
    }

    /// Camera region enclosing the whole polyline.
    pub fn bounds(&self) -> Option<MapRegion> {
        MapRegion::enclosing(&self.polyline)
    }
}

// ── DirectionsService trait ───────────────────────────────────────────────────

/// Pluggable directions engine.
///
/// `calculate` may block (a network round trip); the runtime calls it off the
/// tick task.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one instance can serve requests
/// from concurrent blocking tasks.
pub trait DirectionsService: Send + Sync {
    /// Compute a route for `request`.
    ///
    /// Returns [`ServiceError::NoRoute`] when no path exists and
    /// [`ServiceError::Unavailable`] for transport failures.  `origin ==
    /// destination` is a trivial route, not an error.
    fn calculate(&self, request: &RouteRequest) -> ServiceResult<Route>;
}

impl<D: DirectionsService + ?Sized> DirectionsService for std::sync::Arc<D> {
    fn calculate(&self, request: &RouteRequest) -> ServiceResult<Route> {
        (**self).calculate(request)
    }
}

// ── StraightLineDirections ────────────────────────────────────────────────────

/// Routes along the straight line between origin and destination.
///
/// The polyline has a vertex every `segment_m` metres; travel time is the
/// great-circle distance divided by the mode's average speed:
///
/// | Mode       | Speed     |
/// |------------|-----------|
/// | Automobile | 13.9 m/s  |
/// | Walking    | 1.4 m/s   |
/// | Transit    | 8.3 m/s   |
///
/// `max_distance_m` stands in for "no road connects these points": longer
/// requests fail with [`ServiceError::NoRoute`].
#[derive(Debug, Clone)]
pub struct StraightLineDirections {
    pub segment_m:      f64,
    pub max_distance_m: f64,
}

impl Default for StraightLineDirections {
    fn default() -> Self {
        Self {
            segment_m:      250.0,
            max_distance_m: 500_000.0,
        }
    }
}

impl DirectionsService for StraightLineDirections {
    fn calculate(&self, request: &RouteRequest) -> ServiceResult<Route> {
        let RouteRequest { origin, destination, mode } = *request;
        if origin == destination {
            return Ok(Route { polyline: vec![origin], expected_travel_secs: 0.0 });
        }

        let distance = origin.distance_m(destination);
        if distance > self.max_distance_m {
            return Err(ServiceError::NoRoute { from: origin, to: destination });
        }

        let segments = (distance / self.segment_m.max(1.0)).ceil().max(1.0) as usize;
        let polyline = (0..=segments)
            .map(|i| origin.lerp(destination, i as f64 / segments as f64))
            .collect();

        Ok(Route {
            polyline,
            expected_travel_secs: distance / mode.average_speed_mps(),
        })
    }
}
