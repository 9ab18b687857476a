//! Map rendering surface contract.

use std::time::Duration;

use lt_core::GeoPoint;

use crate::CircularRegion;

/// Where the mobile marker sits and which way it points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerPose {
    pub position: GeoPoint,
    /// Degrees clockwise from north, `[0, 360)`.
    pub heading_degrees: f64,
}

impl MarkerPose {
    /// Heading in radians, the unit view transforms rotate by.
    #[inline]
    pub fn rotation_radians(&self) -> f64 {
        self.heading_degrees.to_radians()
    }
}

/// Axis-aligned latitude/longitude rectangle used for camera fitting.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapRegion {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl MapRegion {
    /// Smallest region enclosing every point, or `None` for an empty slice.
    ///
    /// Does not handle polylines that cross the antimeridian.
    pub fn enclosing(points: &[GeoPoint]) -> Option<MapRegion> {
        let first = *points.first()?;
        let (mut sw, mut ne) = (first, first);
        for p in &points[1..] {
            sw.latitude  = sw.latitude.min(p.latitude);
            sw.longitude = sw.longitude.min(p.longitude);
            ne.latitude  = ne.latitude.max(p.latitude);
            ne.longitude = ne.longitude.max(p.longitude);
        }
        Some(MapRegion { south_west: sw, north_east: ne })
    }

    pub fn center(&self) -> GeoPoint {
        self.south_west.lerp(self.north_east, 0.5)
    }

    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.south_west.latitude..=self.north_east.latitude).contains(&p.latitude)
            && (self.south_west.longitude..=self.north_east.longitude).contains(&p.longitude)
    }
}

/// Commands the tracker sends to whatever draws the map.
///
/// The surface shows at most one mobile marker and one route overlay.  All
/// methods default to no-ops so test doubles only override what they assert
/// on.
pub trait MapSurface: Send {
    /// Show the marker at `pose` without animation.
    fn add_marker(&mut self, _pose: MarkerPose) {}

    /// Slide the marker to `pose.position` over `move_duration` and turn it
    /// to `pose.heading_degrees` over `rotate_duration`, both linearly.
    fn animate_marker(
        &mut self,
        _pose:            MarkerPose,
        _move_duration:   Duration,
        _rotate_duration: Duration,
    ) {}

    /// Remove the marker.
    fn remove_marker(&mut self) {}

    /// Replace any existing route overlay with `polyline`.
    fn show_route(&mut self, _polyline: &[GeoPoint]) {}

    /// Remove every overlay (route and regions).
    fn clear_overlays(&mut self) {}

    /// Draw a circle for a monitored region.
    fn show_region(&mut self, _region: &CircularRegion) {}

    /// Move the camera so `region` is visible with `edge_padding` points of
    /// margin.
    fn fit_region(&mut self, _region: MapRegion, _edge_padding: f64) {}
}

/// A [`MapSurface`] that draws nothing.
pub struct NoopMap;

impl MapSurface for NoopMap {}

impl<M: MapSurface + ?Sized> MapSurface for Box<M> {
    fn add_marker(&mut self, pose: MarkerPose) {
        (**self).add_marker(pose)
    }

    fn animate_marker(&mut self, pose: MarkerPose, move_duration: Duration, rotate_duration: Duration) {
        (**self).animate_marker(pose, move_duration, rotate_duration)
    }

    fn remove_marker(&mut self) {
        (**self).remove_marker()
    }

    fn show_route(&mut self, polyline: &[GeoPoint]) {
        (**self).show_route(polyline)
    }

    fn clear_overlays(&mut self) {
        (**self).clear_overlays()
    }

    fn show_region(&mut self, region: &CircularRegion) {
        (**self).show_region(region)
    }

    fn fit_region(&mut self, region: MapRegion, edge_padding: f64) {
        (**self).fit_region(region, edge_padding)
    }
}
