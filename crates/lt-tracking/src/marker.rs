//! State of the single mobile marker.

use lt_core::{GeoPoint, bearing};
use lt_services::MarkerPose;

/// The marker's position, the position before it, and the heading between
/// them.
///
/// Owned by the trip animator for the lifetime of one trip.
/// `previous_position` is a one-slot history: every move overwrites it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobileMarkerState {
    pub position:          GeoPoint,
    pub previous_position: GeoPoint,
    /// `bearing(previous_position, position)`, degrees in `[0, 360)`.
    pub heading_degrees:   f64,
}

impl MobileMarkerState {
    /// A marker standing at `point`, facing north (self-to-self bearing).
    pub fn at(point: GeoPoint) -> Self {
        Self {
            position:          point,
            previous_position: point,
            heading_degrees:   bearing(point, point),
        }
    }

    /// Move to `to`.  Returns `false` and leaves the state untouched if the
    /// marker is already there.
    pub fn advance(&mut self, to: GeoPoint) -> bool {
        if to == self.position {
            return false;
        }
        self.previous_position = self.position;
        self.position = to;
        self.heading_degrees = bearing(self.previous_position, self.position);
        true
    }

    #[inline]
    pub fn pose(&self) -> MarkerPose {
        MarkerPose {
            position:        self.position,
            heading_degrees: self.heading_degrees,
        }
    }
}
