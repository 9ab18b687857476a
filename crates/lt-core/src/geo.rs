//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude in degrees, the precision location
//! services report fixes in.  No range validation is performed; callers pass
//! through whatever the location collaborator delivered.

use crate::heading::bearing;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
///
/// `Default` is `(0, 0)`, the value a location service reports before its
/// first fix.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Initial great-circle bearing from `self` to `other`, degrees in `[0, 360)`.
    #[inline]
    pub fn bearing_to(self, other: GeoPoint) -> f64 {
        bearing(self, other)
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// `true` if `self` lies within `radius_m` metres of `center`.
    #[inline]
    pub fn within_radius(self, center: GeoPoint, radius_m: f64) -> bool {
        self.distance_m(center) <= radius_m
    }

    /// Project `distance_m` metres forward along `heading` degrees
    /// (0 = north).  Longitude is normalised to `[-180, 180)`.
    pub fn project(self, heading: f64, distance_m: f64) -> GeoPoint {
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let brng = heading.to_radians();
        let angular = distance_m / EARTH_RADIUS_M;

        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * brng.cos()).asin();
        let lon2 = lon1
            + (brng.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        let lon = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
        GeoPoint::new(lat2.to_degrees(), lon)
    }

    /// Point a fraction `t` of the way from `self` to `other`, interpolated
    /// linearly in degree space.  `t` outside `[0, 1]` clamps to the exact
    /// endpoint.  Adequate for the short legs a polyline is built from; not a
    /// great-circle interpolation.
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        GeoPoint::new(
            self.latitude + (other.latitude - self.latitude) * t,
            self.longitude + (other.longitude - self.longitude) * t,
        )
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
