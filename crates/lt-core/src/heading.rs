//! Bearing calculation and compass labels.
//!
//! Headings are degrees clockwise from true north in the half-open range
//! `[0, 360)`.

use crate::GeoPoint;

/// Initial great-circle bearing from `from` to `to`.
///
/// Returns degrees in `[0, 360)`.  When `from == to` both atan2 arguments are
/// zero and the result is exactly `0.0`; trip start relies on this to give the
/// marker a neutral north-facing orientation.
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    normalize(y.atan2(x).to_degrees())
}

/// Fold any angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize(degrees: f64) -> f64 {
    let d = (degrees + 360.0).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if d >= 360.0 { 0.0 } else { d }
}

/// An 8-point compass rose, used for human-readable log lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    pub fn as_str(self) -> &'static str {
        match self {
            CompassPoint::N  => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E  => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S  => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W  => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a heading to an 8-point compass direction.
///
/// Each point covers 45° centred on its nominal direction.  Returns the label
/// together with the normalised heading.
pub fn heading_to_compass_8point(heading: f64) -> (CompassPoint, f64) {
    let normalized = normalize(heading);
    let point = match normalized {
        h if h < 22.5  => CompassPoint::N,
        h if h < 67.5  => CompassPoint::NE,
        h if h < 112.5 => CompassPoint::E,
        h if h < 157.5 => CompassPoint::SE,
        h if h < 202.5 => CompassPoint::S,
        h if h < 247.5 => CompassPoint::SW,
        h if h < 292.5 => CompassPoint::W,
        h if h < 337.5 => CompassPoint::NW,
        _              => CompassPoint::N,
    };
    (point, normalized)
}
