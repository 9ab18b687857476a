//! Reverse-geocoding contract.

use lt_core::GeoPoint;

use crate::ServiceResult;

/// One candidate address for a coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placemark {
    /// Display name (street address or point of interest).
    pub name:     Option<String>,
    pub locality: Option<String>,
    pub country:  Option<String>,
}

impl Placemark {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }
}

/// Turns coordinates into placemarks.
pub trait Geocoder: Send + Sync {
    /// Candidates for `point`, best first.  An empty `Vec` means nothing is
    /// known about the location.
    fn reverse_geocode(&self, point: GeoPoint) -> ServiceResult<Vec<Placemark>>;
}

impl<G: Geocoder + ?Sized> Geocoder for std::sync::Arc<G> {
    fn reverse_geocode(&self, point: GeoPoint) -> ServiceResult<Vec<Placemark>> {
        (**self).reverse_geocode(point)
    }
}
