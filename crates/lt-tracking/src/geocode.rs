//! Reverse geocoding behind a "name or unknown" contract.

use log::debug;

use lt_core::GeoPoint;
use lt_services::Geocoder;

/// Wraps a [`Geocoder`] so callers only ever see a place name or `None`.
///
/// Collaborator errors, empty result lists, and placemarks without a usable
/// name all collapse to `None`.  Callers must treat `None` as "unknown", not
/// as a failure they can react to.
pub struct GeocodeAdapter<G: Geocoder> {
    geocoder: G,
}

impl<G: Geocoder> GeocodeAdapter<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Name of the best placemark for `point`.
    pub fn name_for(&self, point: GeoPoint) -> Option<String> {
        match self.geocoder.reverse_geocode(point) {
            Ok(placemarks) => placemarks
                .into_iter()
                .next()
                .and_then(|p| p.name)
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            Err(e) => {
                debug!("geocode {point}: {e}");
                None
            }
        }
    }

    /// Look up `point` and hand the result to `callback`.
    ///
    /// The callback is always invoked exactly once, on the calling thread.
    pub fn reverse_geocode<F>(&self, point: GeoPoint, callback: F)
    where
        F: FnOnce(Option<String>),
    {
        callback(self.name_for(point))
    }
}
