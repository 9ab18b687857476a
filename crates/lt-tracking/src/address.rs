//! The address shown under the map's center pin.

use lt_core::GeoPoint;
use lt_services::Geocoder;

use crate::GeocodeAdapter;

/// Tracks the label under the pin and whether a trip may start from it.
///
/// While the camera moves the label is blank and starting is disabled.  When
/// it settles the center is reverse-geocoded; a known name becomes the label
/// and the center becomes the candidate destination.
pub struct AddressPicker<G: Geocoder> {
    adapter:     GeocodeAdapter<G>,
    label:       String,
    destination: Option<GeoPoint>,
}

impl<G: Geocoder> AddressPicker<G> {
    pub fn new(geocoder: G) -> Self {
        Self {
            adapter:     GeocodeAdapter::new(geocoder),
            label:       String::new(),
            destination: None,
        }
    }

    /// The camera started moving.
    pub fn camera_will_move(&mut self) {
        self.label.clear();
        self.destination = None;
    }

    /// The camera settled on `center`.  Returns the new label, if any.
    pub fn camera_did_move(&mut self, center: GeoPoint) -> Option<&str> {
        let mut resolved = None;
        self.adapter.reverse_geocode(center, |name| resolved = name);

        match resolved {
            Some(name) => {
                self.label = name;
                self.destination = Some(center);
                Some(self.label.as_str())
            }
            None => {
                self.label.clear();
                self.destination = None;
                None
            }
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// `true` once a named location is under the pin.
    pub fn can_start_trip(&self) -> bool {
        self.destination.is_some()
    }

    /// Where a trip started now would head.
    pub fn destination(&self) -> Option<GeoPoint> {
        self.destination
    }
}
