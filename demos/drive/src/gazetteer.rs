//! Offline reverse geocoder backed by a CSV list of named places.

use std::io::Read;

use serde::Deserialize;

use lt_core::GeoPoint;
use lt_services::{Geocoder, Placemark, ServiceResult};

/// Places around San Francisco used by the drive.
pub const PLACES_CSV: &str = "\
name,locality,country,latitude,longitude\n\
Civic Center,San Francisco,United States,37.7793,-122.4193\n\
Mission Dolores Park,San Francisco,United States,37.7596,-122.4269\n\
Castro Theatre,San Francisco,United States,37.7620,-122.4348\n\
Twin Peaks,San Francisco,United States,37.7544,-122.4477\n\
Glen Canyon Park,San Francisco,United States,37.7394,-122.4405\n\
Mount Davidson,San Francisco,United States,37.7383,-122.4536\n\
Stonestown Galleria,San Francisco,United States,37.7282,-122.4776\n\
";

#[derive(Debug, Deserialize)]
struct PlaceRow {
    name:      String,
    locality:  String,
    country:   String,
    latitude:  f64,
    longitude: f64,
}

/// Answers with the nearest place within `max_distance_m`, or nothing.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    places:         Vec<(GeoPoint, Placemark)>,
    max_distance_m: f64,
}

impl Gazetteer {
    /// Load places from CSV with a `name,locality,country,latitude,longitude`
    /// header.
    pub fn from_reader<R: Read>(reader: R, max_distance_m: f64) -> csv::Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let places = rdr
            .deserialize::<PlaceRow>()
            .map(|row| {
                row.map(|r| {
                    let placemark = Placemark {
                        name:     Some(r.name),
                        locality: Some(r.locality),
                        country:  Some(r.country),
                    };
                    (GeoPoint::new(r.latitude, r.longitude), placemark)
                })
            })
            .collect::<csv::Result<Vec<_>>>()?;
        Ok(Self { places, max_distance_m })
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }
}

impl Geocoder for Gazetteer {
    fn reverse_geocode(&self, point: GeoPoint) -> ServiceResult<Vec<Placemark>> {
        let nearest = self
            .places
            .iter()
            .map(|(at, place)| (at.distance_m(point), place))
            .filter(|(d, _)| *d <= self.max_distance_m)
            .min_by(|a, b| a.0.total_cmp(&b.0));
        Ok(nearest.map(|(_, place)| place.clone()).into_iter().collect())
    }
}
