use crate::models::Coordinates;
use std::collections::HashMap;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance reported when either location name is missing from the index.
/// Unmapped locations are treated as "far" rather than failing the lookup.
pub const UNKNOWN_DISTANCE_KM: f64 = 500.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Location-name to coordinate index.
///
/// Products and buyers carry location names, not coordinates; the index
/// resolves known names and reports [`UNKNOWN_DISTANCE_KM`] for anything it
/// has never heard of. The table is injected at construction so scoring can
/// run against arbitrary geographies.
#[derive(Debug, Clone)]
pub struct GeoIndex {
    locations: HashMap<String, Coordinates>,
}

impl GeoIndex {
    pub fn new(locations: HashMap<String, Coordinates>) -> Self {
        Self { locations }
    }

    /// Coordinates for a known location name
    pub fn coordinates(&self, name: &str) -> Option<Coordinates> {
        self.locations.get(name).copied()
    }

    /// Great-circle distance in kilometers between two named locations.
    ///
    /// Returns [`UNKNOWN_DISTANCE_KM`] if either name is not in the index.
    /// Always returns a finite number.
    pub fn distance_km(&self, from: &str, to: &str) -> f64 {
        match (self.coordinates(from), self.coordinates(to)) {
            (Some(a), Some(b)) => haversine_distance(a.lat, a.lon, b.lat, b.lon),
            _ => UNKNOWN_DISTANCE_KM,
        }
    }
}

impl Default for GeoIndex {
    /// Index of the cities the platform currently serves
    fn default() -> Self {
        let locations = HashMap::from([
            ("Paris".to_string(), Coordinates { lat: 48.8566, lon: 2.3522 }),
            ("Lyon".to_string(), Coordinates { lat: 45.7578, lon: 4.8320 }),
            ("Marseille".to_string(), Coordinates { lat: 43.2965, lon: 5.3698 }),
            ("Bordeaux".to_string(), Coordinates { lat: 44.8378, lon: -0.5792 }),
            ("Lille".to_string(), Coordinates { lat: 50.6292, lon: 3.0573 }),
        ]);

        Self { locations }
    }
}
