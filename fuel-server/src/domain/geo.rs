//! Coordinates and great-circle distance.

/// Mean Earth radius used for all distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine distance to `other`, in kilometres.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Great-circle distance between two points using the haversine formula.
///
/// Inputs are decimal degrees, output is kilometres. The result is part of
/// the API payload, so the formula must not change.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const SANTIAGO: (f64, f64) = (-33.4489, -70.6693);
    const VALPARAISO: (f64, f64) = (-33.0472, -71.6127);

    #[test]
    fn zero_for_identical_points() {
        assert_eq!(haversine_km(-33.7335, -70.7422, -33.7335, -70.7422), 0.0);
    }

    #[test]
    fn santiago_to_valparaiso() {
        let d = haversine_km(SANTIAGO.0, SANTIAGO.1, VALPARAISO.0, VALPARAISO.1);
        assert!((d - 98.445).abs() < 0.01, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = haversine_km(0.0, 0.0, 1.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((d - expected).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn antipodal_points() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((d - expected).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn coordinates_distance_matches_function() {
        let a = Coordinates::new(SANTIAGO.0, SANTIAGO.1);
        let b = Coordinates::new(VALPARAISO.0, VALPARAISO.1);
        assert_eq!(
            a.distance_km(&b),
            haversine_km(SANTIAGO.0, SANTIAGO.1, VALPARAISO.0, VALPARAISO.1)
        );
    }
}
