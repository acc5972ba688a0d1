// crates/urbanpulse-core/src/geo.rs

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in degrees
/// (haversine formula).
///
/// `a` is clamped to `[0, 1]` before `sqrt`/`asin`: for near-antipodal
/// points rounding can push it just above 1.
///
/// ```rust
/// use urbanpulse_core::geo::distance_km;
///
/// let half_circumference = distance_km(0.0, 0.0, 0.0, 180.0);
/// assert!((half_circumference - 20015.09).abs() < 0.01);
/// ```
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// [`distance_km`] between two `(lat, lon)` pairs.
pub fn distance_between(a: (f64, f64), b: (f64, f64)) -> f64 {
    distance_km(a.0, a.1, b.0, b.1)
}
