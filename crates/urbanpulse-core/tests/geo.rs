use urbanpulse_core::geo::{distance_between, distance_km, EARTH_RADIUS_KM};

const POINTS: [(f64, f64); 7] = [
    (0.0, 0.0),
    (35.6895, 139.69171),
    (-23.5475, -46.63611),
    (90.0, 0.0),
    (-90.0, 180.0),
    (51.5074, -0.1278),
    (-33.8688, 151.2093),
];

#[test]
fn identical_points_are_zero_apart() {
    for &(lat, lon) in &POINTS {
        assert_eq!(distance_km(lat, lon, lat, lon), 0.0);
    }
}

#[test]
fn distance_is_symmetric() {
    for &a in &POINTS {
        for &b in &POINTS {
            let ab = distance_between(a, b);
            let ba = distance_between(b, a);
            assert!((ab - ba).abs() < 1e-6, "{a:?} <-> {b:?}: {ab} vs {ba}");
            assert!(ab >= 0.0);
        }
    }
}

#[test]
fn half_circumference_along_the_equator() {
    let d = distance_km(0.0, 0.0, 0.0, 180.0);
    assert!((d - 20015.09).abs() < 0.01, "got {d}");
    assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
}

#[test]
fn antipodes_do_not_produce_nan() {
    let d = distance_km(45.0, 45.0, -45.0, -135.0);
    assert!(d.is_finite());
    assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-3);
}

#[test]
fn london_to_paris_is_about_344_km() {
    let d = distance_km(51.5074, -0.1278, 48.8566, 2.3522);
    assert!((d - 343.5).abs() < 1.0, "got {d}");
}
