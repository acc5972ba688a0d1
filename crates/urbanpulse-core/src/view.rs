// crates/urbanpulse-core/src/view.rs
use crate::model::CityRecord;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 15.0;
/// World overview.
pub const INITIAL_ZOOM: f64 = 2.0;
/// Street-level enough to recognize a city.
pub const CITY_ZOOM: f64 = 10.0;

/// Map camera. Passed into and returned from interactions instead of living
/// in ambient session state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub lat: f64,
    pub lon: f64,
    pub zoom: f64,
}

impl ViewState {
    /// `zoom` is clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`].
    pub fn new(lat: f64, lon: f64, zoom: f64) -> Self {
        Self {
            lat,
            lon,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Centered on the mean position of `view`.
    pub fn initial(view: &[CityRecord]) -> Option<Self> {
        if view.is_empty() {
            return None;
        }
        let n = view.len() as f64;
        let lat = view.iter().map(|r| r.lat).sum::<f64>() / n;
        let lon = view.iter().map(|r| r.lon).sum::<f64>() / n;
        Some(Self::new(lat, lon, INITIAL_ZOOM))
    }

    /// "Surprise me": zooms onto a random city of `view`.
    ///
    /// Returns the chosen city with the new camera, `None` when the view is
    /// empty (the camera stays where it was).
    pub fn fly_to_random<'a, R: Rng + ?Sized>(
        view: &'a [CityRecord],
        rng: &mut R,
    ) -> Option<(&'a CityRecord, Self)> {
        let city = view.choose(rng)?;
        Some((city, Self::fly_to(city)))
    }

    pub fn fly_to(city: &CityRecord) -> Self {
        Self::new(city.lat, city.lon, CITY_ZOOM)
    }
}
