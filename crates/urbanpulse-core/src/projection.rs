// crates/urbanpulse-core/src/projection.rs

//! Compound-growth population projection.
//!
//! Projection is a pure function of the baseline: projecting to 2030 twice
//! gives the same numbers as projecting once, and projecting back to the
//! current year gives the baseline again. Results are rounded half-to-even.

use crate::error::{Error, Result};
use crate::model::{CityRecord, Dataset};

/// 1.1% per year, a simplified global average.
pub const DEFAULT_ANNUAL_RATE: f64 = 1.011;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthModel {
    annual_rate: f64,
}

impl GrowthModel {
    /// `annual_rate` is a multiplier (1.011 = +1.1% per year) and must be a
    /// positive finite number.
    pub fn new(annual_rate: f64) -> Result<Self> {
        if !annual_rate.is_finite() || annual_rate <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "annual growth rate must be positive and finite, got {annual_rate}"
            )));
        }
        Ok(Self { annual_rate })
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// `round(population × rate^(target − current))`.
    ///
    /// A target year before the current year decays the population; extreme
    /// horizons saturate at `u64::MAX`.
    pub fn project_population(&self, population: u64, current_year: i32, target_year: i32) -> u64 {
        let years = target_year - current_year;
        if years == 0 {
            return population;
        }
        let projected = population as f64 * self.annual_rate.powi(years);
        // `as` saturates, so absurd horizons clamp instead of wrapping.
        projected.round_ties_even() as u64
    }

    /// Projects every record of `baseline` into a new dataset.
    ///
    /// The baseline is untouched. Order is preserved because the projection is
    /// monotonic in population.
    pub fn project(&self, baseline: &Dataset, current_year: i32, target_year: i32) -> Dataset {
        let records = baseline
            .iter()
            .map(|record| CityRecord {
                population: self.project_population(record.population, current_year, target_year),
                ..record.clone()
            })
            .collect();
        Dataset::from_records(records)
    }
}

impl Default for GrowthModel {
    fn default() -> Self {
        Self {
            annual_rate: DEFAULT_ANNUAL_RATE,
        }
    }
}

/// Convenience wrapper over [`GrowthModel::project`].
pub fn project(
    baseline: &Dataset,
    current_year: i32,
    target_year: i32,
    annual_rate: f64,
) -> Result<Dataset> {
    Ok(GrowthModel::new(annual_rate)?.project(baseline, current_year, target_year))
}
