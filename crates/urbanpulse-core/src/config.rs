// crates/urbanpulse-core/src/config.rs
use crate::filter::CityFilter;
use crate::projection::DEFAULT_ANNUAL_RATE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Lower bound of the population slider on first render; cities below this
/// are mostly noise on a world map.
pub const DEFAULT_MIN_POPULATION: u64 = 100_000;

/// Which layer the map draws. Only the rendering layer looks at this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapStyle {
    #[default]
    Columns,
    Heatmap,
    Scatter,
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MapStyle::Columns => "3D Columns",
            MapStyle::Heatmap => "Heatmap",
            MapStyle::Scatter => "Scatter",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub target_year: i32,
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,
}

impl ProjectionConfig {
    pub fn new(target_year: i32) -> Self {
        Self {
            target_year,
            annual_rate: DEFAULT_ANNUAL_RATE,
        }
    }
}

fn default_annual_rate() -> f64 {
    DEFAULT_ANNUAL_RATE
}

/// Everything a user can change on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub min_population: u64,
    /// `None` means "up to the largest city".
    pub max_population: Option<u64>,
    pub countries: BTreeSet<String>,
    pub map_style: MapStyle,
    /// `None` disables the time machine.
    pub projection: Option<ProjectionConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            min_population: DEFAULT_MIN_POPULATION,
            max_population: None,
            countries: BTreeSet::new(),
            map_style: MapStyle::default(),
            projection: None,
        }
    }
}

impl DashboardConfig {
    /// The filter this configuration describes. `dataset_max` fills in an
    /// open upper bound.
    pub fn filter(&self, dataset_max: u64) -> CityFilter {
        CityFilter {
            min_population: self.min_population,
            max_population: self.max_population.unwrap_or(dataset_max),
            countries: self.countries.clone(),
        }
    }
}
