// crates/urbanpulse-core/src/lib.rs

//! # urbanpulse-core
//!
//! Analytical core of a world-cities dashboard: load and normalize the
//! cities table, filter it by country and population, project population
//! growth, and compare two cities by distance and local time.
//!
//! ```no_run
//! use urbanpulse_core::prelude::*;
//!
//! let outcome = load_or_empty(&LoaderConfig::default());
//! if let Some(error) = &outcome.error {
//!     eprintln!("data unavailable: {error}");
//! }
//!
//! let mut dashboard = Dashboard::new(outcome.dataset);
//! let view = dashboard.apply(&DashboardConfig::default(), 2025).unwrap();
//! println!("{} cities", view.len());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregate;
pub mod compare;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod geo;
pub mod loader;
pub mod model;
pub mod projection;
pub mod text;
pub mod traits;
pub mod view;

// Re-exports
pub use crate::compare::{compare, Arena, Comparison, LocalTime, Side, ZoneResolution};
pub use crate::config::{DashboardConfig, MapStyle, ProjectionConfig};
pub use crate::dashboard::Dashboard;
pub use crate::error::{Error, LoadError, Result};
pub use crate::filter::{filter, CityFilter, FilteredView};
pub use crate::geo::distance_km;
pub use crate::loader::{load, load_or_empty, DataSource, LoadOutcome, LoaderConfig};
pub use crate::model::{CityRecord, Dataset};
pub use crate::projection::{project, GrowthModel};
pub use crate::traits::CityQuery;
pub use crate::view::ViewState;

pub mod prelude {
    pub use crate::aggregate::{country_totals, treemap, Metrics};
    pub use crate::{
        compare, distance_km, load_or_empty, Arena, CityFilter, CityQuery, CityRecord, Comparison,
        Dashboard, DashboardConfig, DataSource, Dataset, FilteredView, GrowthModel, LoaderConfig,
        MapStyle, ProjectionConfig, Result, ViewState,
    };
}
