// crates/urbanpulse-core/src/dashboard.rs

//! Interaction handler tying the pieces together.
//!
//! The baseline dataset is never modified. Every [`Dashboard::apply`]
//! recomputes the projection from the baseline and then the filtered view,
//! so toggling the time machine any number of times cannot compound growth.

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::filter::FilteredView;
use crate::model::Dataset;
use crate::projection::GrowthModel;
use crate::traits::CityQuery;
use std::sync::Arc;

pub struct Dashboard {
    baseline: Arc<Dataset>,
    working: Arc<Dataset>,
    view: Option<FilteredView>,
}

impl Dashboard {
    pub fn new(baseline: Arc<Dataset>) -> Self {
        Self {
            working: Arc::clone(&baseline),
            baseline,
            view: None,
        }
    }

    /// The dataset as loaded.
    pub fn baseline(&self) -> &Dataset {
        &self.baseline
    }

    /// The dataset the last [`Self::apply`] filtered: projected when the
    /// time machine is on, otherwise the baseline itself.
    pub fn working(&self) -> &Dataset {
        &self.working
    }

    /// `None` until [`Self::apply`] has run once.
    pub fn view(&self) -> Option<&FilteredView> {
        self.view.as_ref()
    }

    /// Recomputes the derived view for `config`.
    ///
    /// Fails only on an invalid growth rate; the previous view is kept then.
    pub fn apply(&mut self, config: &DashboardConfig, current_year: i32) -> Result<&FilteredView> {
        let working = match &config.projection {
            Some(projection) => {
                let model = GrowthModel::new(projection.annual_rate)?;
                tracing::debug!(
                    target_year = projection.target_year,
                    rate = projection.annual_rate,
                    "projecting from baseline"
                );
                Arc::new(model.project(&self.baseline, current_year, projection.target_year))
            }
            None => Arc::clone(&self.baseline),
        };

        let dataset_max = working.population_bounds().map_or(0, |(_, max)| max);
        let filter = config.filter(dataset_max);
        let view = filter.apply(&working);
        tracing::debug!(
            min = filter.min_population,
            max = filter.max_population,
            countries = filter.countries.len(),
            cities = view.len(),
            "filtered view"
        );

        self.working = working;
        Ok(self.view.insert(view))
    }
}
