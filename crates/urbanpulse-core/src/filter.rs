// crates/urbanpulse-core/src/filter.rs
use crate::model::CityRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Deref;

/// Population range plus an optional country whitelist.
///
/// An empty `countries` set means "all countries".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityFilter {
    pub min_population: u64,
    pub max_population: u64,
    pub countries: BTreeSet<String>,
}

impl CityFilter {
    pub fn new(min_population: u64, max_population: u64) -> Self {
        Self {
            min_population,
            max_population,
            countries: BTreeSet::new(),
        }
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// `min ≤ population ≤ max` and, if any countries are selected, membership.
    pub fn matches(&self, record: &CityRecord) -> bool {
        (self.min_population..=self.max_population).contains(&record.population)
            && (self.countries.is_empty() || self.countries.contains(&record.country))
    }

    /// Derives a view; the input is only read.
    pub fn apply(&self, records: &[CityRecord]) -> FilteredView {
        FilteredView {
            records: records
                .iter()
                .filter(|r| self.matches(r))
                .cloned()
                .collect(),
        }
    }
}

/// Records that passed a [`CityFilter`], in input order.
///
/// An empty view is a normal state. Code that needs "not computed yet"
/// holds an `Option<FilteredView>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredView {
    records: Vec<CityRecord>,
}

impl FilteredView {
    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }
}

impl Deref for FilteredView {
    type Target = [CityRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

/// Free-function form of [`CityFilter::apply`].
pub fn filter(
    records: &[CityRecord],
    min_population: u64,
    max_population: u64,
    countries: &BTreeSet<String>,
) -> FilteredView {
    CityFilter {
        min_population,
        max_population,
        countries: countries.clone(),
    }
    .apply(records)
}
