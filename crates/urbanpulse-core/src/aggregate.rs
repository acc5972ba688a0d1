// crates/urbanpulse-core/src/aggregate.rs

//! Summaries the dashboard panels render: headline metrics, per-country
//! totals and the `World → country → city` treemap.
//!
//! Every function accepts an empty input and reports it with `None` (or an
//! empty collection) instead of failing. Population sums saturate at
//! `u64::MAX`.

use crate::model::CityRecord;
use crate::traits::CityQuery;
use serde::Serialize;
use std::collections::HashMap;

/// Bar chart size.
pub const TOP_BAR_CITIES: usize = 15;
/// Treemap size.
pub const TOP_TREEMAP_CITIES: usize = 30;

/// Placeholder shown for a metric that has no value.
pub const EMPTY_SENTINEL: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub total_cities: usize,
    pub total_population: u64,
    pub largest_city: Option<String>,
    pub average_population: Option<f64>,
}

impl Metrics {
    /// Expects `records` in population order; the largest city is the first.
    pub fn from_records(records: &[CityRecord]) -> Self {
        let total_population = records.total_population();
        let average_population =
            (!records.is_empty()).then(|| total_population as f64 / records.len() as f64);
        Self {
            total_cities: records.len(),
            total_population,
            largest_city: records.first().map(|r| r.city.clone()),
            average_population,
        }
    }

    /// e.g. `"12.3 M"`.
    pub fn total_population_label(&self) -> String {
        format!("{:.1} M", self.total_population as f64 / 1_000_000.0)
    }

    pub fn largest_city_label(&self) -> &str {
        self.largest_city.as_deref().unwrap_or(EMPTY_SENTINEL)
    }

    /// e.g. `"1.23 M"`, or the sentinel when there are no cities.
    pub fn average_population_label(&self) -> String {
        match self.average_population {
            Some(avg) => format!("{:.2} M", avg / 1_000_000.0),
            None => EMPTY_SENTINEL.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryTotal {
    pub country: String,
    pub population: u64,
    pub cities: usize,
}

/// Population summed per country, largest first (ties by name).
pub fn country_totals(records: &[CityRecord]) -> Vec<CountryTotal> {
    let mut by_country: HashMap<&str, CountryTotal> = HashMap::new();
    for record in records {
        let total = by_country
            .entry(record.country.as_str())
            .or_insert_with(|| CountryTotal {
                country: record.country.clone(),
                population: 0,
                cities: 0,
            });
        total.population = total.population.saturating_add(record.population);
        total.cities += 1;
    }

    let mut totals: Vec<_> = by_country.into_values().collect();
    totals.sort_by(|a, b| {
        b.population
            .cmp(&a.population)
            .then_with(|| a.country.cmp(&b.country))
    });
    totals
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreemapNode {
    pub label: String,
    pub population: u64,
    pub children: Vec<TreemapNode>,
}

/// Root label of the treemap.
pub const TREEMAP_ROOT: &str = "World";

/// Builds `World → country → city` from the first `n` records.
///
/// Countries appear in the order of their first city; node populations are
/// the sums of their children.
pub fn treemap(records: &[CityRecord], n: usize) -> TreemapNode {
    let mut countries: Vec<TreemapNode> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().take(n) {
        let slot = *index.entry(record.country.as_str()).or_insert_with(|| {
            countries.push(TreemapNode {
                label: record.country.clone(),
                population: 0,
                children: Vec::new(),
            });
            countries.len() - 1
        });
        let node = &mut countries[slot];
        node.population = node.population.saturating_add(record.population);
        node.children.push(TreemapNode {
            label: record.city.clone(),
            population: record.population,
            children: Vec::new(),
        });
    }

    TreemapNode {
        label: TREEMAP_ROOT.to_owned(),
        population: countries
            .iter()
            .fold(0, |sum: u64, c| sum.saturating_add(c.population)),
        children: countries,
    }
}
