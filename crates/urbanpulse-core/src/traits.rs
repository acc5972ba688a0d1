// crates/urbanpulse-core/src/traits.rs
use crate::filter::FilteredView;
use crate::model::{CityRecord, Dataset};
use crate::text::fold_key;
use std::collections::{BTreeSet, HashSet};

/// Read-only queries shared by the canonical dataset and derived views.
///
/// Implementors only provide [`CityQuery::records`]; every query assumes the
/// records are ordered by population, descending, which both the loader and
/// the filter guarantee.
///
/// # Examples
/// ```rust
/// use urbanpulse_core::{CityQuery, CityRecord, Dataset};
///
/// let city = |name: &str, country: &str, population| CityRecord {
///     city: name.into(),
///     country: country.into(),
///     lat: 0.0,
///     lon: 0.0,
///     population,
///     timezone: None,
/// };
/// let db = Dataset::from_records(vec![
///     city("Zürich", "Switzerland", 420_000),
///     city("Tokyo", "Japan", 37_000_000),
/// ]);
///
/// assert_eq!(db.countries(), vec!["Japan", "Switzerland"]);
/// assert_eq!(db.population_bounds(), Some((420_000, 37_000_000)));
/// assert_eq!(db.find_city("zurich").map(|c| c.name()), Some("Zürich"));
/// ```
pub trait CityQuery {
    fn records(&self) -> &[CityRecord];

    /// Sorted, de-duplicated country names (the country picker choices).
    fn countries(&self) -> Vec<&str> {
        self.records()
            .iter()
            .map(|r| r.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `(min, max)` population, `None` when there are no records.
    fn population_bounds(&self) -> Option<(u64, u64)> {
        let records = self.records();
        let min = records.iter().map(|r| r.population).min()?;
        let max = records.iter().map(|r| r.population).max()?;
        Some((min, max))
    }

    /// The `n` most populous records.
    fn top_n(&self, n: usize) -> &[CityRecord] {
        let records = self.records();
        &records[..n.min(records.len())]
    }

    /// Sum of all populations, saturating at `u64::MAX`.
    fn total_population(&self) -> u64 {
        self.records()
            .iter()
            .fold(0, |sum: u64, r| sum.saturating_add(r.population))
    }

    /// City names in order of first appearance, each once.
    fn distinct_city_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records()
            .iter()
            .map(|r| r.city.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// First record named `name`. Exact matches win; otherwise the name is
    /// compared accent- and case-insensitively.
    fn find_city(&self, name: &str) -> Option<&CityRecord> {
        let records = self.records();
        records.iter().find(|r| r.city == name).or_else(|| {
            let q = fold_key(name);
            if q.is_empty() {
                return None;
            }
            records.iter().find(|r| fold_key(&r.city) == q)
        })
    }
}

impl CityQuery for [CityRecord] {
    fn records(&self) -> &[CityRecord] {
        self
    }
}

impl CityQuery for Dataset {
    fn records(&self) -> &[CityRecord] {
        Dataset::records(self)
    }
}

impl CityQuery for FilteredView {
    fn records(&self) -> &[CityRecord] {
        FilteredView::records(self)
    }
}
