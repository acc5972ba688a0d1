// crates/urbanpulse-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One normalized city.
///
/// Records are snapshots: once the loader has produced them nothing in the
/// crate mutates a record in place. Projection and filtering build new ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub population: u64,
    /// IANA identifier as found in the source. Absent when the cell was empty.
    pub timezone: Option<String>,
}

impl CityRecord {
    pub fn name(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }
}

/// The canonical dataset: sorted by population (descending) and bounded.
///
/// A `Dataset` is what the loader hands out and what the cache shares
/// between sessions, so it only exposes read access.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<CityRecord>,
}

impl Dataset {
    /// The "data unavailable" state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a dataset from arbitrary records, ordering them by population
    /// (descending). The sort is stable, so equal populations keep their
    /// input order.
    pub fn from_records(mut records: Vec<CityRecord>) -> Self {
        records.sort_by(|a, b| b.population.cmp(&a.population));
        Self { records }
    }

    /// Keeps the `n` most populous records.
    pub(crate) fn truncate(&mut self, n: usize) {
        self.records.truncate(n);
    }

    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }
}

impl Deref for Dataset {
    type Target = [CityRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CityRecord;
    type IntoIter = std::slice::Iter<'a, CityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
