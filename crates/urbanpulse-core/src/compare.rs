// crates/urbanpulse-core/src/compare.rs

//! # City Arena
//!
//! Head-to-head comparison of two cities: great-circle distance, the gap
//! between their current UTC offsets and each city's wall-clock time.
//!
//! Timezones never make a comparison fail. A missing or unknown IANA name
//! resolves to UTC, and a local time that cannot be represented turns both
//! clocks into [`LocalTime::Unknown`].

use crate::geo::distance_km;
use crate::model::CityRecord;
use crate::traits::CityQuery;
use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;

/// Wall-clock format of the arena cards (`07:45 PM`).
pub const LOCAL_TIME_FORMAT: &str = "%I:%M %p";
/// Rendered in place of a clock that could not be computed.
pub const UNKNOWN_TIME: &str = "--:--";

// -----------------------------------------------------------------------------
// ZONES
// -----------------------------------------------------------------------------

/// Outcome of looking up a city's timezone name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneResolution {
    /// The name was a valid IANA identifier.
    Named(Tz),
    /// No name was given; UTC is used.
    Missing,
    /// The name is not a known zone; UTC is used.
    Invalid,
}

impl ZoneResolution {
    pub fn resolve(name: Option<&str>) -> Self {
        match name.map(str::trim).filter(|s| !s.is_empty()) {
            None => ZoneResolution::Missing,
            Some(name) => match name.parse::<Tz>() {
                Ok(tz) => ZoneResolution::Named(tz),
                Err(_) => {
                    tracing::warn!(zone = name, "unknown timezone, falling back to UTC");
                    ZoneResolution::Invalid
                }
            },
        }
    }

    /// The zone actually used for calculations.
    pub fn zone(&self) -> Tz {
        match self {
            ZoneResolution::Named(tz) => *tz,
            ZoneResolution::Missing | ZoneResolution::Invalid => Tz::UTC,
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self, ZoneResolution::Named(_))
    }

    /// Offset from UTC at `now`, DST included.
    pub fn offset_seconds(&self, now: DateTime<Utc>) -> i32 {
        self.zone()
            .offset_from_utc_datetime(&now.naive_utc())
            .fix()
            .local_minus_utc()
    }
}

/// A city's wall-clock time, or the explicit "unknown" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalTime {
    At(NaiveDateTime),
    Unknown,
}

impl LocalTime {
    fn from_offset(now: DateTime<Utc>, offset_seconds: i32) -> Self {
        now.naive_utc()
            .checked_add_signed(Duration::seconds(i64::from(offset_seconds)))
            .map_or(LocalTime::Unknown, LocalTime::At)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, LocalTime::At(_))
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalTime::At(t) => write!(f, "{}", t.format(LOCAL_TIME_FORMAT)),
            LocalTime::Unknown => f.write_str(UNKNOWN_TIME),
        }
    }
}

// -----------------------------------------------------------------------------
// COMPARISON
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

/// Great-circle arc between the two contenders, positions as `[lon, lat]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightArc {
    pub source: [f64; 2],
    pub target: [f64; 2],
    pub source_name: String,
    pub target_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub distance_km: f64,
    /// `|offset_a − offset_b|` in hours; fractional for :30/:45 zones.
    pub time_diff_hours: f64,
    pub local_time_a: LocalTime,
    pub local_time_b: LocalTime,
    /// Strictly larger population; `None` on a tie.
    pub population_winner: Option<Side>,
    pub arc: FlightArc,
}

impl Comparison {
    /// e.g. `"5.5h"`.
    pub fn time_diff_label(&self) -> String {
        format!("{}h", self.time_diff_hours)
    }
}

/// Compares `a` and `b` at the instant `now`.
pub fn compare(a: &CityRecord, b: &CityRecord, now: DateTime<Utc>) -> Comparison {
    let zone_a = ZoneResolution::resolve(a.timezone());
    let zone_b = ZoneResolution::resolve(b.timezone());
    let offset_a = zone_a.offset_seconds(now);
    let offset_b = zone_b.offset_seconds(now);

    let mut local_time_a = LocalTime::from_offset(now, offset_a);
    let mut local_time_b = LocalTime::from_offset(now, offset_b);
    if !(local_time_a.is_known() && local_time_b.is_known()) {
        local_time_a = LocalTime::Unknown;
        local_time_b = LocalTime::Unknown;
    }

    let population_winner = match a.population.cmp(&b.population) {
        std::cmp::Ordering::Greater => Some(Side::A),
        std::cmp::Ordering::Less => Some(Side::B),
        std::cmp::Ordering::Equal => None,
    };

    Comparison {
        distance_km: distance_km(a.lat, a.lon, b.lat, b.lon),
        time_diff_hours: f64::from((offset_a - offset_b).abs()) / 3600.0,
        local_time_a,
        local_time_b,
        population_winner,
        arc: FlightArc {
            source: [a.lon, a.lat],
            target: [b.lon, b.lat],
            source_name: a.city.clone(),
            target_name: b.city.clone(),
        },
    }
}

// -----------------------------------------------------------------------------
// CONTENDER SELECTION
// -----------------------------------------------------------------------------

/// Picks the two cities of the arena from a view.
pub struct Arena;

impl Arena {
    /// Default pairing: the first two distinct city names of the view.
    /// `None` when the view has fewer than two.
    pub fn contenders(view: &[CityRecord]) -> Option<(&CityRecord, &CityRecord)> {
        let names = view.distinct_city_names();
        match names.as_slice() {
            [first, second, ..] => Self::select(view, first, second),
            _ => None,
        }
    }

    /// Looks both names up in the view (see [`CityQuery::find_city`]).
    pub fn select<'a>(
        view: &'a [CityRecord],
        name_a: &str,
        name_b: &str,
    ) -> Option<(&'a CityRecord, &'a CityRecord)> {
        Some((view.find_city(name_a)?, view.find_city(name_b)?))
    }

    /// Pits `name` against the most populous city of the view with a
    /// different name.
    pub fn challenge<'a>(
        view: &'a [CityRecord],
        name: &str,
    ) -> Option<(&'a CityRecord, &'a CityRecord)> {
        let challenger = view.find_city(name)?;
        let rival = view.iter().find(|r| r.city != challenger.city)?;
        Some((challenger, rival))
    }
}
