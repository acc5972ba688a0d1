//! Text rendering of the dashboard panels.
//!
//! Every function writes into a `String` so the output can be tested without
//! capturing stdout.

use std::fmt::Write;
use urbanpulse_core::aggregate::{CountryTotal, Metrics, TreemapNode};
use urbanpulse_core::{CityRecord, Comparison, LocalTime, Side, ViewState};

/// `1234567` → `1,234,567`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn metrics(m: &Metrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Cities:     {}", thousands(m.total_cities as u64));
    let _ = writeln!(out, "Total Population: {}", m.total_population_label());
    let _ = writeln!(out, "Largest City:     {}", m.largest_city_label());
    let _ = writeln!(out, "Avg City Pop:     {}", m.average_population_label());
    out
}

pub fn city_rows<'a>(records: impl IntoIterator<Item = &'a CityRecord>) -> String {
    let mut out = String::new();
    for (i, r) in records.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}. {:<28} {:<24} {:>14}  ({:.4}, {:.4})",
            i + 1,
            r.city,
            r.country,
            thousands(r.population),
            r.lat,
            r.lon
        );
    }
    out
}

pub fn country_totals(totals: &[CountryTotal]) -> String {
    let mut out = String::new();
    for t in totals {
        let _ = writeln!(
            out,
            "{:<32} {:>16}  {} cities",
            t.country,
            thousands(t.population),
            t.cities
        );
    }
    out
}

pub fn treemap(node: &TreemapNode) -> String {
    fn walk(out: &mut String, node: &TreemapNode, depth: usize) {
        let _ = writeln!(
            out,
            "{:indent$}{} ({})",
            "",
            node.label,
            thousands(node.population),
            indent = depth * 2
        );
        for child in &node.children {
            walk(out, child, depth + 1);
        }
    }
    let mut out = String::new();
    walk(&mut out, node, 0);
    out
}

fn card(out: &mut String, city: &CityRecord, time: &LocalTime, winner: bool) {
    let _ = writeln!(out, "  {} ({})", city.city, city.country);
    let marker = if winner { "  ★" } else { "" };
    let _ = writeln!(out, "    Population: {}{marker}", thousands(city.population));
    let _ = writeln!(out, "    Local Time: {time}");
}

pub fn arena(a: &CityRecord, b: &CityRecord, cmp: &Comparison) -> String {
    let mut out = String::new();
    card(&mut out, a, &cmp.local_time_a, cmp.population_winner == Some(Side::A));
    let _ = writeln!(out, "  ── VS ──");
    let _ = writeln!(
        out,
        "    Distance:  {} km",
        thousands(cmp.distance_km.max(0.0) as u64)
    );
    let _ = writeln!(out, "    Time Diff: {}", cmp.time_diff_label());
    card(&mut out, b, &cmp.local_time_b, cmp.population_winner == Some(Side::B));
    out
}

pub fn view_state(view: &ViewState) -> String {
    format!(
        "lat {:.4}, lon {:.4}, zoom {}\n",
        view.lat, view.lon, view.zoom
    )
}
