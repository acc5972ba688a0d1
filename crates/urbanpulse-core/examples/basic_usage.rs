//! Basic usage example for urbanpulse-core
//!
//! Loads the bundled test fixture, filters it and prints the headline panels.

use std::path::PathBuf;
use urbanpulse_core::prelude::*;

fn main() -> Result<()> {
    println!("=== urbanpulse Basic Usage Example ===\n");

    let source: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", "cities.csv"]
        .iter()
        .collect();
    let outcome = load_or_empty(&LoaderConfig::from_source(DataSource::Path(source)));
    if let Some(error) = &outcome.error {
        eprintln!("✗ Data unavailable: {error}");
        return Ok(());
    }
    println!("✓ Loaded {} cities\n", outcome.dataset.len());

    let mut dashboard = Dashboard::new(outcome.dataset);
    let config = DashboardConfig {
        min_population: 500_000,
        ..DashboardConfig::default()
    };
    let view = dashboard.apply(&config, 2025)?.clone();

    println!("--- Metrics ---");
    let metrics = Metrics::from_records(&view);
    println!("Total Cities:     {}", metrics.total_cities);
    println!("Total Population: {}", metrics.total_population_label());
    println!("Largest City:     {}", metrics.largest_city_label());
    println!("Avg City Pop:     {}\n", metrics.average_population_label());

    println!("--- Top 5 ---");
    for (i, city) in view.top_n(5).iter().enumerate() {
        println!("{}. {} ({}) - {}", i + 1, city.name(), city.country(), city.population());
    }
    println!();

    println!("--- Population by country ---");
    for total in country_totals(&view) {
        println!("- {}: {} in {} cities", total.country, total.population, total.cities);
    }

    Ok(())
}
