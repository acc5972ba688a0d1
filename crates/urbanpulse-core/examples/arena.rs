//! City arena example for urbanpulse-core
//!
//! Compares two cities at the current instant, then again with populations
//! projected to 2040.

use chrono::Utc;
use std::path::PathBuf;
use urbanpulse_core::prelude::*;

fn main() -> Result<()> {
    println!("=== urbanpulse Arena Example ===\n");

    let source: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", "cities.csv"]
        .iter()
        .collect();
    let dataset = urbanpulse_core::load(&LoaderConfig::from_source(DataSource::Path(source)))?;

    let Some((a, b)) = Arena::select(&dataset, "Delhi", "Kathmandu") else {
        println!("Need at least 2 cities for comparison.");
        return Ok(());
    };

    let cmp = compare(a, b, Utc::now());
    println!("{} vs {}", a.name(), b.name());
    println!("  Distance:   {} km", cmp.distance_km as u64);
    println!("  Time Diff:  {}", cmp.time_diff_label());
    println!("  Local time: {} / {}", cmp.local_time_a, cmp.local_time_b);
    println!();

    let projected = GrowthModel::default().project(&dataset, 2025, 2040);
    for name in [a.name(), b.name()] {
        if let Some(city) = projected.find_city(name) {
            println!("  {name} in 2040: {}", city.population());
        }
    }

    Ok(())
}
