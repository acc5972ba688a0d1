//! urbanpulse: terminal dashboard for the world's most populated cities
//!
//! Usage examples
//! --------------
//!
//! - Headline metrics for all cities above 100k
//!   $ urbanpulse stats
//!
//! - Restrict to some countries and a population band
//!   $ urbanpulse -c Japan -c India --min-pop 1000000 top
//!
//! - Compare two cities, with populations projected to 2035
//!   $ urbanpulse --project-year 2035 arena "New York" London
//!
//! - Read a local copy and keep a binary snapshot for fast restarts
//!   $ urbanpulse --input cities.csv --snapshot cities.bin stats
//!
//! Data source
//! -----------
//!
//! By default the dataset is fetched once from the countries-states-cities
//! GitHub repository. A failed load is reported as "data unavailable" and
//! the command exits with an error; nothing is retried.
use anyhow::{bail, Context};
use chrono::{Datelike, Utc};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use tracing_subscriber::FmtSubscriber;
use urbanpulse_cli::args::{CliArgs, Commands};
use urbanpulse_cli::render;
use urbanpulse_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose)?;

    // Dashboard settings: optional JSON file, then flags on top
    let base = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => DashboardConfig::default(),
    };
    let config = args.apply_to(base);

    // Distance needs no dataset
    if let Commands::Distance {
        lat1,
        lon1,
        lat2,
        lon2,
    } = args.command
    {
        let km = distance_km(lat1, lon1, lat2, lon2);
        return emit(args.json, &km, format!("{km:.2} km\n"));
    }

    // Load once (cached), present failure as "data unavailable"
    let mut loader = match &args.input {
        Some(input) => LoaderConfig::from_source(DataSource::parse(input)),
        None => LoaderConfig::default(),
    };
    loader.snapshot = args.snapshot.clone();
    let outcome = load_or_empty(&loader);
    if let Some(error) = outcome.error {
        bail!("data unavailable: {error}");
    }

    let mut dashboard = Dashboard::new(outcome.dataset);
    let view = dashboard.apply(&config, Utc::now().year())?.clone();
    if let Some(projection) = &config.projection {
        eprintln!(
            "Projecting population in {} with {:.1}% annual growth.",
            projection.target_year,
            (projection.annual_rate - 1.0) * 100.0
        );
    }

    match args.command {
        Commands::Stats => {
            let metrics = Metrics::from_records(&view);
            emit(args.json, &metrics, render::metrics(&metrics))?;
        }

        Commands::Countries => {
            let countries = dashboard.working().countries();
            emit(args.json, &countries, lines(&countries))?;
        }

        Commands::Top { n } => {
            let top = view.top_n(n);
            emit(args.json, &top, render::city_rows(top))?;
        }

        Commands::Totals => {
            let totals = country_totals(&view);
            emit(args.json, &totals, render::country_totals(&totals))?;
        }

        Commands::Treemap { n } => {
            let tree = treemap(&view, n);
            emit(args.json, &tree, render::treemap(&tree))?;
        }

        Commands::Arena { a, b } => {
            let contenders = match (a.as_deref(), b.as_deref()) {
                (Some(a), Some(b)) => Arena::select(&view, a, b),
                (Some(a), None) => Arena::challenge(&view, a),
                _ => Arena::contenders(&view),
            };
            match contenders {
                Some((a, b)) => {
                    let cmp = compare(a, b, Utc::now());
                    emit(args.json, &cmp, render::arena(a, b, &cmp))?;
                }
                None => println!("Need at least 2 cities for comparison. Adjust filters."),
            }
        }

        Commands::Surprise => match ViewState::fly_to_random(&view, &mut rand::thread_rng()) {
            Some((city, camera)) => {
                eprintln!("Flying to {}, {}!", city.city, city.country);
                emit(args.json, &camera, render::view_state(&camera))?;
            }
            None => println!("No cities in current filter to fly to!"),
        },

        Commands::View => match ViewState::initial(&view) {
            Some(camera) => emit(args.json, &camera, render::view_state(&camera))?,
            None => println!("No cities found with the current filters."),
        },

        Commands::Table { limit } => {
            let rows = view.top_n(limit);
            emit(args.json, &rows, render::city_rows(rows))?;
        }

        // Answered before the dataset was loaded
        Commands::Distance { .. } => {}
    }

    Ok(())
}

fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(match verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default tracing subscriber failed")
}

fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{text}");
    }
    Ok(())
}

fn lines(items: &[&str]) -> String {
    items.iter().map(|s| format!("{s}\n")).collect()
}
