use clap::Parser;
use urbanpulse_cli::args::{CliArgs, Commands};
use urbanpulse_cli::render;
use urbanpulse_core::aggregate::{treemap, Metrics, TOP_BAR_CITIES, TOP_TREEMAP_CITIES};
use urbanpulse_core::{compare, CityRecord, DashboardConfig, MapStyle, ProjectionConfig};

fn parse(args: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("urbanpulse").chain(args.iter().copied())).unwrap()
}

fn record(name: &str, population: u64) -> CityRecord {
    CityRecord {
        city: name.to_owned(),
        country: "Japan".to_owned(),
        lat: 35.0,
        lon: 139.0,
        population,
        timezone: Some("Asia/Tokyo".to_owned()),
    }
}

#[test]
fn flags_override_the_base_config() {
    let args = parse(&[
        "--min-pop",
        "500000",
        "-c",
        "Japan,India",
        "--country",
        "Brazil",
        "--style",
        "scatter",
        "--project-year",
        "2040",
        "stats",
    ]);
    assert!(matches!(args.command, Commands::Stats));

    let config = args.apply_to(DashboardConfig::default());
    assert_eq!(config.min_population, 500_000);
    assert_eq!(config.max_population, None);
    assert_eq!(
        config.countries.iter().map(String::as_str).collect::<Vec<_>>(),
        ["Brazil", "India", "Japan"]
    );
    assert_eq!(config.map_style, MapStyle::Scatter);
    assert_eq!(config.projection, Some(ProjectionConfig::new(2040)));
}

#[test]
fn unset_flags_keep_the_base_config() {
    let base = DashboardConfig {
        min_population: 42,
        projection: Some(ProjectionConfig::new(2030)),
        ..DashboardConfig::default()
    };
    let config = parse(&["--growth-rate", "1.02", "countries"]).apply_to(base);
    assert_eq!(config.min_population, 42);
    assert_eq!(config.projection.map(|p| p.annual_rate), Some(1.02));
    assert_eq!(config.projection.map(|p| p.target_year), Some(2030));
}

#[test]
fn subcommands_parse() {
    assert!(matches!(parse(&["top"]).command, Commands::Top { n } if n == TOP_BAR_CITIES));
    assert!(matches!(parse(&["treemap"]).command, Commands::Treemap { n } if n == TOP_TREEMAP_CITIES));
    assert!(matches!(parse(&["treemap", "5"]).command, Commands::Treemap { n: 5 }));
    assert!(matches!(parse(&["table", "--limit", "3"]).command, Commands::Table { limit: 3 }));
    match parse(&["arena", "Tokyo", "Delhi"]).command {
        Commands::Arena { a, b } => {
            assert_eq!(a.as_deref(), Some("Tokyo"));
            assert_eq!(b.as_deref(), Some("Delhi"));
        }
        other => panic!("unexpected command {other:?}"),
    }
    match parse(&["distance", "-33.86", "151.2", "51.5", "-0.12"]).command {
        Commands::Distance { lat1, lon2, .. } => {
            assert_eq!(lat1, -33.86);
            assert_eq!(lon2, -0.12);
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert_eq!(parse(&["-vv", "stats"]).verbose, 2);
    assert!(CliArgs::try_parse_from(["urbanpulse", "--style", "pie", "stats"]).is_err());
}

#[test]
fn thousands_separators() {
    assert_eq!(render::thousands(0), "0");
    assert_eq!(render::thousands(999), "999");
    assert_eq!(render::thousands(1_000), "1,000");
    assert_eq!(render::thousands(37_400_068), "37,400,068");
}

#[test]
fn metrics_panel_shows_sentinels_when_empty() {
    let text = render::metrics(&Metrics::from_records(&[]));
    assert!(text.contains("Largest City:     -"));
    assert!(text.contains("Avg City Pop:     -"));
}

#[test]
fn arena_panel_marks_the_winner() {
    let a = record("Tokyo", 37_400_068);
    let b = record("Osaka", 19_281_000);
    let cmp = compare(&a, &b, chrono::Utc::now());
    let text = render::arena(&a, &b, &cmp);

    assert!(text.contains("Population: 37,400,068  ★"));
    assert!(text.contains("Population: 19,281,000\n"));
    assert!(text.contains("Time Diff: 0h"));
}

#[test]
fn treemap_is_indented_by_depth() {
    let records = [record("Tokyo", 3_000), record("Osaka", 2_000)];
    let text = render::treemap(&treemap(&records, 30));
    assert_eq!(
        text,
        "World (5,000)\n  Japan (5,000)\n    Tokyo (3,000)\n    Osaka (2,000)\n"
    );
}
