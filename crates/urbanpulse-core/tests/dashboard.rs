mod common;

use common::sample_dataset;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use urbanpulse_core::aggregate::{country_totals, treemap, Metrics, EMPTY_SENTINEL, TREEMAP_ROOT};
use urbanpulse_core::view::{CITY_ZOOM, INITIAL_ZOOM, MAX_ZOOM, MIN_ZOOM};
use urbanpulse_core::{
    CityQuery, Dashboard, DashboardConfig, Dataset, Error, ProjectionConfig, ViewState,
};

fn dashboard() -> Dashboard {
    Dashboard::new(Arc::new(sample_dataset()))
}

#[test]
fn view_is_not_computed_until_applied() {
    let mut dashboard = Dashboard::new(Arc::new(Dataset::empty()));
    assert!(dashboard.view().is_none());

    dashboard.apply(&DashboardConfig::default(), 2024).unwrap();
    let view = dashboard.view().unwrap();
    assert!(view.is_empty());
}

#[test]
fn default_config_keeps_cities_from_100k_up() {
    let mut dashboard = dashboard();
    let view = dashboard.apply(&DashboardConfig::default(), 2024).unwrap();

    assert_eq!(view.len(), 8);
    assert_eq!(view[0].city, "Tokyo");
    assert!(view.iter().all(|r| r.population >= 100_000));
}

#[test]
fn repeated_projection_is_computed_from_the_baseline() {
    let mut dashboard = dashboard();
    let config = DashboardConfig {
        min_population: 0,
        projection: Some(ProjectionConfig::new(2034)),
        ..DashboardConfig::default()
    };

    let first = dashboard.apply(&config, 2024).unwrap().clone();
    let second = dashboard.apply(&config, 2024).unwrap().clone();
    assert_eq!(first, second);

    let tokyo = first.find_city("Tokyo").unwrap();
    let expected = (37_400_068f64 * 1.011f64.powi(10)).round_ties_even() as u64;
    assert_eq!(tokyo.population, expected);

    // Baseline untouched, switching the time machine off restores it.
    assert_eq!(dashboard.baseline()[0].population, 37_400_068);
    let off = DashboardConfig {
        min_population: 0,
        ..DashboardConfig::default()
    };
    let view = dashboard.apply(&off, 2024).unwrap();
    assert_eq!(view[0].population, 37_400_068);
}

#[test]
fn open_upper_bound_uses_the_projected_maximum() {
    let mut dashboard = dashboard();
    let config = DashboardConfig {
        projection: Some(ProjectionConfig::new(2050)),
        ..DashboardConfig::default()
    };
    let view = dashboard.apply(&config, 2024).unwrap();
    assert_eq!(view[0].city, "Tokyo");
    assert!(view[0].population > 37_400_068);
}

#[test]
fn invalid_growth_rate_keeps_the_previous_view() {
    let mut dashboard = dashboard();
    dashboard.apply(&DashboardConfig::default(), 2024).unwrap();

    let bad = DashboardConfig {
        projection: Some(ProjectionConfig {
            target_year: 2030,
            annual_rate: -2.0,
        }),
        ..DashboardConfig::default()
    };
    assert!(matches!(dashboard.apply(&bad, 2024), Err(Error::InvalidInput(_))));
    assert_eq!(dashboard.view().unwrap().len(), 8);
}

#[test]
fn country_filter_from_config() {
    let mut dashboard = dashboard();
    let config = DashboardConfig {
        min_population: 0,
        max_population: Some(20_000_000),
        countries: ["Japan".to_owned()].into_iter().collect(),
        ..DashboardConfig::default()
    };
    let view = dashboard.apply(&config, 2024).unwrap();
    let names: Vec<_> = view.iter().map(|r| r.city.as_str()).collect();
    assert_eq!(names, ["Osaka", "Kobe", "Nara", "Aomori"]);
}

#[test]
fn config_round_trips_through_json_with_defaults() {
    let config: DashboardConfig =
        serde_json::from_str(r#"{"countries": ["India"], "map_style": "heatmap", "projection": {"target_year": 2030}}"#)
            .unwrap();
    assert_eq!(config.min_population, 100_000);
    assert_eq!(config.map_style.to_string(), "Heatmap");
    assert_eq!(config.projection.unwrap().annual_rate, 1.011);
}

#[test]
fn metrics_of_a_view() {
    let dataset = sample_dataset();
    let metrics = Metrics::from_records(&dataset);

    assert_eq!(metrics.total_cities, 9);
    assert_eq!(metrics.total_population, dataset.total_population());
    assert_eq!(metrics.largest_city_label(), "Tokyo");
    assert_eq!(metrics.total_population_label(), "93.7 M");
    assert_eq!(metrics.average_population_label(), "10.41 M");
}

#[test]
fn metrics_of_nothing_use_sentinels() {
    let metrics = Metrics::from_records(&[]);
    assert_eq!(metrics.total_cities, 0);
    assert_eq!(metrics.total_population_label(), "0.0 M");
    assert_eq!(metrics.largest_city_label(), EMPTY_SENTINEL);
    assert_eq!(metrics.average_population_label(), EMPTY_SENTINEL);
}

#[test]
fn far_horizon_projection_saturates_instead_of_overflowing() {
    let dataset = Dataset::from_records(vec![
        common::city("Tokyo", "Japan", 30_000_000),
        common::city("Osaka", "Japan", 20_000_000),
    ]);
    let mut dashboard = Dashboard::new(Arc::new(dataset));
    let config = DashboardConfig {
        projection: Some(ProjectionConfig::new(6000)),
        ..DashboardConfig::default()
    };
    let view = dashboard.apply(&config, 2025).unwrap().clone();
    assert!(view.iter().all(|r| r.population == u64::MAX));

    let metrics = Metrics::from_records(&view);
    assert_eq!(metrics.total_cities, 2);
    assert_eq!(metrics.total_population, u64::MAX);
    assert_eq!(view.total_population(), u64::MAX);
    assert_eq!(country_totals(&view)[0].population, u64::MAX);
    assert_eq!(treemap(&view, 30).population, u64::MAX);
}

#[test]
fn country_totals_are_sorted_by_population() {
    let totals = country_totals(&sample_dataset());
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].country, "Japan");
    assert_eq!(totals[0].cities, 5);
    assert_eq!(totals[0].population, 37_400_068 + 19_281_000 + 1_522_000 + 360_000 + 150_000);
    assert_eq!(totals[1].country, "India");
    assert!(country_totals(&[]).is_empty());
}

#[test]
fn treemap_groups_top_cities_by_country() {
    let tree = treemap(&sample_dataset(), 3);
    assert_eq!(tree.label, TREEMAP_ROOT);
    assert_eq!(tree.population, 37_400_068 + 28_514_000 + 19_281_000);

    let countries: Vec<_> = tree.children.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(countries, ["Japan", "India"]);
    let japan: Vec<_> = tree.children[0].children.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(japan, ["Tokyo", "Osaka"]);

    let empty = treemap(&[], 30);
    assert!(empty.children.is_empty());
    assert_eq!(empty.population, 0);
}

#[test]
fn country_choices_are_sorted_and_unique() {
    assert_eq!(sample_dataset().countries(), ["India", "Japan"]);
}

#[test]
fn initial_view_is_the_mean_position() {
    let mut dataset_records = sample_dataset().records().to_vec();
    dataset_records[0].lat = 10.0;
    dataset_records[0].lon = -20.0;
    dataset_records.truncate(2);

    let view = ViewState::initial(&dataset_records).unwrap();
    assert_eq!(view.lat, 5.0);
    assert_eq!(view.lon, -10.0);
    assert_eq!(view.zoom, INITIAL_ZOOM);
    assert!(ViewState::initial(&[]).is_none());
}

#[test]
fn surprise_flies_to_a_city_of_the_view() {
    let dataset = sample_dataset();
    let mut rng = StdRng::seed_from_u64(7);

    let (city, camera) = ViewState::fly_to_random(&dataset, &mut rng).unwrap();
    assert!(dataset.iter().any(|r| r == city));
    assert_eq!((camera.lat, camera.lon, camera.zoom), (city.lat, city.lon, CITY_ZOOM));

    assert!(ViewState::fly_to_random(&[], &mut rng).is_none());
}

#[test]
fn zoom_is_clamped() {
    assert_eq!(ViewState::new(0.0, 0.0, 40.0).zoom, MAX_ZOOM);
    assert_eq!(ViewState::new(0.0, 0.0, -3.0).zoom, MIN_ZOOM);
}
