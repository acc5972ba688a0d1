use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use urbanpulse_core::aggregate::{TOP_BAR_CITIES, TOP_TREEMAP_CITIES};
use urbanpulse_core::{DashboardConfig, MapStyle, ProjectionConfig};

/// CLI arguments for urbanpulse
#[derive(Debug, Parser)]
#[command(
    name = "urbanpulse",
    version,
    about = "Explore the world's most populated cities from the terminal"
)]
pub struct CliArgs {
    /// Dataset location: http(s) URL or local .csv / .csv.gz path
    /// (default: the countries-states-cities cities.csv on GitHub)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Binary snapshot of the normalized dataset, reused on later runs
    #[arg(long = "snapshot", global = true)]
    pub snapshot: Option<PathBuf>,

    /// JSON file with dashboard settings; flags below override it
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Minimum population (inclusive)
    #[arg(long = "min-pop", global = true)]
    pub min_population: Option<u64>,

    /// Maximum population (inclusive, default: largest city)
    #[arg(long = "max-pop", global = true)]
    pub max_population: Option<u64>,

    /// Countries to keep, comma-separated or repeated (e.g. -c Japan -c India)
    #[arg(short = 'c', long = "country", global = true, value_delimiter = ',')]
    pub countries: Vec<String>,

    /// Project populations to this year (enables the time machine)
    #[arg(long = "project-year", global = true)]
    pub project_year: Option<i32>,

    /// Annual growth multiplier used with --project-year
    #[arg(long = "growth-rate", global = true)]
    pub growth_rate: Option<f64>,

    /// Map layer the output is meant for
    #[arg(long = "style", global = true, value_enum)]
    pub style: Option<StyleArg>,

    /// Print JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Headline metrics of the filtered cities
    Stats,

    /// List the countries available for filtering
    Countries,

    /// Most populous cities of the filtered set
    Top {
        #[arg(default_value_t = TOP_BAR_CITIES)]
        n: usize,
    },

    /// Population summed per country
    Totals,

    /// World → country → city breakdown of the top cities
    Treemap {
        #[arg(default_value_t = TOP_TREEMAP_CITIES)]
        n: usize,
    },

    /// Compare two cities (default: the two largest)
    Arena {
        /// First contender
        a: Option<String>,
        /// Second contender
        b: Option<String>,
    },

    /// Fly the map camera to a random city
    Surprise,

    /// Camera position for the current filter
    View,

    /// Great-circle distance between two coordinates
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },

    /// Print the filtered cities
    Table {
        /// Maximum number of rows
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Columns,
    Heatmap,
    Scatter,
}

impl From<StyleArg> for MapStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Columns => MapStyle::Columns,
            StyleArg::Heatmap => MapStyle::Heatmap,
            StyleArg::Scatter => MapStyle::Scatter,
        }
    }
}

impl CliArgs {
    /// Layers the command-line flags over `base`.
    pub fn apply_to(&self, mut base: DashboardConfig) -> DashboardConfig {
        if let Some(min) = self.min_population {
            base.min_population = min;
        }
        if let Some(max) = self.max_population {
            base.max_population = Some(max);
        }
        let countries: Vec<String> = self
            .countries
            .iter()
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
            .collect();
        if !countries.is_empty() {
            base.countries = countries.into_iter().collect();
        }
        if let Some(style) = self.style {
            base.map_style = style.into();
        }
        if let Some(year) = self.project_year {
            let mut projection = ProjectionConfig::new(year);
            if let Some(rate) = self.growth_rate {
                projection.annual_rate = rate;
            }
            base.projection = Some(projection);
        } else if let (Some(rate), Some(projection)) = (self.growth_rate, base.projection.as_mut()) {
            projection.annual_rate = rate;
        }
        base
    }
}
