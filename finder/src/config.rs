//! Finder configuration.
//!
//! Values come, by increasing priority, from the built-in defaults, a `.env`
//! file, `FINDER_*` environment variables and command-line flags. Everything
//! the filters need ends up in an explicit [`FinderConfig`]; nothing is read
//! from the environment after start-up.

use crate::cache::CacheMode;
use crate::filter::{ExecutionMode, PartitionScheme};
use clap::{Parser, ValueEnum};
use common::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_DATA_PATH, DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
    DEFAULT_RADIUS_METERS, DEFAULT_WORKERS,
};
use common::places::{find_place, place_names};
use common::types::reference_point::ReferencePoint;
use common::types::search_query::SearchQuery;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown place '{name}', known places are: {known}")]
    UnknownPlace { name: String, known: String },

    #[error("coordinates ({latitude}, {longitude}) are out of range")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },

    #[error("radius must be a non-negative number of meters, got {0}")]
    InvalidRadius(f64),

    #[error("spread must be a finite, non-negative number of meters, got {0}")]
    InvalidSpread(f64),

    #[error("--big-data requires FINDER_BIG_DATA_PATH or --big-data-path")]
    MissingBigDataPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Sequential,
    Partitioned,
}

/// Command-line flags, each backed by a `FINDER_*` environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "finder", about = "Find restaurants within a radius of a point")]
pub struct Cli {
    /// Latitude of the search centre, in degrees.
    #[arg(
        long,
        env = "FINDER_LATITUDE",
        default_value_t = DEFAULT_LATITUDE,
        allow_negative_numbers = true
    )]
    pub latitude: f64,

    /// Longitude of the search centre, in degrees.
    #[arg(
        long,
        env = "FINDER_LONGITUDE",
        default_value_t = DEFAULT_LONGITUDE,
        allow_negative_numbers = true
    )]
    pub longitude: f64,

    /// Use a known landmark as the search centre instead of coordinates.
    #[arg(long)]
    pub place: Option<String>,

    /// Search radius in meters.
    #[arg(
        long,
        env = "FINDER_RADIUS",
        default_value_t = DEFAULT_RADIUS_METERS,
        allow_negative_numbers = true
    )]
    pub radius: f64,

    #[arg(long, env = "FINDER_MODE", value_enum, default_value_t = Mode::Sequential)]
    pub mode: Mode,

    /// Worker threads in partitioned mode.
    #[arg(long, env = "FINDER_WORKERS", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Partitions in partitioned mode; defaults to the number of workers.
    #[arg(long, env = "FINDER_PARTITIONS")]
    pub partitions: Option<usize>,

    /// Datasets kept in memory; 0 disables the cache.
    #[arg(long, env = "FINDER_CACHE_CAPACITY", default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: usize,

    /// Dataset to search (.geojson or .json).
    #[arg(long, env = "FINDER_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Search the large dataset instead of the default one.
    #[arg(long, env = "FINDER_BIG_DATA")]
    pub big_data: bool,

    #[arg(long, env = "FINDER_BIG_DATA_PATH")]
    pub big_data_path: Option<PathBuf>,

    /// Generate this many random restaurants instead of reading a file.
    #[arg(long)]
    pub synthetic: Option<usize>,

    /// Spread of the synthetic restaurants around the centre, in meters.
    #[arg(long, default_value_t = 5_000.0, allow_negative_numbers = true)]
    pub spread: f64,

    /// List every restaurant found, with its distance.
    #[arg(short, long, env = "FINDER_VERBOSE")]
    pub verbose: bool,

    /// Print the known places and exit.
    #[arg(long)]
    pub list_places: bool,
}

/// Where the candidate restaurants come from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Synthetic { count: usize, spread_meters: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    pub query: SearchQuery,
    pub mode: ExecutionMode,
    pub cache: CacheMode,
    pub source: DataSource,
    pub verbose: bool,
}

impl FinderConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let reference = match &cli.place {
            Some(name) => find_place(name).ok_or_else(|| ConfigError::UnknownPlace {
                name: name.clone(),
                known: place_names().collect::<Vec<_>>().join(", "),
            })?,
            None => ReferencePoint::new(cli.latitude, cli.longitude),
        };
        if !(-90.0..=90.0).contains(&reference.latitude)
            || !(-180.0..=180.0).contains(&reference.longitude)
        {
            return Err(ConfigError::CoordinateOutOfRange {
                latitude: reference.latitude,
                longitude: reference.longitude,
            });
        }
        if cli.radius.is_nan() || cli.radius < 0.0 {
            return Err(ConfigError::InvalidRadius(cli.radius));
        }

        let mode = match cli.mode {
            Mode::Sequential => ExecutionMode::Sequential,
            Mode::Partitioned => ExecutionMode::Partitioned {
                workers: cli.workers.max(1),
                scheme: PartitionScheme::Even(cli.partitions.unwrap_or(cli.workers).max(1)),
            },
        };

        let source = match cli.synthetic {
            Some(_) if !cli.spread.is_finite() || cli.spread < 0.0 => {
                return Err(ConfigError::InvalidSpread(cli.spread));
            }
            Some(count) => DataSource::Synthetic {
                count,
                spread_meters: cli.spread,
            },
            None if cli.big_data => {
                DataSource::File(cli.big_data_path.ok_or(ConfigError::MissingBigDataPath)?)
            }
            None => DataSource::File(cli.data),
        };

        Ok(FinderConfig {
            query: SearchQuery::new(reference, cli.radius),
            mode,
            cache: CacheMode::from_capacity(cli.cache_capacity),
            source,
            verbose: cli.verbose,
        })
    }
}
