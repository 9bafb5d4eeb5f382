//! Data source for the finder: reads restaurant datasets from disk.
//!
//! GeoJSON feature collections are cleaned on the way in: only `Point`
//! features with exactly two coordinates and a string `name` property are
//! kept, and duplicates on (name, longitude, latitude) are dropped, keeping
//! the first occurrence. Plain JSON files hold an array of already clean
//! `{name, latitude, longitude}` objects.
//!
//! Loaded datasets are memoized by path through a [`RecordCache`].

use crate::cache::{CacheMode, CacheStats, Dataset, RecordCache};
use colored::Color;
use common::logger::Logger;
use common::types::restaurant_record::RestaurantRecord;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported dataset format: {} (expected .geojson or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Counts reported while cleaning a GeoJSON dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub total: usize,
    pub after_filtering: usize,
    pub duplicates_removed: usize,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
    properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Option<Value>,
}

impl Feature {
    fn into_record(self) -> Option<RestaurantRecord> {
        let geometry = self.geometry?;
        if geometry.kind != "Point" {
            return None;
        }
        let (longitude, latitude) = match geometry.coordinates?.as_array()?.as_slice() {
            [lon, lat] => (lon.as_f64()?, lat.as_f64()?),
            _ => return None,
        };
        let name = self.properties?.get("name")?.as_str()?.to_string();
        Some(RestaurantRecord {
            name,
            latitude,
            longitude,
        })
    }
}

/// Parses and cleans a GeoJSON feature collection.
pub fn parse_geojson(
    text: &str,
) -> Result<(Vec<RestaurantRecord>, LoadSummary), serde_json::Error> {
    let collection: FeatureCollection = serde_json::from_str(text)?;
    let total = collection.features.len();

    let filtered: Vec<RestaurantRecord> = collection
        .features
        .into_iter()
        .filter_map(Feature::into_record)
        .collect();
    let after_filtering = filtered.len();

    let mut seen = HashSet::with_capacity(after_filtering);
    let records: Vec<RestaurantRecord> = filtered
        .into_iter()
        .filter(|r| seen.insert((r.name.clone(), r.longitude.to_bits(), r.latitude.to_bits())))
        .collect();

    let summary = LoadSummary {
        total,
        after_filtering,
        duplicates_removed: after_filtering - records.len(),
    };
    Ok((records, summary))
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_restaurants_from_geojson(
    path: &Path,
) -> Result<(Vec<RestaurantRecord>, LoadSummary), LoadError> {
    parse_geojson(&read(path)?).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_restaurants_from_json(path: &Path) -> Result<Vec<RestaurantRecord>, LoadError> {
    serde_json::from_str(&read(path)?).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads datasets by path, memoizing them in the configured cache.
pub struct DatasetLoader {
    cache: Box<dyn RecordCache>,
    logger: Logger,
}

impl DatasetLoader {
    pub fn new(cache_mode: CacheMode) -> Self {
        Self::with_cache(cache_mode.build())
    }

    pub fn with_cache(cache: Box<dyn RecordCache>) -> Self {
        Self {
            cache,
            logger: Logger::new("Loader", Color::Cyan),
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.logger = self.logger.verbose(verbose);
        self
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
        let path = path.as_ref();
        let key = path.to_string_lossy();

        if let Some(records) = self.cache.get(&key) {
            self.logger
                .debug(format!("Cache hit for {} ({} records)", key, records.len()));
            return Ok(records);
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let records = match extension.as_deref() {
            Some("geojson") => {
                self.logger.info(format!("Loading GeoJSON dataset {}", key));
                let (records, summary) = load_restaurants_from_geojson(path)?;
                self.logger
                    .info(format!("Total number of entries: {}", summary.total));
                self.logger.info(format!(
                    "Number of entries after filtering: {}",
                    summary.after_filtering
                ));
                self.logger.info(format!(
                    "Number of duplicates removed: {}",
                    summary.duplicates_removed
                ));
                records
            }
            Some("json") => {
                self.logger.info(format!("Loading JSON dataset {}", key));
                load_restaurants_from_json(path)?
            }
            _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        };

        let records = Arc::new(records);
        self.cache.insert(&key, Arc::clone(&records));
        Ok(records)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
