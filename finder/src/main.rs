use clap::Parser;
use colored::Color;
use common::errors::FilterError;
use common::logger::Logger;
use common::places::POPULAR_PLACES;
use finder::config::{Cli, ConfigError, DataSource, FinderConfig};
use finder::display::{Monitoring, print_results, sort_by_distance};
use finder::filter::FilterBackend;
use finder::loader::{DatasetLoader, LoadError};
use finder::synthetic::generate_records;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
enum FinderError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("could not load restaurants: {0}")]
    Load(#[from] LoadError),

    #[error("search failed: {0}")]
    Filter(#[from] FilterError),

    #[error("loading task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

async fn run(config: FinderConfig, logger: &Logger) -> Result<(), FinderError> {
    let backend = FilterBackend::from_mode(&config.mode);
    logger.info(format!(
        "Searching within {} m of ({}, {}) using {} mode",
        config.query.radius,
        config.query.reference.latitude,
        config.query.reference.longitude,
        backend.summary()
    ));

    let load_started = Instant::now();
    let records = match config.source {
        DataSource::File(path) => {
            let loader = Arc::new(DatasetLoader::new(config.cache).verbose(config.verbose));
            let records = {
                let loader = Arc::clone(&loader);
                tokio::task::spawn_blocking(move || loader.load(&path)).await??
            };
            let stats = loader.cache_stats();
            logger.debug(format!(
                "Dataset cache: {} hits, {} misses ({:.0}% hit rate)",
                stats.hits,
                stats.misses,
                stats.hit_rate() * 100.0
            ));
            records
        }
        DataSource::Synthetic {
            count,
            spread_meters,
        } => {
            let mut rng = rand::thread_rng();
            Arc::new(generate_records(
                &mut rng,
                count,
                config.query.reference,
                spread_meters,
            ))
        }
    };
    let load_time = load_started.elapsed();
    logger.info(format!("Data loading time: {} ms", load_time.as_millis()));

    let report = backend.search(records, config.query).await?;
    logger.info(format!("Search time: {} ms", report.elapsed.as_millis()));
    if report.output_count == 0 {
        logger.warn(format!(
            "None of the {} restaurants is within {} m",
            report.input_count, config.query.radius
        ));
    } else {
        logger.debug(format!(
            "{} of {} restaurants matched",
            report.output_count, report.input_count
        ));
    }

    let monitoring = Monitoring::new(load_time, report.elapsed, report.input_count);
    let mut results = report.results;
    sort_by_distance(&mut results);
    print_results(&results, config.query.radius, &monitoring, config.verbose);

    Ok(())
}

#[actix::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let logger = Logger::new("Finder", Color::Green).verbose(cli.verbose);

    if cli.list_places {
        for (name, latitude, longitude) in POPULAR_PLACES {
            println!("{name}: ({latitude}, {longitude})");
        }
        return;
    }

    let outcome = match FinderConfig::from_cli(cli) {
        Ok(config) => run(config, &logger).await,
        Err(err) => Err(err.into()),
    };

    if let Err(err) = outcome {
        logger.error(err.to_string());
        std::process::exit(1);
    }
}
