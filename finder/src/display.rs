use colored::*;
use common::types::search_result::SearchResult;
use std::cmp::Ordering;
use std::time::Duration;

/// Timing and volume figures shown after a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monitoring {
    /// Milliseconds spent loading the dataset.
    pub load_data_time: f64,
    /// Milliseconds spent in the filter pass.
    pub search_time: f64,
    /// Number of candidate restaurants searched.
    pub n_restaurants: usize,
}

impl Monitoring {
    pub fn new(load: Duration, search: Duration, n_restaurants: usize) -> Self {
        Self {
            load_data_time: load.as_micros() as f64 / 1000.0,
            search_time: search.as_micros() as f64 / 1000.0,
            n_restaurants,
        }
    }
}

/// Sorts results by ascending distance, then by name.
pub fn sort_by_distance(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Renders the results as the lines printed by the CLI.
///
/// Individual restaurants are listed only when `verbose` is set.
pub fn render_results(
    results: &[SearchResult],
    radius: f64,
    monitoring: &Monitoring,
    verbose: bool,
) -> Vec<String> {
    if results.is_empty() {
        return vec!["No restaurants found within the specified radius.".to_string()];
    }

    let mut lines = vec![format!("Restaurants found within a radius of {} meters:", radius)];
    if verbose {
        lines.extend(
            results
                .iter()
                .map(|r| format!("{}, Distance: {} meters", r.name, r.distance)),
        );
    }
    lines.push(String::new());
    lines.push(format!(
        "Data loading time: {} ms",
        monitoring.load_data_time.round()
    ));
    lines.push(format!("Search time: {} ms", monitoring.search_time.round()));
    lines
}

pub fn print_results(
    results: &[SearchResult],
    radius: f64,
    monitoring: &Monitoring,
    verbose: bool,
) {
    for line in render_results(results, radius, monitoring, verbose) {
        println!("{}", line.bold());
    }
}
