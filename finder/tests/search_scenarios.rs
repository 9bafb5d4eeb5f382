use common::errors::FilterError;
use common::places::find_place;
use common::types::restaurant_record::RestaurantRecord;
use common::types::search_query::SearchQuery;
use common::utils::haversine_distance;
use finder::cache::CacheMode;
use finder::display::sort_by_distance;
use finder::filter::{ExecutionMode, FilterBackend, PartitionScheme};
use finder::loader::DatasetLoader;
use std::io::Write;
use std::sync::Arc;

const RESTAURANTS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "geometry": {"type": "Point", "coordinates": [2.3380, 48.8610]}, "properties": {"name": "Le Fumoir"}},
        {"type": "Feature", "geometry": {"type": "Point", "coordinates": [2.3376, 48.8606]}, "properties": {"name": "Café Marly"}},
        {"type": "Feature", "geometry": {"type": "Point", "coordinates": [2.3400, 48.8630]}, "properties": {"name": "Zimmer"}},
        {"type": "Feature", "geometry": {"type": "Point", "coordinates": [2.3376, 48.8606]}, "properties": {"name": "Café Marly"}},
        {"type": "Feature", "geometry": {"type": "Point", "coordinates": [2.2945, 48.8584]}, "properties": {"name": "Le Jules Verne"}},
        {"type": "Feature", "geometry": {"type": "Point", "coordinates": [2.3431, 48.8867]}, "properties": {"name": null}}
    ]
}"#;

fn modes() -> Vec<ExecutionMode> {
    vec![
        ExecutionMode::Sequential,
        ExecutionMode::Partitioned {
            workers: 2,
            scheme: PartitionScheme::Even(3),
        },
        ExecutionMode::Partitioned {
            workers: 4,
            scheme: PartitionScheme::FixedSize(1),
        },
    ]
}

#[actix_rt::test]
async fn test_restaurants_near_the_louvre() {
    let mut file = tempfile::Builder::new().suffix(".geojson").tempfile().unwrap();
    file.write_all(RESTAURANTS.as_bytes()).unwrap();

    let loader = DatasetLoader::new(CacheMode::from_capacity(1));
    let records = loader.load(file.path()).unwrap();
    assert_eq!(records.len(), 4);

    let louvre = find_place("Louvre").unwrap();
    let query = SearchQuery::new(louvre, 500.0);

    for mode in modes() {
        let backend = FilterBackend::from_mode(&mode);
        let report = backend.search(loader.load(file.path()).unwrap(), query).await.unwrap();
        assert_eq!(report.input_count, 4);
        assert_eq!(report.output_count, 3, "{mode:?}");

        let mut results = report.results;
        sort_by_distance(&mut results);
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Café Marly", "Le Fumoir", "Zimmer"], "{mode:?}");
        assert_eq!(results[0].distance, 0.0);
        for result in &results {
            let expected = haversine_distance(
                louvre.latitude,
                louvre.longitude,
                result.latitude,
                result.longitude,
            );
            assert!((result.distance - expected).abs() <= 0.005);
        }
    }

    // One real read, then cache hits for every other load.
    assert_eq!(loader.cache_stats().misses, 1);
    assert_eq!(loader.cache_stats().hits, 3);
}

#[actix_rt::test]
async fn test_growing_radius_only_adds_results() {
    let records = Arc::new(vec![
        RestaurantRecord::new("Near", 48.8610, 2.3380),
        RestaurantRecord::new("Middle", 48.8700, 2.3500),
        RestaurantRecord::new("Far", 48.8584, 2.2945),
    ]);
    let louvre = find_place("Louvre").unwrap();

    for mode in modes() {
        let backend = FilterBackend::from_mode(&mode);
        let mut previous: Vec<String> = Vec::new();
        for radius in [0.0, 100.0, 1_500.0, 4_000.0, 10_000.0] {
            let results = backend
                .filter(Arc::clone(&records), SearchQuery::new(louvre, radius))
                .await
                .unwrap();
            let names: Vec<String> = results.into_iter().map(|r| r.name).collect();
            assert!(previous.iter().all(|n| names.contains(n)), "{mode:?} at {radius}");
            previous = names;
        }
        assert_eq!(previous.len(), 3);
    }
}

#[actix_rt::test]
async fn test_failure_yields_no_results_in_any_mode() {
    let records = Arc::new(vec![
        RestaurantRecord::new("Fine", 48.8610, 2.3380),
        RestaurantRecord::new("Broken", f64::NAN, 2.3380),
    ]);
    let louvre = find_place("Louvre").unwrap();

    for mode in modes() {
        let backend = FilterBackend::from_mode(&mode);
        let err = backend
            .search(Arc::clone(&records), SearchQuery::new(louvre, 1_000.0))
            .await
            .unwrap_err();
        match (&mode, err) {
            (ExecutionMode::Sequential, FilterError::MalformedRecord { name, .. }) => {
                assert_eq!(name, "Broken")
            }
            (ExecutionMode::Partitioned { .. }, FilterError::PartitionFailure { source, .. }) => {
                assert!(matches!(*source, FilterError::MalformedRecord { .. }))
            }
            (mode, err) => panic!("unexpected error {err:?} for {mode:?}"),
        }
    }
}
