use common::types::reference_point::ReferencePoint;
use common::types::restaurant_record::RestaurantRecord;
use common::utils::random_point_near;
use rand::Rng;

/// Generates `count` restaurants scattered within `spread_meters` of `center`.
///
/// Used to load-test the filters without a real dataset on disk.
pub fn generate_records<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    center: ReferencePoint,
    spread_meters: f64,
) -> Vec<RestaurantRecord> {
    (0..count)
        .map(|i| {
            let point = random_point_near(rng, center, spread_meters);
            RestaurantRecord::new(format!("Synthetic #{i}"), point.latitude, point.longitude)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generates_requested_count_with_unique_names() {
        let mut rng = StdRng::seed_from_u64(42);
        let centre = ReferencePoint::new(48.8566, 2.3522);
        let records = generate_records(&mut rng, 100, centre, 5_000.0);
        assert_eq!(records.len(), 100);
        assert_eq!(records[0].name, "Synthetic #0");
        assert_eq!(records[99].name, "Synthetic #99");
        assert!(records.iter().all(|r| r.has_finite_position()));
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let center = ReferencePoint::new(48.8566, 2.3522);
        let first = generate_records(&mut StdRng::seed_from_u64(1), 20, center, 1_000.0);
        let second = generate_records(&mut StdRng::seed_from_u64(1), 20, center, 1_000.0);
        assert_eq!(first, second);
    }
}
