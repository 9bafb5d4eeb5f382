use crate::constants::EARTH_RADIUS_METERS;
use crate::types::reference_point::ReferencePoint;
use rand::Rng;

/// Great-circle distance in meters between two coordinates given in degrees.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_METERS`].
/// Inputs are not range checked: out-of-range degrees still produce a number,
/// and non-finite inputs propagate as NaN.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Rounds `value` half away from zero to `decimals` decimal places.
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Returns a random point at most `spread_meters` away from `center`.
///
/// The offset is computed on a local flat approximation, which is accurate
/// enough for city-scale spreads. A negative or non-finite spread yields the
/// centre itself. Longitudes wrap around the antimeridian.
pub fn random_point_near<R: Rng + ?Sized>(
    rng: &mut R,
    center: ReferencePoint,
    spread_meters: f64,
) -> ReferencePoint {
    let spread = if spread_meters.is_finite() {
        spread_meters.max(0.0)
    } else {
        0.0
    };
    let distance = rng.gen_range(0.0..=spread);
    let bearing = rng.gen_range(0.0..std::f64::consts::TAU);

    let delta_lat = (distance * bearing.cos() / EARTH_RADIUS_METERS).to_degrees();
    let cos_lat = center.latitude.to_radians().cos().max(1e-6);
    let delta_lon = (distance * bearing.sin() / (EARTH_RADIUS_METERS * cos_lat)).to_degrees();

    ReferencePoint::new(
        (center.latitude + delta_lat).clamp(-90.0, 90.0),
        (center.longitude + delta_lon + 180.0).rem_euclid(360.0) - 180.0,
    )
}
