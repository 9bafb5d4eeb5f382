/// Mean radius of the Earth used by the haversine formula, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
/// Number of decimals kept on the distance attached to each result.
pub const DISTANCE_DECIMALS: i32 = 2;

pub const DEFAULT_LATITUDE: f64 = 48.865;
pub const DEFAULT_LONGITUDE: f64 = 2.380;
pub const DEFAULT_RADIUS_METERS: f64 = 1000.0;

pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_CACHE_CAPACITY: usize = 8;

pub const DEFAULT_DATA_PATH: &str = "data/restaurants.geojson";
