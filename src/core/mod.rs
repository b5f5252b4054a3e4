// Core algorithm exports
pub mod distance;
pub mod matcher;
pub mod prediction;
pub mod scoring;

pub use distance::{haversine_distance, GeoIndex, UNKNOWN_DISTANCE_KM};
pub use matcher::{Matcher, DEFAULT_MIN_SCORE, DEFAULT_TOP_LIMIT};
pub use prediction::predict_sale;
pub use scoring::calculate_match_score;
