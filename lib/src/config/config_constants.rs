// lib/src/config/config_constants.rs

pub const DEFAULT_CONFIG_PATH: &str = "pawmatch.yaml";
pub const CONFIG_ENV_PREFIX: &str = "PAWMATCH";
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// Owner similarity
pub const DEFAULT_AGE_WEIGHT: f64 = 0.4;
pub const DEFAULT_GENDER_WEIGHT: f64 = 0.2;
pub const DEFAULT_DISTRICT_WEIGHT: f64 = 0.4;
pub const DEFAULT_AGE_DECAY: f64 = 0.0001;
pub const DEFAULT_GENDER_MISMATCH_SCORE: f64 = 0.5;
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

// Demographic smoothing: (sum + numerator) / (count + denominator)
pub const DEFAULT_PRIOR_NUMERATOR: f64 = 8.0;
pub const DEFAULT_PRIOR_DENOMINATOR: f64 = 10.0;

// Preference score padding
pub const DEFAULT_PADDING_RATIO: f64 = 0.5;
pub const DEFAULT_MINIMUM_PADDING: f64 = 1.0;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;
pub const DEFAULT_CURVE_TARGET_SPREAD: f64 = 0.5;
