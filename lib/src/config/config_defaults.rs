// lib/src/config/config_defaults.rs

use std::path::PathBuf;

pub use crate::config::config_constants::*;

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}

pub fn default_age_weight() -> f64 { DEFAULT_AGE_WEIGHT }
pub fn default_gender_weight() -> f64 { DEFAULT_GENDER_WEIGHT }
pub fn default_district_weight() -> f64 { DEFAULT_DISTRICT_WEIGHT }
pub fn default_age_decay() -> f64 { DEFAULT_AGE_DECAY }
pub fn default_gender_mismatch_score() -> f64 { DEFAULT_GENDER_MISMATCH_SCORE }
pub fn default_prior_numerator() -> f64 { DEFAULT_PRIOR_NUMERATOR }
pub fn default_prior_denominator() -> f64 { DEFAULT_PRIOR_DENOMINATOR }
pub fn default_padding_ratio() -> f64 { DEFAULT_PADDING_RATIO }
pub fn default_minimum_padding() -> f64 { DEFAULT_MINIMUM_PADDING }
pub fn default_recommendation_limit() -> usize { DEFAULT_RECOMMENDATION_LIMIT }
pub fn default_curve_target_spread() -> f64 { DEFAULT_CURVE_TARGET_SPREAD }
