// lib/src/config/config_structs.rs

use serde::{Deserialize, Serialize};

use models::errors::RecommendError;

use crate::config::config_defaults::*;

/// Blend of the three owner-to-owner sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    #[serde(default = "default_age_weight")]
    pub age_weight: f64,
    #[serde(default = "default_gender_weight")]
    pub gender_weight: f64,
    #[serde(default = "default_district_weight")]
    pub district_weight: f64,
    /// Curvature of the age parabola `1 - decay * diff^2`.
    #[serde(default = "default_age_decay")]
    pub age_decay: f64,
    /// Gender sub-score when neither side is `Other` and they differ.
    #[serde(default = "default_gender_mismatch_score")]
    pub gender_mismatch_score: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig {
            age_weight: DEFAULT_AGE_WEIGHT,
            gender_weight: DEFAULT_GENDER_WEIGHT,
            district_weight: DEFAULT_DISTRICT_WEIGHT,
            age_decay: DEFAULT_AGE_DECAY,
            gender_mismatch_score: DEFAULT_GENDER_MISMATCH_SCORE,
        }
    }
}

impl SimilarityConfig {
    pub fn validate(self) -> Result<Self, RecommendError> {
        let weights = [self.age_weight, self.gender_weight, self.district_weight];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(RecommendError::ConfigurationError(format!(
                "similarity weights must be finite and non-negative, got {:?}",
                weights
            )));
        }
        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RecommendError::ConfigurationError(format!(
                "similarity weights must sum to 1.0, got {}",
                total
            )));
        }
        if !self.age_decay.is_finite() || self.age_decay < 0.0 {
            return Err(RecommendError::ConfigurationError(format!(
                "age_decay must be finite and non-negative, got {}",
                self.age_decay
            )));
        }
        if !(0.0..=1.0).contains(&self.gender_mismatch_score) {
            return Err(RecommendError::ConfigurationError(format!(
                "gender_mismatch_score must lie in [0.0, 1.0], got {}",
                self.gender_mismatch_score
            )));
        }
        Ok(self)
    }
}

/// Additive prior pulling breeds with few owners toward a neutral score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    #[serde(default = "default_prior_numerator")]
    pub prior_numerator: f64,
    #[serde(default = "default_prior_denominator")]
    pub prior_denominator: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        SmoothingConfig {
            prior_numerator: DEFAULT_PRIOR_NUMERATOR,
            prior_denominator: DEFAULT_PRIOR_DENOMINATOR,
        }
    }
}

impl SmoothingConfig {
    pub fn validate(self) -> Result<Self, RecommendError> {
        // numerator <= denominator keeps the smoothed mean inside [0.0, 1.0]
        if !(self.prior_denominator > 0.0
            && self.prior_numerator >= 0.0
            && self.prior_numerator <= self.prior_denominator)
        {
            return Err(RecommendError::ConfigurationError(format!(
                "smoothing requires 0 <= prior_numerator <= prior_denominator and prior_denominator > 0, got {} / {}",
                self.prior_numerator, self.prior_denominator
            )));
        }
        Ok(self)
    }
}

/// Padded min-max policy applied to raw preference scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferenceNormalizationConfig {
    /// Padding added to each side, as a fraction of the observed spread.
    #[serde(default = "default_padding_ratio")]
    pub padding_ratio: f64,
    /// Lower bound on the padding, used when the spread is zero.
    #[serde(default = "default_minimum_padding")]
    pub minimum_padding: f64,
}

impl Default for PreferenceNormalizationConfig {
    fn default() -> Self {
        PreferenceNormalizationConfig {
            padding_ratio: DEFAULT_PADDING_RATIO,
            minimum_padding: DEFAULT_MINIMUM_PADDING,
        }
    }
}

impl PreferenceNormalizationConfig {
    pub fn validate(self) -> Result<Self, RecommendError> {
        if !(self.padding_ratio.is_finite() && self.padding_ratio >= 0.0) {
            return Err(RecommendError::ConfigurationError(format!(
                "padding_ratio must be finite and non-negative, got {}",
                self.padding_ratio
            )));
        }
        if !(self.minimum_padding.is_finite() && self.minimum_padding > 0.0) {
            return Err(RecommendError::ConfigurationError(format!(
                "minimum_padding must be finite and positive, got {}",
                self.minimum_padding
            )));
        }
        Ok(self)
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    #[serde(default)]
    pub similarity: SimilarityConfig,
    #[serde(default)]
    pub smoothing: SmoothingConfig,
    #[serde(default)]
    pub preference_normalization: PreferenceNormalizationConfig,
    #[serde(default = "default_recommendation_limit")]
    pub default_limit: usize,
    #[serde(default = "default_curve_target_spread")]
    pub curve_target_spread: f64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        RecommenderConfig {
            similarity: SimilarityConfig::default(),
            smoothing: SmoothingConfig::default(),
            preference_normalization: PreferenceNormalizationConfig::default(),
            default_limit: DEFAULT_RECOMMENDATION_LIMIT,
            curve_target_spread: DEFAULT_CURVE_TARGET_SPREAD,
        }
    }
}

impl RecommenderConfig {
    pub fn validate(self) -> Result<Self, RecommendError> {
        self.similarity.validate()?;
        self.smoothing.validate()?;
        self.preference_normalization.validate()?;
        if !(self.curve_target_spread > 0.0 && self.curve_target_spread < 1.0) {
            return Err(RecommendError::ConfigurationError(format!(
                "curve_target_spread must lie strictly between 0.0 and 1.0, got {}",
                self.curve_target_spread
            )));
        }
        Ok(self)
    }
}

/// Top-level `recommender:` key of the YAML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommenderConfigWrapper {
    #[serde(default)]
    pub recommender: RecommenderConfig,
}
