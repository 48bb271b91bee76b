// lib/src/similarity.rs

//! Owner-to-owner similarity.
//!
//! Three sub-scores, each in `[0.0, 1.0]`, are blended with the configured
//! weights:
//!
//! * age: a downward parabola `1 - decay * diff^2`, floored at zero
//! * gender: 1.0 on a match or when either side is `Other`, otherwise the
//!   configured mismatch score
//! * district: the closeness recorded in the owner's resolved district
//!
//! The blend is clamped to `[0.0, 1.0]`.

use log::trace;

use models::errors::RecommendResult;
use models::{Gender, OwnerProfile};

use crate::config::SimilarityConfig;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer {
    config: SimilarityConfig,
}

impl SimilarityScorer {
    pub fn new(config: SimilarityConfig) -> Self {
        SimilarityScorer { config }
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    pub fn age_score(&self, a: u32, b: u32) -> f64 {
        let diff = f64::from(a.abs_diff(b));
        (1.0 - self.config.age_decay * diff * diff).max(0.0)
    }

    pub fn gender_score(&self, a: Gender, b: Gender) -> f64 {
        if a.is_compatible_with(b) {
            1.0
        } else {
            self.config.gender_mismatch_score
        }
    }

    /// Similarity of `owner` to `other` in `[0.0, 1.0]`.
    ///
    /// The two profiles are expected to describe different people; comparing
    /// a profile with itself simply yields the maximum score.
    ///
    /// # Errors
    /// `DistanceNotSet` when `owner`'s district has no closeness recorded for
    /// `other`'s district.
    pub fn compare(&self, owner: &OwnerProfile, other: &OwnerProfile) -> RecommendResult<f64> {
        let age = self.age_score(owner.age(), other.age());
        let gender = self.gender_score(owner.gender(), other.gender());
        let district = owner.district().closeness_to(other.district().id)?;
        debug_assert!((0.0..=1.0).contains(&age));
        debug_assert!((0.0..=1.0).contains(&gender));
        debug_assert!((0.0..=1.0).contains(&district));

        let blended = self.config.age_weight * age
            + self.config.gender_weight * gender
            + self.config.district_weight * district;
        let score = blended.clamp(0.0, 1.0);
        assert!(
            (0.0..=1.0).contains(&score),
            "similarity {} outside [0.0, 1.0]",
            score
        );
        trace!(
            "compare {} with {}: age {:.4}, gender {:.2}, district {:.4} -> {:.4}",
            owner.id(),
            other.id(),
            age,
            gender,
            district,
            score
        );
        Ok(score)
    }
}

/// `owner.compare(other)` with the default weights.
pub trait OwnerSimilarity {
    fn compare(&self, other: &OwnerProfile) -> RecommendResult<f64>;
}

impl OwnerSimilarity for OwnerProfile {
    fn compare(&self, other: &OwnerProfile) -> RecommendResult<f64> {
        SimilarityScorer::default().compare(self, other)
    }
}
