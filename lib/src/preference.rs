// lib/src/preference.rs

//! Preference decision matrix.
//!
//! Every breed scores the dot product of the person's signed trait weights
//! with the breed's trait values. Raw scores are unbounded integers and are
//! only brought into `(0.0, 1.0)` by [`PreferenceNormalizer`].

use log::{debug, info};

use models::errors::{RecommendError, RecommendResult};
use models::{BreedTraits, Ranked, RankedResult, RawPreferenceAnswers, TraitWeights, TRAIT_NAMES};

use crate::config::PreferenceNormalizationConfig;

/// Top `limit` breeds by raw weighted score. The sort is stable, so breeds
/// with equal scores keep their input order.
pub fn get_preference_recommendations(
    breeds: &[BreedTraits],
    limit: usize,
    weights: &TraitWeights,
) -> RankedResult<i64> {
    let mut scores: RankedResult<i64> = breeds
        .iter()
        .map(|breed| Ranked::new(breed.name, weights.dot(breed)))
        .collect();
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores.truncate(limit);
    debug!("Preference matrix kept {} of {} breeds", scores.len(), breeds.len());
    scores
}

/// Turns questionnaire answers into signed weights.
///
/// Shedding always counts against a breed. Barking and stimulation needs take
/// the sign of the stated polarity. Every other answer is used as is.
pub fn weight_raw_preference_data(answers: &RawPreferenceAnswers) -> TraitWeights {
    let weights = TraitWeights {
        affectionate_with_family: answers.affectionate_with_family,
        good_with_young_children: answers.good_with_young_children,
        good_with_other_dogs: answers.good_with_other_dogs,
        shedding_level: -answers.shedding_level,
        openness_to_strangers: answers.openness_to_strangers,
        playfulness: answers.playfulness,
        protective_nature: answers.protective_nature,
        adaptability: answers.adaptability,
        trainability: answers.trainability,
        energy: answers.energy,
        barking: answers.barking_polarity.sign() * answers.barking_importance,
        stimulation_needs: answers.stimulation_polarity.sign() * answers.stimulation_importance,
    };
    debug!(
        "Preference weights: {:?}",
        TRAIT_NAMES.iter().zip(weights.values()).collect::<Vec<_>>()
    );
    weights
}

/// Padded min-max rescaling of raw preference scores.
///
/// The observed `[min, max]` range is widened by the same padding on both
/// sides, `max(padding_ratio * (max - min), minimum_padding)`, so every output
/// lies strictly inside `(0.0, 1.0)`. A single score, or a list of equal
/// scores, maps to 0.5.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceNormalizer {
    policy: PreferenceNormalizationConfig,
}

impl PreferenceNormalizer {
    pub fn new(policy: PreferenceNormalizationConfig) -> Self {
        PreferenceNormalizer { policy }
    }

    /// # Errors
    /// `EmptyScores` if `scores` is empty.
    pub fn normalize(&self, scores: &[Ranked<i64>]) -> RecommendResult<RankedResult<f64>> {
        let (min, max) = scores
            .iter()
            .map(|r| r.score)
            .fold(None, |bounds: Option<(i64, i64)>, score| match bounds {
                None => Some((score, score)),
                Some((lo, hi)) => Some((lo.min(score), hi.max(score))),
            })
            .ok_or(RecommendError::EmptyScores)?;

        let spread = (max - min) as f64;
        let padding = (self.policy.padding_ratio * spread).max(self.policy.minimum_padding);
        let low = min as f64 - padding;
        let width = spread + 2.0 * padding;
        debug!(
            "Normalizing {} preference scores: min {}, max {}, padded range [{}, {}]",
            scores.len(),
            min,
            max,
            low,
            low + width
        );

        let normalized: RankedResult<f64> = scores
            .iter()
            .map(|r| Ranked::new(r.item, (r.score as f64 - low) / width))
            .collect();
        for r in &normalized {
            assert!(
                r.score > 0.0 && r.score < 1.0,
                "normalized score {} for {} outside (0.0, 1.0)",
                r.score,
                r.item
            );
        }
        info!(
            "Normalized preference scores: {:?}",
            normalized.iter().map(|r| (r.item.as_str(), r.score)).collect::<Vec<_>>()
        );
        Ok(normalized)
    }
}

/// [`PreferenceNormalizer::normalize`] with the default padding policy.
pub fn normalize_preference_recommendations(
    scores: &[Ranked<i64>],
) -> RecommendResult<RankedResult<f64>> {
    PreferenceNormalizer::default().normalize(scores)
}
