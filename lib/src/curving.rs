// lib/src/curving.rs

//! Display-time curving of scores already in `[0.0, 1.0]`.
//!
//! With `d` the lowest score and `top` the highest, every score is remapped by
//!
//! ```text
//! f(s) = top * ((s + d) / (top + d))^p
//! p    = ln(1 - target_spread) / ln((min + d) / (top + d))
//! ```
//!
//! which is `(s + d)^p` rescaled so the top score keeps its value. The curved
//! minimum then sits exactly `target_spread` below the curved maximum in
//! proportional terms, `1 - f(min) / f(top) = target_spread`. Since `p > 0` the
//! map is strictly increasing, and every output lies in `(0.0, top]`, so no
//! clamping is needed.

use log::debug;

use models::errors::{RecommendError, RecommendResult};
use models::{Ranked, RankedResult};

/// Curves `scores` toward `target_spread`, keeping their order.
///
/// # Errors
/// * `EmptyScores` for an empty list
/// * `InvalidSpread` unless `0 < target_spread < 1`
/// * `ScoreOutOfRange` if any score lies outside `[0.0, 1.0]`
/// * `DegenerateScores` if the minimum is exactly 0 or 1, all scores are
///   equal, or a curved value comes out non-finite or outside `[0.0, 1.0]`
pub fn curve_data(target_spread: f64, scores: &[Ranked<f64>]) -> RecommendResult<RankedResult<f64>> {
    if scores.is_empty() {
        return Err(RecommendError::EmptyScores);
    }
    if !(target_spread > 0.0 && target_spread < 1.0) {
        return Err(RecommendError::InvalidSpread(target_spread));
    }
    if let Some(bad) = scores.iter().find(|r| !(0.0..=1.0).contains(&r.score)) {
        return Err(RecommendError::ScoreOutOfRange(bad.score));
    }

    let min = scores.iter().map(|r| r.score).fold(f64::INFINITY, f64::min);
    let top = scores.iter().map(|r| r.score).fold(f64::NEG_INFINITY, f64::max);
    if min == 0.0 || min == 1.0 {
        return Err(RecommendError::DegenerateScores(format!(
            "minimum score is exactly {}",
            min
        )));
    }
    if min == top {
        return Err(RecommendError::DegenerateScores(format!(
            "all scores equal {}",
            min
        )));
    }

    let shift = min;
    let exponent = (1.0 - target_spread).ln() / ((min + shift) / (top + shift)).ln();
    if !exponent.is_finite() || exponent <= 0.0 {
        return Err(RecommendError::DegenerateScores(format!(
            "exponent {} is not usable",
            exponent
        )));
    }
    debug!(
        "Curving {} scores: min {}, max {}, shift {}, exponent {}",
        scores.len(),
        min,
        top,
        shift,
        exponent
    );

    let mut curved = Vec::with_capacity(scores.len());
    for r in scores {
        let value = top * ((r.score + shift) / (top + shift)).powf(exponent);
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(RecommendError::DegenerateScores(format!(
                "score {} of {} curves to {}",
                r.score, r.item, value
            )));
        }
        curved.push(Ranked::new(r.item, value));
    }
    Ok(curved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Identifier;

    fn scores(values: &[f64]) -> RankedResult<f64> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Ranked::new(Identifier::new(format!("breed-{}", i)).unwrap(), *v))
            .collect()
    }

    fn assert_well_curved(input: &[f64], target_spread: f64) {
        let ranked = scores(input);
        let curved = curve_data(target_spread, &ranked).unwrap();

        assert_eq!(curved.len(), ranked.len());
        for (a, b) in ranked.iter().zip(&curved) {
            assert_eq!(a.item, b.item);
            assert!((0.0..=1.0).contains(&b.score), "{} outside [0, 1]", b.score);
        }
        assert!(
            curved.windows(2).all(|w| w[0].score > w[1].score),
            "order not kept: {:?}",
            curved.iter().map(|r| r.score).collect::<Vec<_>>()
        );
        let first = curved[0].score;
        let last = curved[curved.len() - 1].score;
        assert!((first - input[0]).abs() < 1e-12);
        assert!((1.0 - last / first - target_spread).abs() < 1e-9);
    }

    #[test]
    fn low_range_reaches_target_gap() {
        assert_well_curved(&[0.8, 0.6, 0.4], 0.5);
    }

    #[test]
    fn demographic_range_stays_distinct() {
        assert_well_curved(&[9.0 / 11.0, 0.78, 9.5 / 13.0], 0.5);
        assert_well_curved(&[0.85, 0.8, 0.75, 0.7], 0.3);
    }

    #[test]
    fn normalized_preference_range_keeps_top_below_one() {
        assert_well_curved(&[0.75, 0.6, 0.5], 0.5);
        assert_well_curved(&[0.75, 0.6, 0.4, 0.25], 0.8);
    }

    #[test]
    fn equal_inputs_stay_tied() {
        let curved = curve_data(0.3, &scores(&[0.9, 0.85, 0.85, 0.7, 0.55])).unwrap();
        assert_eq!(curved[1].score, curved[2].score);
        assert!(curved[0].score > curved[1].score);
        assert!(curved[2].score > curved[3].score);
        assert!(curved[3].score > curved[4].score);
    }

    #[test]
    fn degenerate_inputs_fail_predictably() {
        assert!(matches!(curve_data(0.5, &[]), Err(RecommendError::EmptyScores)));
        assert!(matches!(
            curve_data(0.5, &scores(&[0.5, 0.0])),
            Err(RecommendError::DegenerateScores(_))
        ));
        assert!(matches!(
            curve_data(0.5, &scores(&[1.0, 1.0])),
            Err(RecommendError::DegenerateScores(_))
        ));
        assert!(matches!(
            curve_data(0.5, &scores(&[0.3, 0.3])),
            Err(RecommendError::DegenerateScores(_))
        ));
        assert!(matches!(
            curve_data(0.5, &scores(&[1.2, 0.3])),
            Err(RecommendError::ScoreOutOfRange(_))
        ));
        assert!(matches!(
            curve_data(1.0, &scores(&[0.6, 0.3])),
            Err(RecommendError::InvalidSpread(_))
        ));
    }
}
