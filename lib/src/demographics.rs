// lib/src/demographics.rs

use log::{debug, info};

use models::errors::RecommendResult;
use models::{Identifier, OwnerProfile, Ranked, RankedResult};

use crate::config::{RecommenderConfig, SimilarityConfig, SmoothingConfig};
use crate::engine::OwnerGraph;
use crate::similarity::SimilarityScorer;

/// Ranks breeds by how similar their owners are to a query profile.
///
/// Each breed scores `(sum of owner similarities + n) / (owner count + d)`,
/// with `n` and `d` from [`SmoothingConfig`]. Breeds with few owners are pulled
/// toward `n / d` instead of being decided by a single sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemographicRanker {
    scorer: SimilarityScorer,
    smoothing: SmoothingConfig,
}

impl DemographicRanker {
    pub fn new(similarity: SimilarityConfig, smoothing: SmoothingConfig) -> Self {
        DemographicRanker {
            scorer: SimilarityScorer::new(similarity),
            smoothing,
        }
    }

    pub fn from_config(config: &RecommenderConfig) -> Self {
        Self::new(config.similarity, config.smoothing)
    }

    pub fn smoothed_mean(&self, similarities: &[f64]) -> f64 {
        let total: f64 = similarities.iter().sum();
        (total + self.smoothing.prior_numerator)
            / (similarities.len() as f64 + self.smoothing.prior_denominator)
    }

    /// Smoothed score of every breed in the graph, in graph insertion order.
    pub fn score_breeds(
        &self,
        profile: &OwnerProfile,
        graph: &OwnerGraph,
    ) -> RecommendResult<RankedResult<f64>> {
        let mut scores = Vec::new();
        for breed in graph.breeds() {
            let similarities = graph
                .owners_of(breed)?
                .into_iter()
                .map(|owner| self.scorer.compare(owner, profile))
                .collect::<RecommendResult<Vec<f64>>>()?;
            let score = self.smoothed_mean(&similarities);
            assert!(
                (0.0..=1.0).contains(&score),
                "smoothed score {} for {} outside [0.0, 1.0]",
                score,
                breed
            );
            scores.push(Ranked::new(*breed, score));
        }
        Ok(scores)
    }

    pub fn rank(
        &self,
        profile: &OwnerProfile,
        limit: usize,
        graph: &OwnerGraph,
    ) -> RecommendResult<RankedResult<f64>> {
        let scores = self.score_breeds(profile, graph)?;
        debug!("Scored {} breeds for {}", scores.len(), profile);
        let top = select_top_k(scores, limit);
        info!(
            "Demographic recommendations for {}: {:?}",
            profile.id(),
            top.iter().map(|r| r.item).collect::<Vec<Identifier>>()
        );
        Ok(top)
    }
}

/// Top `limit` breeds for `profile` using the default weights and smoothing.
pub fn get_demographic_recommendations(
    profile: &OwnerProfile,
    limit: usize,
    graph: &OwnerGraph,
) -> RecommendResult<RankedResult<f64>> {
    DemographicRanker::default().rank(profile, limit, graph)
}

/// Repeatedly extracts the highest score. On ties the earliest candidate wins.
/// Returns fewer than `limit` entries when there are fewer candidates.
pub fn select_top_k(mut candidates: RankedResult<f64>, limit: usize) -> RankedResult<f64> {
    let mut top = Vec::with_capacity(limit.min(candidates.len()));
    while top.len() < limit && !candidates.is_empty() {
        let mut best = 0;
        for (i, candidate) in candidates.iter().enumerate().skip(1) {
            if candidate.score > candidates[best].score {
                best = i;
            }
        }
        top.push(candidates.remove(best));
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{District, DistrictId, Gender, GraphItem, OwnerId, ResolvedDistrict};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn breed(name: &str) -> Identifier {
        Identifier::new(name).unwrap()
    }

    fn shared_district() -> Arc<ResolvedDistrict> {
        Arc::new(District::new(1, "Rathaus").resolve(HashMap::new()).unwrap())
    }

    fn ranked(entries: &[(&str, f64)]) -> RankedResult<f64> {
        entries
            .iter()
            .map(|(name, score)| Ranked::new(breed(name), *score))
            .collect()
    }

    #[test]
    fn select_top_k_breaks_ties_by_encounter_order() {
        let top = select_top_k(
            ranked(&[("Pug", 0.5), ("Akita", 0.7), ("Beagle", 0.7), ("Boxer", 0.1)]),
            3,
        );
        let names: Vec<&str> = top.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(names, vec!["Akita", "Beagle", "Pug"]);
    }

    #[test]
    fn select_top_k_returns_fewer_when_short() {
        let top = select_top_k(ranked(&[("Pug", 0.5)]), 4);
        assert_eq!(top.len(), 1);
        assert!(select_top_k(Vec::new(), 2).is_empty());
        assert!(select_top_k(ranked(&[("Pug", 0.5)]), 0).is_empty());
    }

    #[test]
    fn breed_without_owners_gets_the_prior() {
        let mut graph = OwnerGraph::new();
        graph.add_vertex(GraphItem::Breed(breed("Lonely")));
        let query = OwnerProfile::query(30, Gender::Other, shared_district());

        let result = get_demographic_recommendations(&query, 5, &graph).unwrap();
        assert_eq!(result.len(), 1);
        assert!((result[0].score - 0.8).abs() < 1e-12);
    }

    #[test]
    fn ranking_is_non_increasing_and_excludes_owners() {
        let home = shared_district();
        let mut graph = OwnerGraph::new();
        for (id, age, name) in [
            (1, 30, "Pug"),
            (2, 31, "Pug"),
            (3, 70, "Akita"),
            (4, 29, "Beagle"),
            (5, 90, "Akita"),
        ] {
            let owner = OwnerProfile::new(OwnerId(id), age, Gender::Female, home.clone());
            graph.link_owner(owner, breed(name)).unwrap();
        }
        let query = OwnerProfile::query(30, Gender::Female, home);

        let result = get_demographic_recommendations(&query, 10, &graph).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(result[0].item.as_str(), "Pug");
        assert!(result.iter().all(|r| (0.0..=1.0).contains(&r.score)));
    }

    #[test]
    fn smoothing_constants_are_configurable() {
        let ranker = DemographicRanker::new(
            SimilarityConfig::default(),
            SmoothingConfig {
                prior_numerator: 7.0,
                prior_denominator: 10.0,
            },
        );
        assert!((ranker.smoothed_mean(&[1.0, 1.0]) - 9.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn unresolved_distance_propagates() {
        let mut graph = OwnerGraph::new();
        let elsewhere = Arc::new(District::new(2, "Enge").resolve(HashMap::new()).unwrap());
        let owner = OwnerProfile::new(OwnerId(1), 30, Gender::Male, elsewhere);
        graph.link_owner(owner, breed("Pug")).unwrap();
        let query = OwnerProfile::query(30, Gender::Male, shared_district());

        let err = get_demographic_recommendations(&query, 1, &graph).unwrap_err();
        assert!(matches!(
            err,
            models::RecommendError::DistanceNotSet { origin: DistrictId(2), destination: DistrictId(1) }
        ));
    }
}
