// lib/src/recommender.rs

use log::{debug, info};
use serde::{Deserialize, Serialize};

use models::errors::RecommendResult;
use models::{BreedTraits, Identifier, OwnerProfile, Ranked, RankedResult, RawPreferenceAnswers, TRAIT_COUNT};

use crate::config::RecommenderConfig;
use crate::curving::curve_data;
use crate::decision_tree::BreedDecisionTree;
use crate::demographics::DemographicRanker;
use crate::engine::OwnerGraph;
use crate::preference::{get_preference_recommendations, weight_raw_preference_data, PreferenceNormalizer};

/// Everything a person submits in one recommendation request.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    pub profile: OwnerProfile,
    pub preferences: RawPreferenceAnswers,
    /// Falls back to the configured default limit.
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub demographic: RankedResult<f64>,
    pub preference: RankedResult<f64>,
    pub preference_raw: RankedResult<i64>,
}

/// Entry point tying the owner graph, the breed catalogue and the exact-match
/// tree together under one configuration.
#[derive(Debug, Clone)]
pub struct Recommender {
    graph: OwnerGraph,
    breeds: Vec<BreedTraits>,
    tree: BreedDecisionTree,
    config: RecommenderConfig,
    ranker: DemographicRanker,
    normalizer: PreferenceNormalizer,
}

impl Recommender {
    /// # Errors
    /// `ConfigurationError` if `config` does not validate.
    pub fn new(graph: OwnerGraph, breeds: Vec<BreedTraits>, config: RecommenderConfig) -> RecommendResult<Self> {
        let config = config.validate()?;
        let tree = BreedDecisionTree::from_breeds(&breeds);
        info!(
            "Recommender ready: {} graph vertices, {} breed records",
            graph.vertex_count(),
            breeds.len()
        );
        Ok(Recommender {
            ranker: DemographicRanker::from_config(&config),
            normalizer: PreferenceNormalizer::new(config.preference_normalization),
            graph,
            breeds,
            tree,
            config,
        })
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    pub fn graph(&self) -> &OwnerGraph {
        &self.graph
    }

    pub fn breeds(&self) -> &[BreedTraits] {
        &self.breeds
    }

    /// Runs both ranking paths for one questionnaire.
    ///
    /// An empty breed catalogue yields empty preference lists rather than an
    /// error.
    pub fn recommend(&self, questionnaire: &Questionnaire) -> RecommendResult<Recommendations> {
        let limit = questionnaire.limit.unwrap_or(self.config.default_limit);
        debug!("Recommending up to {} breeds for {}", limit, questionnaire.profile);

        let demographic = self.ranker.rank(&questionnaire.profile, limit, &self.graph)?;

        let weights = weight_raw_preference_data(&questionnaire.preferences);
        let preference_raw = get_preference_recommendations(&self.breeds, limit, &weights);
        let preference = if preference_raw.is_empty() {
            Vec::new()
        } else {
            self.normalizer.normalize(&preference_raw)?
        };

        Ok(Recommendations {
            demographic,
            preference,
            preference_raw,
        })
    }

    /// Breeds whose trait values equal `traits` exactly.
    pub fn exact_match(&self, traits: &[u8; TRAIT_COUNT]) -> Vec<Identifier> {
        self.tree.lookup_breeds(traits)
    }

    /// Curves `scores` with the configured target spread.
    pub fn curve(&self, scores: &[Ranked<f64>]) -> RecommendResult<RankedResult<f64>> {
        curve_data(self.config.curve_target_spread, scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{District, Gender, OwnerId, Polarity, RecommendError};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn answers() -> RawPreferenceAnswers {
        RawPreferenceAnswers {
            affectionate_with_family: 3,
            good_with_young_children: 3,
            good_with_other_dogs: 3,
            shedding_level: 3,
            openness_to_strangers: 3,
            playfulness: 3,
            protective_nature: 3,
            adaptability: 3,
            trainability: 3,
            energy: 3,
            barking_polarity: Polarity::Negative,
            barking_importance: 3,
            stimulation_polarity: Polarity::Positive,
            stimulation_importance: 3,
        }
    }

    fn build(breeds: Vec<BreedTraits>) -> (Recommender, OwnerProfile) {
        let home = Arc::new(District::new(1, "Rathaus").resolve(HashMap::new()).unwrap());
        let mut graph = OwnerGraph::new();
        for (i, breed) in breeds.iter().enumerate() {
            let owner = OwnerProfile::new(OwnerId(i as u64), 30, Gender::Female, home.clone());
            graph.link_owner(owner, breed.name).unwrap();
        }
        let query = OwnerProfile::query(30, Gender::Female, home);
        let recommender = Recommender::new(graph, breeds, RecommenderConfig::default()).unwrap();
        (recommender, query)
    }

    #[test]
    fn empty_catalogue_gives_empty_preference_lists() {
        let (recommender, profile) = build(Vec::new());
        let result = recommender
            .recommend(&Questionnaire {
                profile,
                preferences: answers(),
                limit: None,
            })
            .unwrap();
        assert!(result.demographic.is_empty());
        assert!(result.preference.is_empty());
        assert!(result.preference_raw.is_empty());
    }

    #[test]
    fn recommend_honours_limit_and_exact_match() {
        let beagle = BreedTraits::from_values(
            Identifier::new("Beagle").unwrap(),
            [3, 5, 5, 3, 3, 4, 2, 4, 3, 4, 4, 4],
        );
        let pug = BreedTraits::from_values(
            Identifier::new("Pug").unwrap(),
            [5, 5, 4, 4, 5, 5, 3, 5, 4, 3, 1, 3],
        );
        let (recommender, profile) = build(vec![beagle.clone(), pug]);

        let result = recommender
            .recommend(&Questionnaire {
                profile,
                preferences: answers(),
                limit: Some(1),
            })
            .unwrap();
        assert_eq!(result.demographic.len(), 1);
        assert_eq!(result.preference.len(), 1);
        assert_eq!(result.preference[0].score, 0.5);

        assert_eq!(recommender.exact_match(&beagle.values()), vec![beagle.name]);
        assert!(recommender.exact_match(&[2; TRAIT_COUNT]).is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = RecommenderConfig::default();
        config.curve_target_spread = 1.5;
        assert!(matches!(
            Recommender::new(OwnerGraph::new(), Vec::new(), config),
            Err(RecommendError::ConfigurationError(_))
        ));
    }
}
