// lib/src/lib.rs

//! Dog breed recommendation engine.
//!
//! Two independent ranking paths are offered: a demographic one that scores
//! breeds by how similar their current owners are to the person asking, and a
//! preference one that scores breed trait records against signed weights taken
//! from a questionnaire. An exact-match decision tree and a district distance
//! normalizer complete the toolkit, and [`Recommender`] ties them together.

pub mod config;
pub mod curving;
pub mod decision_tree;
pub mod demographics;
pub mod districts;
pub mod engine;
pub mod preference;
pub mod recommender;
pub mod similarity;

pub use models;
pub use models::{
    BreedTraits, District, DistrictId, Gender, GraphItem, Identifier, OwnerId, OwnerProfile,
    Polarity, Ranked, RankedResult, RawPreferenceAnswers, RecommendError, RecommendResult,
    ResolvedDistrict, TraitWeights,
};

pub use config::{load_recommender_config, RecommenderConfig};
pub use curving::curve_data;
pub use decision_tree::{BreedDecisionTree, DecisionTree, NodeId, TreeKey};
pub use demographics::{get_demographic_recommendations, DemographicRanker};
pub use districts::{normalize_district_distances, NormalizedDistances, RawDistance};
pub use engine::{Graph, OwnerGraph, UndirectedGraph, WeightedGraph};
pub use preference::{
    get_preference_recommendations, normalize_preference_recommendations,
    weight_raw_preference_data, PreferenceNormalizer,
};
pub use recommender::{Questionnaire, Recommendations, Recommender};
pub use similarity::{OwnerSimilarity, SimilarityScorer};
