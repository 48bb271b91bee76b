// models/src/lib.rs

//! Shared types for the pawmatch recommender: owner profiles, districts,
//! breed trait records, ranked results and the error taxonomy.

pub mod breeds;
pub mod districts;
pub mod errors;
pub mod identifiers;
pub mod owners;
pub mod ranking;
pub mod vertices;

pub use breeds::{BreedTraits, Polarity, RawPreferenceAnswers, TraitWeights, TRAIT_COUNT, TRAIT_NAMES};
pub use districts::{District, DistrictId, ResolvedDistrict};
pub use errors::{RecommendError, RecommendResult, ValidationError, ValidationResult};
pub use identifiers::Identifier;
pub use owners::{AgeRange, Gender, OwnerId, OwnerProfile};
pub use ranking::{Ranked, RankedResult};
pub use vertices::GraphItem;
