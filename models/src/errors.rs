// models/src/errors.rs

use std::io;
pub use thiserror::Error;

use crate::districts::DistrictId;

/// Errors raised by the recommendation engine.
///
/// Structural failures (unknown vertices, unset distances, degenerate tables)
/// are always reported here rather than being folded into a default score.
/// A decision-tree lookup miss is not an error and never produces one of these.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
    #[error("self loop rejected on vertex {0}")]
    SelfLoop(String),
    #[error("vertex {0} has no neighbours, average weight is undefined")]
    ZeroDegree(String),

    #[error("closeness from district {origin} to district {destination} is not set")]
    DistanceNotSet {
        origin: DistrictId,
        destination: DistrictId,
    },
    #[error("district {0} is not part of the district set")]
    UnknownDistrict(DistrictId),
    #[error("district {0} cannot have a distance to itself")]
    SelfDistance(DistrictId),
    #[error("invalid distance {kilometers} km from district {origin} to district {destination}")]
    InvalidDistance {
        origin: DistrictId,
        destination: DistrictId,
        kilometers: f64,
    },
    #[error("distance table is empty")]
    EmptyDistanceTable,
    #[error("distance table is degenerate (min {min} km, max {max} km)")]
    DegenerateDistanceTable { min: f64, max: f64 },
    #[error("closeness {0} is outside [0.0, 1.0]")]
    ClosenessOutOfRange(f64),

    #[error("score list is empty")]
    EmptyScores,
    #[error("score list is degenerate: {0}")]
    DegenerateScores(String),
    #[error("score {0} is outside [0.0, 1.0]")]
    ScoreOutOfRange(f64),
    #[error("target spread {0} must lie strictly between 0.0 and 1.0")]
    InvalidSpread(f64),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A validation error.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// An identifier has an invalid length.
    #[error("identifier has invalid length")]
    InvalidIdentifierLength,
    /// A gender code outside the closed `F`/`M`/`O` set.
    #[error("unknown gender '{0}'")]
    InvalidGender(String),
    /// A polarity answer other than positive or negative.
    #[error("unknown polarity '{0}', expected 'positive' or 'negative'")]
    InvalidPolarity(String),
    /// An age range that could not be parsed or is inverted.
    #[error("invalid age range '{0}'")]
    InvalidAgeRange(String),
}

/// A type alias for a `Result` that returns a `RecommendError` on failure.
pub type RecommendResult<T> = Result<T, RecommendError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
