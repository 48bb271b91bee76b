// models/src/owners.rs

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::districts::ResolvedDistrict;
use crate::errors::{ValidationError, ValidationResult};

/// Identity of a dog owner in the source records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub u64);

impl OwnerId {
    /// Id reserved for the person asking for a recommendation.
    pub const QUERY: OwnerId = OwnerId(u64::MAX);
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// `Other` is compatible with every gender.
    pub fn is_compatible_with(self, other: Gender) -> bool {
        self == other || self == Gender::Other || other == Gender::Other
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "female" => Ok(Gender::Female),
            "m" | "male" => Ok(Gender::Male),
            "o" | "other" => Ok(Gender::Other),
            _ => Err(ValidationError::InvalidGender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Gender::Female => "F",
            Gender::Male => "M",
            Gender::Other => "O",
        };
        f.write_str(code)
    }
}

/// An inclusive age bracket such as `"51-60"`, as published in owner records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeRange {
    pub low: u32,
    pub high: u32,
}

impl AgeRange {
    pub fn new(low: u32, high: u32) -> ValidationResult<Self> {
        if low > high {
            return Err(ValidationError::InvalidAgeRange(format!("{}-{}", low, high)));
        }
        Ok(AgeRange { low, high })
    }

    /// Integer midpoint, used as the owner's age.
    pub fn representative(&self) -> u32 {
        self.low + (self.high - self.low) / 2
    }
}

impl FromStr for AgeRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        let invalid = || ValidationError::InvalidAgeRange(s.to_string());
        let (low, high) = s.split_once('-').ok_or_else(invalid)?;
        let low = low.trim().parse::<u32>().map_err(|_| invalid())?;
        let high = high.trim().parse::<u32>().map_err(|_| invalid())?;
        AgeRange::new(low, high)
    }
}

/// A dog owner, or a person looking for a dog.
///
/// Two profiles are equal when their ids are equal; the remaining fields are
/// fixed at construction.
#[derive(Clone, Debug)]
pub struct OwnerProfile {
    id: OwnerId,
    age: u32,
    gender: Gender,
    district: Arc<ResolvedDistrict>,
}

impl OwnerProfile {
    pub fn new(id: OwnerId, age: u32, gender: Gender, district: Arc<ResolvedDistrict>) -> Self {
        OwnerProfile {
            id,
            age,
            gender,
            district,
        }
    }

    /// Builds a profile whose age is the midpoint of `ages`.
    pub fn from_age_range(
        id: OwnerId,
        ages: AgeRange,
        gender: Gender,
        district: Arc<ResolvedDistrict>,
    ) -> Self {
        Self::new(id, ages.representative(), gender, district)
    }

    /// Profile for the person asking for a recommendation.
    pub fn query(age: u32, gender: Gender, district: Arc<ResolvedDistrict>) -> Self {
        Self::new(OwnerId::QUERY, age, gender, district)
    }

    pub fn id(&self) -> OwnerId {
        self.id
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn district(&self) -> &ResolvedDistrict {
        &self.district
    }
}

impl PartialEq for OwnerProfile {
    fn eq(&self, other: &OwnerProfile) -> bool {
        self.id == other.id
    }
}

impl Eq for OwnerProfile {}

impl Hash for OwnerProfile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for OwnerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner {} ({}, {}, {})", self.id, self.age, self.gender, self.district)
    }
}
