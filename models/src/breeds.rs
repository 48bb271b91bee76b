// models/src/breeds.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::identifiers::Identifier;

/// Number of scored traits per breed.
pub const TRAIT_COUNT: usize = 12;

/// Trait names in vector order.
pub const TRAIT_NAMES: [&str; TRAIT_COUNT] = [
    "affectionate_with_family",
    "good_with_young_children",
    "good_with_other_dogs",
    "shedding_level",
    "openness_to_strangers",
    "playfulness",
    "protective_nature",
    "adaptability",
    "trainability",
    "energy",
    "barking",
    "stimulation_needs",
];

/// A breed and its twelve characteristic scores, each on a 1 to 5 scale.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreedTraits {
    pub name: Identifier,
    pub affectionate_with_family: u8,
    pub good_with_young_children: u8,
    pub good_with_other_dogs: u8,
    pub shedding_level: u8,
    pub openness_to_strangers: u8,
    pub playfulness: u8,
    pub protective_nature: u8,
    pub adaptability: u8,
    pub trainability: u8,
    pub energy: u8,
    pub barking: u8,
    pub stimulation_needs: u8,
}

impl BreedTraits {
    /// Builds a record from trait values given in [`TRAIT_NAMES`] order.
    pub fn from_values(name: Identifier, values: [u8; TRAIT_COUNT]) -> Self {
        let [affectionate_with_family, good_with_young_children, good_with_other_dogs, shedding_level, openness_to_strangers, playfulness, protective_nature, adaptability, trainability, energy, barking, stimulation_needs] =
            values;
        BreedTraits {
            name,
            affectionate_with_family,
            good_with_young_children,
            good_with_other_dogs,
            shedding_level,
            openness_to_strangers,
            playfulness,
            protective_nature,
            adaptability,
            trainability,
            energy,
            barking,
            stimulation_needs,
        }
    }

    /// Trait values in [`TRAIT_NAMES`] order.
    pub fn values(&self) -> [u8; TRAIT_COUNT] {
        [
            self.affectionate_with_family,
            self.good_with_young_children,
            self.good_with_other_dogs,
            self.shedding_level,
            self.openness_to_strangers,
            self.playfulness,
            self.protective_nature,
            self.adaptability,
            self.trainability,
            self.energy,
            self.barking,
            self.stimulation_needs,
        ]
    }
}

/// Signed per-trait weights. A negative weight penalizes the trait.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitWeights {
    pub affectionate_with_family: i32,
    pub good_with_young_children: i32,
    pub good_with_other_dogs: i32,
    pub shedding_level: i32,
    pub openness_to_strangers: i32,
    pub playfulness: i32,
    pub protective_nature: i32,
    pub adaptability: i32,
    pub trainability: i32,
    pub energy: i32,
    pub barking: i32,
    pub stimulation_needs: i32,
}

impl TraitWeights {
    /// Weights in [`TRAIT_NAMES`] order.
    pub fn values(&self) -> [i32; TRAIT_COUNT] {
        [
            self.affectionate_with_family,
            self.good_with_young_children,
            self.good_with_other_dogs,
            self.shedding_level,
            self.openness_to_strangers,
            self.playfulness,
            self.protective_nature,
            self.adaptability,
            self.trainability,
            self.energy,
            self.barking,
            self.stimulation_needs,
        ]
    }

    /// Weighted sum of the breed's traits.
    pub fn dot(&self, breed: &BreedTraits) -> i64 {
        self.values()
            .iter()
            .zip(breed.values())
            .map(|(weight, value)| i64::from(*weight) * i64::from(value))
            .sum()
    }
}

impl From<[i32; TRAIT_COUNT]> for TraitWeights {
    fn from(values: [i32; TRAIT_COUNT]) -> Self {
        let [affectionate_with_family, good_with_young_children, good_with_other_dogs, shedding_level, openness_to_strangers, playfulness, protective_nature, adaptability, trainability, energy, barking, stimulation_needs] =
            values;
        TraitWeights {
            affectionate_with_family,
            good_with_young_children,
            good_with_other_dogs,
            shedding_level,
            openness_to_strangers,
            playfulness,
            protective_nature,
            adaptability,
            trainability,
            energy,
            barking,
            stimulation_needs,
        }
    }
}

/// Whether a person considers a trait desirable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn sign(self) -> i32 {
        match self {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
        }
    }
}

impl FromStr for Polarity {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Polarity::Positive),
            "negative" => Ok(Polarity::Negative),
            _ => Err(ValidationError::InvalidPolarity(s.to_string())),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => f.write_str("positive"),
            Polarity::Negative => f.write_str("negative"),
        }
    }
}

/// Answers as collected from the questionnaire, before they are turned into
/// signed [`TraitWeights`].
///
/// Importance values are on a 1 to 5 scale. `shedding_level` states how much
/// shedding bothers the person, so it always counts against a breed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPreferenceAnswers {
    pub affectionate_with_family: i32,
    pub good_with_young_children: i32,
    pub good_with_other_dogs: i32,
    pub shedding_level: i32,
    pub openness_to_strangers: i32,
    pub playfulness: i32,
    pub protective_nature: i32,
    pub adaptability: i32,
    pub trainability: i32,
    pub energy: i32,
    pub barking_polarity: Polarity,
    pub barking_importance: i32,
    pub stimulation_polarity: Polarity,
    pub stimulation_importance: i32,
}
