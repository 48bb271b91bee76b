// models/src/districts.rs

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{RecommendError, RecommendResult};

/// Numeric id of a city district.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictId(pub u32);

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DistrictId {
    fn from(id: u32) -> Self {
        DistrictId(id)
    }
}

/// A district whose closeness table has not been computed yet.
///
/// Only [`District::resolve`] can turn it into a [`ResolvedDistrict`], so code
/// holding a `District` cannot query distances at all.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct District {
    pub id: DistrictId,
    pub name: String,
}

impl District {
    pub fn new(id: impl Into<DistrictId>, name: impl Into<String>) -> Self {
        District {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Attaches a closeness table, validating that every value lies in
    /// `[0.0, 1.0]`. An entry pointing back at this district is ignored since
    /// the closeness to itself is always 1.0.
    pub fn resolve(self, closeness: HashMap<DistrictId, f64>) -> RecommendResult<ResolvedDistrict> {
        let mut table = HashMap::with_capacity(closeness.len());
        for (destination, value) in closeness {
            if !(0.0..=1.0).contains(&value) {
                return Err(RecommendError::ClosenessOutOfRange(value));
            }
            if destination != self.id {
                table.insert(destination, value);
            }
        }
        Ok(ResolvedDistrict {
            id: self.id,
            name: self.name,
            closeness: table,
        })
    }
}

/// A district with its closeness to other districts, each in `[0.0, 1.0]`
/// where 1.0 means "same place".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDistrict {
    pub id: DistrictId,
    pub name: String,
    closeness: HashMap<DistrictId, f64>,
}

impl ResolvedDistrict {
    /// Closeness from this district to `destination`.
    ///
    /// Returns 1.0 for the district itself without a lookup.
    ///
    /// # Errors
    /// `DistanceNotSet` when no closeness was recorded for `destination`.
    pub fn closeness_to(&self, destination: DistrictId) -> RecommendResult<f64> {
        if destination == self.id {
            return Ok(1.0);
        }
        self.closeness
            .get(&destination)
            .copied()
            .ok_or(RecommendError::DistanceNotSet {
                origin: self.id,
                destination,
            })
    }

    /// Number of other districts with a known closeness.
    pub fn known_destinations(&self) -> usize {
        self.closeness.len()
    }

    /// Drops the closeness table, returning the unresolved district.
    pub fn unresolved(&self) -> District {
        District {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for ResolvedDistrict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
