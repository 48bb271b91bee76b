// lib/src/districts.rs

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use models::errors::{RecommendError, RecommendResult};
use models::{District, DistrictId, ResolvedDistrict};

/// One directed travel distance between two districts, in kilometres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawDistance {
    pub origin: DistrictId,
    pub destination: DistrictId,
    pub kilometers: f64,
}

impl RawDistance {
    pub fn new(origin: impl Into<DistrictId>, destination: impl Into<DistrictId>, kilometers: f64) -> Self {
        RawDistance {
            origin: origin.into(),
            destination: destination.into(),
            kilometers,
        }
    }
}

/// Closeness between district pairs, min-max rescaled so the shortest
/// distance maps to 1.0 and the longest to 0.0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedDistances {
    closeness: HashMap<(DistrictId, DistrictId), f64>,
}

/// Rescales a raw distance table into closeness values.
///
/// # Errors
/// * `SelfDistance` for a pair whose endpoints are the same district
/// * `InvalidDistance` for a negative or non-finite distance
/// * `EmptyDistanceTable` when `distances` is empty
/// * `DegenerateDistanceTable` when the longest distance is zero or every
///   distance is equal
pub fn normalize_district_distances(distances: &[RawDistance]) -> RecommendResult<NormalizedDistances> {
    for d in distances {
        if d.origin == d.destination {
            return Err(RecommendError::SelfDistance(d.origin));
        }
        if !d.kilometers.is_finite() || d.kilometers < 0.0 {
            return Err(RecommendError::InvalidDistance {
                origin: d.origin,
                destination: d.destination,
                kilometers: d.kilometers,
            });
        }
    }
    if distances.is_empty() {
        return Err(RecommendError::EmptyDistanceTable);
    }

    let min = distances.iter().map(|d| d.kilometers).fold(f64::INFINITY, f64::min);
    let max = distances.iter().map(|d| d.kilometers).fold(f64::NEG_INFINITY, f64::max);
    if max == 0.0 || max == min {
        return Err(RecommendError::DegenerateDistanceTable { min, max });
    }
    debug!("Normalizing {} distances, min {} km, max {} km", distances.len(), min, max);

    let mut closeness = HashMap::with_capacity(distances.len());
    for d in distances {
        let value = 1.0 - (d.kilometers - min) / (max - min);
        if !(0.0..=1.0).contains(&value) {
            return Err(RecommendError::ClosenessOutOfRange(value));
        }
        if closeness.insert((d.origin, d.destination), value).is_some() {
            warn!(
                "Duplicate distance from {} to {}, keeping the later value",
                d.origin, d.destination
            );
        }
    }
    Ok(NormalizedDistances { closeness })
}

impl NormalizedDistances {
    /// Closeness recorded for the directed pair, if any.
    pub fn get(&self, origin: DistrictId, destination: DistrictId) -> Option<f64> {
        self.closeness.get(&(origin, destination)).copied()
    }

    /// Closeness between two districts regardless of direction: the mean of
    /// both directions when both were measured, otherwise the one present.
    pub fn symmetric(&self, a: DistrictId, b: DistrictId) -> Option<f64> {
        match (self.get(a, b), self.get(b, a)) {
            (Some(x), Some(y)) => Some((x + y) / 2.0),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.closeness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closeness.is_empty()
    }

    /// Commits the table into `districts`, resolving each one.
    ///
    /// Every district receives the symmetric closeness to every other district
    /// of the set for which a distance is known. Pairs without any measurement
    /// stay unset and surface later as `DistanceNotSet`.
    ///
    /// # Errors
    /// `UnknownDistrict` if the table mentions a district not in `districts`.
    pub fn apply(&self, districts: Vec<District>) -> RecommendResult<Vec<Arc<ResolvedDistrict>>> {
        let ids: BTreeSet<DistrictId> = districts.iter().map(|d| d.id).collect();
        for (origin, destination) in self.closeness.keys() {
            for id in [origin, destination] {
                if !ids.contains(id) {
                    return Err(RecommendError::UnknownDistrict(*id));
                }
            }
        }

        let mut resolved = Vec::with_capacity(districts.len());
        for district in districts {
            let table: HashMap<DistrictId, f64> = ids
                .iter()
                .filter(|other| **other != district.id)
                .filter_map(|other| self.symmetric(district.id, *other).map(|v| (*other, v)))
                .collect();
            let district = district.resolve(table)?;
            debug!(
                "Resolved district {} with {} known destinations",
                district,
                district.known_destinations()
            );
            resolved.push(Arc::new(district));
        }
        info!("Resolved {} districts", resolved.len());
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn districts() -> Vec<District> {
        vec![
            District::new(1, "Rathaus"),
            District::new(2, "Enge"),
            District::new(3, "Oerlikon"),
        ]
    }

    #[test]
    fn min_max_rescales_to_closeness() {
        let table = normalize_district_distances(&[
            RawDistance::new(1, 2, 10.0),
            RawDistance::new(1, 3, 20.0),
            RawDistance::new(2, 3, 30.0),
        ])
        .unwrap();
        assert_eq!(table.get(DistrictId(1), DistrictId(2)), Some(1.0));
        assert_eq!(table.get(DistrictId(1), DistrictId(3)), Some(0.5));
        assert_eq!(table.get(DistrictId(2), DistrictId(3)), Some(0.0));
        assert_eq!(table.get(DistrictId(3), DistrictId(2)), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn degenerate_tables_are_rejected() {
        assert!(matches!(
            normalize_district_distances(&[]),
            Err(RecommendError::EmptyDistanceTable)
        ));
        assert!(matches!(
            normalize_district_distances(&[RawDistance::new(1, 2, 0.0), RawDistance::new(2, 1, 0.0)]),
            Err(RecommendError::DegenerateDistanceTable { .. })
        ));
        assert!(matches!(
            normalize_district_distances(&[RawDistance::new(1, 2, 4.0), RawDistance::new(2, 3, 4.0)]),
            Err(RecommendError::DegenerateDistanceTable { .. })
        ));
    }

    #[test]
    fn self_pairs_and_bad_distances_are_rejected() {
        assert!(matches!(
            normalize_district_distances(&[RawDistance::new(2, 2, 1.0)]),
            Err(RecommendError::SelfDistance(DistrictId(2)))
        ));
        assert!(matches!(
            normalize_district_distances(&[RawDistance::new(1, 2, -1.0), RawDistance::new(1, 3, 2.0)]),
            Err(RecommendError::InvalidDistance { .. })
        ));
        assert!(matches!(
            normalize_district_distances(&[RawDistance::new(1, 2, f64::NAN)]),
            Err(RecommendError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn apply_resolves_symmetric_closeness() {
        let table = normalize_district_distances(&[
            RawDistance::new(1, 2, 10.0),
            RawDistance::new(2, 1, 20.0),
            RawDistance::new(1, 3, 30.0),
        ])
        .unwrap();
        let resolved = table.apply(districts()).unwrap();
        assert_eq!(resolved.len(), 3);

        let rathaus = &resolved[0];
        let enge = &resolved[1];
        let oerlikon = &resolved[2];
        assert_eq!(rathaus.closeness_to(DistrictId(2)).unwrap(), 0.75);
        assert_eq!(enge.closeness_to(DistrictId(1)).unwrap(), 0.75);
        assert_eq!(oerlikon.closeness_to(DistrictId(1)).unwrap(), 0.0);
        assert_eq!(rathaus.closeness_to(DistrictId(1)).unwrap(), 1.0);
        assert!(matches!(
            enge.closeness_to(DistrictId(3)),
            Err(RecommendError::DistanceNotSet { .. })
        ));
    }

    #[test]
    fn apply_rejects_unknown_districts() {
        let table = normalize_district_distances(&[
            RawDistance::new(1, 2, 10.0),
            RawDistance::new(1, 9, 30.0),
        ])
        .unwrap();
        assert!(matches!(
            table.apply(districts()),
            Err(RecommendError::UnknownDistrict(DistrictId(9)))
        ));
    }
}
