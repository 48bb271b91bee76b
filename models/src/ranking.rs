// models/src/ranking.rs

use serde::{Deserialize, Serialize};

use crate::identifiers::Identifier;

/// One entry of a ranked recommendation list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ranked<S> {
    pub item: Identifier,
    pub score: S,
}

impl<S> Ranked<S> {
    pub fn new(item: Identifier, score: S) -> Self {
        Ranked { item, score }
    }
}

/// Recommendations ordered by non-increasing score.
pub type RankedResult<S> = Vec<Ranked<S>>;
