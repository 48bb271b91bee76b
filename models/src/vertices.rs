// models/src/vertices.rs

use std::fmt;

use crate::identifiers::Identifier;
use crate::owners::OwnerProfile;

/// An item stored in the owner/breed graph.
///
/// Breeds are keyed by name and owners by their id, so a breed vertex and an
/// owner vertex can never collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GraphItem {
    Owner(OwnerProfile),
    Breed(Identifier),
}

impl GraphItem {
    pub fn as_owner(&self) -> Option<&OwnerProfile> {
        match self {
            GraphItem::Owner(owner) => Some(owner),
            GraphItem::Breed(_) => None,
        }
    }

    pub fn as_breed(&self) -> Option<&Identifier> {
        match self {
            GraphItem::Breed(name) => Some(name),
            GraphItem::Owner(_) => None,
        }
    }
}

impl From<OwnerProfile> for GraphItem {
    fn from(owner: OwnerProfile) -> Self {
        GraphItem::Owner(owner)
    }
}

impl From<Identifier> for GraphItem {
    fn from(name: Identifier) -> Self {
        GraphItem::Breed(name)
    }
}

impl fmt::Display for GraphItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphItem::Owner(owner) => write!(f, "{}", owner),
            GraphItem::Breed(name) => write!(f, "breed {}", name),
        }
    }
}
