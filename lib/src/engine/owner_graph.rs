// lib/src/engine/owner_graph.rs

use log::debug;

use models::errors::RecommendResult;
use models::{GraphItem, Identifier, OwnerProfile};

use crate::engine::graph::{Graph, UndirectedGraph};

/// Graph linking breeds to the owners that keep them.
pub type OwnerGraph = Graph<GraphItem>;

impl UndirectedGraph<GraphItem, ()> {
    /// Records that `owner` keeps a dog of `breed`, adding either vertex if
    /// it is not present yet.
    pub fn link_owner(&mut self, owner: OwnerProfile, breed: Identifier) -> RecommendResult<()> {
        let owner = GraphItem::Owner(owner);
        let breed = GraphItem::Breed(breed);
        self.add_vertex(owner.clone());
        self.add_vertex(breed.clone());
        self.add_edge(&breed, &owner)
    }

    /// Breed vertices, in insertion order.
    pub fn breeds(&self) -> impl Iterator<Item = &Identifier> + '_ {
        self.get_all_nodes().filter_map(GraphItem::as_breed)
    }

    /// Owners recorded for `breed`.
    ///
    /// # Errors
    /// `UnknownVertex` if the breed is not in the graph.
    pub fn owners_of(&self, breed: &Identifier) -> RecommendResult<Vec<&OwnerProfile>> {
        let owners: Vec<&OwnerProfile> = self
            .neighbours(&GraphItem::Breed(*breed))?
            .filter_map(GraphItem::as_owner)
            .collect();
        debug!("Breed {} has {} recorded owners", breed, owners.len());
        Ok(owners)
    }
}
