// lib/src/engine/graph.rs

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::trace;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use models::errors::{RecommendError, RecommendResult};

/// Undirected graph keyed by item equality.
///
/// Vertices are created on first insertion and never removed, so iteration
/// over [`UndirectedGraph::get_all_nodes`] follows insertion order. Every edge
/// endpoint must already be a vertex and self loops are rejected, which keeps
/// adjacency symmetric and loop-free.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<T, E> {
    inner: UnGraph<T, E>,
    index: HashMap<T, NodeIndex>,
}

/// Graph whose edges carry no data.
pub type Graph<T> = UndirectedGraph<T, ()>;

impl<T, E> Default for UndirectedGraph<T, E>
where
    T: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> UndirectedGraph<T, E>
where
    T: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        UndirectedGraph {
            inner: UnGraph::default(),
            index: HashMap::new(),
        }
    }

    /// Adds `item` as a vertex. Adding an existing item is a no-op.
    pub fn add_vertex(&mut self, item: T) {
        if self.index.contains_key(&item) {
            return;
        }
        let node = self.inner.add_node(item.clone());
        trace!("Added vertex {:?} at {:?}", item, node);
        self.index.insert(item, node);
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    /// Whether `a` and `b` share an edge. Unknown items are never adjacent.
    pub fn adjacent(&self, a: &T, b: &T) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&na), Some(&nb)) => self.inner.find_edge(na, nb).is_some(),
            _ => false,
        }
    }

    /// Items adjacent to `item`.
    ///
    /// # Errors
    /// `UnknownVertex` if `item` was never added.
    pub fn get_neighbours(&self, item: &T) -> RecommendResult<Vec<T>> {
        Ok(self.neighbours(item)?.cloned().collect())
    }

    /// Borrowing form of [`UndirectedGraph::get_neighbours`].
    pub fn neighbours(&self, item: &T) -> RecommendResult<impl Iterator<Item = &T> + '_> {
        let node = self.node_of(item)?;
        Ok(self.inner.neighbors(node).map(move |n| &self.inner[n]))
    }

    pub fn degree(&self, item: &T) -> RecommendResult<usize> {
        let node = self.node_of(item)?;
        Ok(self.inner.edges(node).count())
    }

    /// All items, in insertion order.
    pub fn get_all_nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.inner.node_weights()
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub(crate) fn node_of(&self, item: &T) -> RecommendResult<NodeIndex> {
        self.index
            .get(item)
            .copied()
            .ok_or_else(|| RecommendError::UnknownVertex(format!("{:?}", item)))
    }

    /// Inserts or overwrites the edge between `a` and `b`.
    pub(crate) fn connect(&mut self, a: &T, b: &T, data: E) -> RecommendResult<()> {
        if a == b {
            return Err(RecommendError::SelfLoop(format!("{:?}", a)));
        }
        let na = self.node_of(a)?;
        let nb = self.node_of(b)?;
        self.inner.update_edge(na, nb, data);
        Ok(())
    }

    /// Edge data of every edge touching `item`.
    pub(crate) fn incident_edges(&self, item: &T) -> RecommendResult<impl Iterator<Item = &E> + '_> {
        let node = self.node_of(item)?;
        Ok(self.inner.edges(node).map(|edge| edge.weight()))
    }

    pub(crate) fn edge_between(&self, a: &T, b: &T) -> RecommendResult<Option<&E>> {
        let na = self.node_of(a)?;
        let nb = self.node_of(b)?;
        Ok(self
            .inner
            .find_edge(na, nb)
            .and_then(|edge| self.inner.edge_weight(edge)))
    }
}

impl<T> UndirectedGraph<T, ()>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Adds an edge between two existing vertices.
    ///
    /// # Errors
    /// `UnknownVertex` if either endpoint is absent, `SelfLoop` if `a == b`.
    pub fn add_edge(&mut self, a: &T, b: &T) -> RecommendResult<()> {
        self.connect(a, b, ())
    }
}
