// lib/src/engine/weighted.rs

use std::fmt::Debug;
use std::hash::Hash;

use models::errors::{RecommendError, RecommendResult};

use crate::engine::graph::UndirectedGraph;

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Graph storing a numeric weight per edge.
pub type WeightedGraph<T> = UndirectedGraph<T, f64>;

impl<T> UndirectedGraph<T, f64>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Adds an edge with [`DEFAULT_EDGE_WEIGHT`].
    pub fn add_edge(&mut self, a: &T, b: &T) -> RecommendResult<()> {
        self.add_weighted_edge(a, b, DEFAULT_EDGE_WEIGHT)
    }

    /// Adds an edge, or overwrites the weight of an existing one.
    pub fn add_weighted_edge(&mut self, a: &T, b: &T, weight: f64) -> RecommendResult<()> {
        self.connect(a, b, weight)
    }

    /// Weight of the edge between `a` and `b`, 0.0 when they are not adjacent.
    ///
    /// # Errors
    /// `UnknownVertex` if either item is absent.
    pub fn get_weight(&self, a: &T, b: &T) -> RecommendResult<f64> {
        Ok(self.edge_between(a, b)?.copied().unwrap_or(0.0))
    }

    /// Mean weight over the edges touching `item`.
    ///
    /// # Errors
    /// `UnknownVertex` if `item` is absent, `ZeroDegree` if it has no edges.
    pub fn average_weight(&self, item: &T) -> RecommendResult<f64> {
        let (total, count) = self
            .incident_edges(item)?
            .fold((0.0, 0usize), |(total, count), weight| (total + weight, count + 1));
        if count == 0 {
            return Err(RecommendError::ZeroDegree(format!("{:?}", item)));
        }
        Ok(total / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted() -> WeightedGraph<u32> {
        let mut graph = WeightedGraph::new();
        for v in [1, 2, 4, 8] {
            graph.add_vertex(v);
        }
        graph.add_weighted_edge(&1, &2, 3.0).unwrap();
        graph.add_weighted_edge(&1, &4, 5.0).unwrap();
        graph
    }

    #[test]
    fn weight_is_symmetric() {
        let graph = weighted();
        assert_eq!(graph.get_weight(&1, &2).unwrap(), 3.0);
        assert_eq!(graph.get_weight(&2, &1).unwrap(), 3.0);
    }

    #[test]
    fn default_weight_is_one() {
        let mut graph = weighted();
        graph.add_edge(&2, &4).unwrap();
        assert_eq!(graph.get_weight(&4, &2).unwrap(), DEFAULT_EDGE_WEIGHT);
    }

    #[test]
    fn non_adjacent_weight_is_zero() {
        let graph = weighted();
        assert_eq!(graph.get_weight(&2, &4).unwrap(), 0.0);
        assert!(matches!(
            graph.get_weight(&2, &99),
            Err(RecommendError::UnknownVertex(_))
        ));
    }

    #[test]
    fn average_weight_over_neighbours() {
        let graph = weighted();
        assert_eq!(graph.average_weight(&1).unwrap(), 4.0);
        assert_eq!(graph.average_weight(&2).unwrap(), 3.0);
    }

    #[test]
    fn average_weight_rejects_isolated_vertex() {
        let graph = weighted();
        assert!(matches!(
            graph.average_weight(&8),
            Err(RecommendError::ZeroDegree(_))
        ));
    }

    #[test]
    fn overwriting_an_edge_replaces_its_weight() {
        let mut graph = weighted();
        graph.add_weighted_edge(&2, &1, 7.0).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.get_weight(&1, &2).unwrap(), 7.0);
    }
}
