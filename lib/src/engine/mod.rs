pub mod graph;
pub mod owner_graph;
pub mod weighted;

// Public re-exports
pub use graph::{Graph, UndirectedGraph};
pub use owner_graph::OwnerGraph;
pub use weighted::{WeightedGraph, DEFAULT_EDGE_WEIGHT};
