//! Small in-memory graphs over integer, float and character labels.
//!
//! A [`Graph`] is a simple graph, directed or undirected, that keeps its
//! adjacency index and edge set in step on every mutation.  On top of it the
//! crate provides breadth- and depth-first search, unweighted and weighted
//! shortest paths ([`topology`]), complements and Cartesian products
//! ([`operations`]), matrix views ([`matrix`]) and exact isomorphism testing
//! for small graphs ([`isomorphism`]).
//!
//! ```
//! use smallgraph::prelude::*;
//!
//! let mut g = Graph::new("G")?;
//! g.add_edge('a', 'b')?;
//! g.add_edge('b', 'c')?;
//! assert_eq!(g.distance('a', 'c')?, 2.0);
//! assert_eq!(g.complement().size(), 1);
//! # Ok::<(), GraphError>(())
//! ```

pub mod directedness;
pub mod edge;
pub mod error;
pub mod graph;
pub mod graph_id;
pub mod isomorphism;
pub mod matrix;
pub mod operations;
pub mod path;
pub mod prelude;
pub mod search;
pub mod topology;
pub mod tracing_support;
pub mod vertex;
pub mod weights;

mod util;

#[cfg(test)]
mod graph_test_support;

pub use crate::{
    directedness::Directedness,
    edge::Edge,
    error::{GraphError, Result},
    graph::Graph,
    vertex::{IntoVertex, Vertex},
    weights::Weights,
};
