pub use crate::{
    directedness::Directedness,
    edge::Edge,
    error::{GraphError, Result},
    graph::{Graph, GraphElement, IntoEdgeEnds},
    graph_id::{GraphId, IntoGraphId},
    isomorphism::{IsomorphismChecker, IsomorphismReport, are_isomorphic},
    operations::{complement, cross_product},
    path::Path,
    topology::{
        Diameter, ShortestPaths, all_pairs_distances, diameter, distances_from, distances_to,
        shortest_distance, shortest_distances, shortest_path,
    },
    vertex::{IntoVertex, Vertex, VertexId, VertexKind},
    weights::Weights,
};

#[cfg(feature = "pathfinding")]
pub use crate::topology::{connected_components, is_connected, strongly_connected_components};
