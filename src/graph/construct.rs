use crate::{
    Directedness, Graph,
    edge::Edge,
    error::{GraphError, Result},
    graph_id::IntoGraphId,
    vertex::IntoVertex,
};

/// Values that describe the two ends of an edge: pairs of vertex ids, or
/// existing [`Edge`]s.
pub trait IntoEdgeEnds {
    /// Converts to an edge for a graph of the given directedness.  An
    /// existing edge must already have that directedness.
    fn into_edge(self, directedness: Directedness) -> Result<Edge>;
}

impl<A, B> IntoEdgeEnds for (A, B)
where
    A: IntoVertex,
    B: IntoVertex,
{
    fn into_edge(self, directedness: Directedness) -> Result<Edge> {
        Edge::from_vertices(self.0.into_vertex()?, self.1.into_vertex()?, directedness)
    }
}

impl IntoEdgeEnds for Edge {
    fn into_edge(self, directedness: Directedness) -> Result<Edge> {
        if self.directedness() != directedness {
            return Err(GraphError::DirectednessMismatch {
                edge: self.directedness(),
                graph: directedness,
            });
        }
        Ok(self)
    }
}

impl IntoEdgeEnds for &Edge {
    fn into_edge(self, directedness: Directedness) -> Result<Edge> {
        self.clone().into_edge(directedness)
    }
}

impl Graph {
    /// Creates an undirected graph from a vertex list and an edge list.
    /// Endpoints missing from `vertices` are added.
    pub fn from_parts<V, E>(
        id: impl IntoGraphId,
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self>
    where
        V: IntoVertex,
        E: IntoEdgeEnds,
    {
        let mut graph = Self::new(id)?;
        for v in vertices {
            graph.add_vertex(v)?;
        }
        graph.extend_edges(edges)?;
        Ok(graph)
    }

    /// Creates a graph containing exactly the endpoints of `edges`.
    pub fn from_edges<E>(
        id: impl IntoGraphId,
        directedness: Directedness,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self>
    where
        E: IntoEdgeEnds,
    {
        let mut graph = Self::with_directedness(id, directedness)?;
        graph.extend_edges(edges)?;
        Ok(graph)
    }

    /// Creates a graph with vertices `0..order` and no edges.
    pub fn with_order(
        id: impl IntoGraphId,
        directedness: Directedness,
        order: usize,
    ) -> Result<Self> {
        let mut graph = Self::with_directedness(id, directedness)?;
        for i in 0..order {
            graph.add_vertex(i)?;
        }
        Ok(graph)
    }

    /// Creates a graph from an adjacency list: each vertex paired with the
    /// vertices it has edges to.
    pub fn from_adjacency<V, N, U>(
        id: impl IntoGraphId,
        directedness: Directedness,
        adjacency: impl IntoIterator<Item = (V, N)>,
    ) -> Result<Self>
    where
        V: IntoVertex,
        N: IntoIterator<Item = U>,
        U: IntoVertex,
    {
        let mut graph = Self::with_directedness(id, directedness)?;
        for (v, neighbors) in adjacency {
            let v = graph.add_vertex(v)?;
            for u in neighbors {
                graph.add_edge(&v, u)?;
            }
        }
        Ok(graph)
    }

    /// Adds every edge in `edges`.  If any edge is invalid the graph is left
    /// unchanged.
    pub fn extend_edges<E>(&mut self, edges: impl IntoIterator<Item = E>) -> Result<()>
    where
        E: IntoEdgeEnds,
    {
        let directedness = self.directedness;
        let edges = edges
            .into_iter()
            .map(|e| e.into_edge(directedness))
            .collect::<Result<Vec<_>>>()?;
        for edge in &edges {
            self.insert_edge(edge);
        }
        Ok(())
    }
}
