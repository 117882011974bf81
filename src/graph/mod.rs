//! The [`Graph`] container.
//!
//! A graph owns its vertices, its edges and an adjacency index.  The index is
//! the primary structure: the keys of `successors` are the vertex set, and
//! every mutation updates the index and the cached edge set together, so the
//! two never disagree.  Deleting a vertex only touches the entries of its
//! neighbours.
//!
//! Graphs are simple: no loops and no parallel edges.  Adding an edge that is
//! already present is a no-op.
mod construct;

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Display, Formatter},
};

use derivative::Derivative;

use crate::{
    Directedness,
    edge::Edge,
    error::{GraphError, Result},
    graph_id::{GraphId, IntoGraphId},
    search::{BfsIterator, DfsIterator},
    tracing_support::debug,
    vertex::{IntoVertex, Vertex},
};

pub use self::construct::IntoEdgeEnds;

/// A simple graph, directed or undirected, over [`Vertex`] labels.
///
/// Structural equality compares directedness, vertices and edges; the label
/// is ignored.
#[derive(Derivative)]
#[derivative(Clone, Debug, PartialEq)]
pub struct Graph {
    #[derivative(PartialEq = "ignore")]
    id: GraphId,
    directedness: Directedness,
    /// Out-neighbours of every vertex.  The keys are the vertex set.
    successors: BTreeMap<Vertex, BTreeSet<Vertex>>,
    /// In-neighbours of every vertex; only maintained for directed graphs.
    #[derivative(PartialEq = "ignore", Debug = "ignore")]
    predecessors: BTreeMap<Vertex, BTreeSet<Vertex>>,
    /// Cache of the edges described by `successors`.
    #[derivative(PartialEq = "ignore")]
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// Creates an empty undirected graph.
    pub fn new(id: impl IntoGraphId) -> Result<Self> {
        Self::with_directedness(id, Directedness::Undirected)
    }

    /// Creates an empty directed graph.
    pub fn new_directed(id: impl IntoGraphId) -> Result<Self> {
        Self::with_directedness(id, Directedness::Directed)
    }

    pub fn with_directedness(id: impl IntoGraphId, directedness: Directedness) -> Result<Self> {
        Ok(Self::labelled(id.into_graph_id()?, directedness))
    }

    pub(crate) fn labelled(id: GraphId, directedness: Directedness) -> Self {
        Self {
            id,
            directedness,
            successors: BTreeMap::new(),
            predecessors: BTreeMap::new(),
            edges: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &GraphId {
        &self.id
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    // Vertices

    /// Adds a vertex, returning its normalized form.  Adding a vertex that is
    /// already present does nothing.
    pub fn add_vertex(&mut self, vertex: impl IntoVertex) -> Result<Vertex> {
        let vertex = vertex.into_vertex()?;
        self.insert_vertex(&vertex);
        Ok(vertex)
    }

    pub(crate) fn insert_vertex(&mut self, vertex: &Vertex) {
        if !self.successors.contains_key(vertex) {
            debug!(%vertex, graph = %self.id, "adding vertex");
            self.successors.insert(vertex.clone(), BTreeSet::new());
            if self.is_directed() {
                self.predecessors.insert(vertex.clone(), BTreeSet::new());
            }
        }
    }

    /// Removes a vertex and every edge incident to it.  Returns false if the
    /// vertex was not in the graph.
    pub fn del_vertex(&mut self, vertex: impl IntoVertex) -> Result<bool> {
        let vertex = vertex.into_vertex()?;
        let Some(successors) = self.successors.remove(&vertex) else {
            return Ok(false);
        };
        debug!(%vertex, graph = %self.id, degree = successors.len(), "removing vertex");
        for next in successors {
            if self.is_directed() {
                if let Some(preds) = self.predecessors.get_mut(&next) {
                    preds.remove(&vertex);
                }
            } else if let Some(succs) = self.successors.get_mut(&next) {
                succs.remove(&vertex);
            }
            self.edges
                .remove(&Edge::from_distinct(vertex.clone(), next, self.directedness));
        }
        if self.is_directed() {
            for prev in self.predecessors.remove(&vertex).unwrap_or_default() {
                if let Some(succs) = self.successors.get_mut(&prev) {
                    succs.remove(&vertex);
                }
                self.edges
                    .remove(&Edge::from_distinct(prev, vertex.clone(), self.directedness));
            }
        }
        self.debug_check_invariants();
        Ok(true)
    }

    /// The number of vertices.
    pub fn order(&self) -> usize {
        self.successors.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.successors.keys()
    }

    pub fn contains_vertex(&self, vertex: impl IntoVertex) -> bool {
        vertex
            .into_vertex()
            .is_ok_and(|v| self.successors.contains_key(&v))
    }

    /// Normalizes `vertex` and checks that it is in the graph.
    pub(crate) fn require(&self, vertex: impl IntoVertex) -> Result<Vertex> {
        let vertex = vertex.into_vertex()?;
        if self.successors.contains_key(&vertex) {
            Ok(vertex)
        } else {
            Err(GraphError::VertexNotFound(vertex))
        }
    }

    // Edges

    /// Adds an edge between `u` and `v`, adding either vertex if it is new,
    /// and returns the edge.  In a directed graph the edge goes from `u` to
    /// `v`.  Fails without changing the graph if `u == v`.
    pub fn add_edge(&mut self, u: impl IntoVertex, v: impl IntoVertex) -> Result<Edge> {
        let edge = Edge::from_vertices(u.into_vertex()?, v.into_vertex()?, self.directedness)?;
        self.insert_edge(&edge);
        Ok(edge)
    }

    /// Adds an edge in both directions.  In an undirected graph this is the
    /// same as [`Self::add_edge`].  Returns the `u -> v` edge.
    pub fn add_bidirectional_edge(
        &mut self,
        u: impl IntoVertex,
        v: impl IntoVertex,
    ) -> Result<Edge> {
        let (u, v) = (u.into_vertex()?, v.into_vertex()?);
        let edge = Edge::from_vertices(u.clone(), v.clone(), self.directedness)?;
        self.insert_edge(&edge);
        if self.is_directed() {
            self.insert_edge(&Edge::from_distinct(v, u, self.directedness));
        }
        Ok(edge)
    }

    /// Inserts an edge whose directedness matches the graph.
    pub fn insert(&mut self, edge: Edge) -> Result<Edge> {
        if edge.directedness() != self.directedness {
            return Err(GraphError::DirectednessMismatch {
                edge: edge.directedness(),
                graph: self.directedness,
            });
        }
        self.insert_edge(&edge);
        Ok(edge)
    }

    pub(crate) fn insert_edge(&mut self, edge: &Edge) {
        debug_assert_eq!(edge.directedness(), self.directedness);
        if self.edges.contains(edge) {
            return;
        }
        let (u, v) = edge.endpoints();
        self.insert_vertex(u);
        self.insert_vertex(v);
        debug!(%edge, graph = %self.id, "adding edge");
        self.link(u, v);
        if self.is_directed() {
            self.predecessors
                .entry(v.clone())
                .or_default()
                .insert(u.clone());
        } else {
            self.link(v, u);
        }
        self.edges.insert(edge.clone());
        self.debug_check_invariants();
    }

    fn link(&mut self, from: &Vertex, to: &Vertex) {
        self.successors
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
    }

    /// Removes the edge between `u` and `v` (from `u` to `v` in a directed
    /// graph).  Returns false if there was no such edge.
    pub fn del_edge(&mut self, u: impl IntoVertex, v: impl IntoVertex) -> Result<bool> {
        let (u, v) = (u.into_vertex()?, v.into_vertex()?);
        if u == v {
            return Ok(false);
        }
        let edge = Edge::from_distinct(u.clone(), v.clone(), self.directedness);
        if !self.edges.remove(&edge) {
            return Ok(false);
        }
        debug!(%edge, graph = %self.id, "removing edge");
        if let Some(succs) = self.successors.get_mut(&u) {
            succs.remove(&v);
        }
        if self.is_directed() {
            if let Some(preds) = self.predecessors.get_mut(&v) {
                preds.remove(&u);
            }
        } else if let Some(succs) = self.successors.get_mut(&v) {
            succs.remove(&u);
        }
        self.debug_check_invariants();
        Ok(true)
    }

    /// The number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over the edges in sorted order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Returns true if there is an edge from `u` to `v`.
    pub fn has_edge(&self, u: &Vertex, v: &Vertex) -> bool {
        self.successors.get(u).is_some_and(|succs| succs.contains(v))
    }

    /// Membership test for vertices (by id) and edges.
    pub fn contains(&self, element: impl GraphElement) -> bool {
        element.is_in(self)
    }

    // Adjacency

    /// The vertices reachable from `vertex` by one edge, in sorted order.
    pub fn neighbors(&self, vertex: &Vertex) -> Result<impl Iterator<Item = &Vertex> + '_> {
        self.successors
            .get(vertex)
            .map(|succs| succs.iter())
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }

    /// The vertices with an edge into `vertex`, in sorted order.  Same as
    /// [`Self::neighbors`] for undirected graphs.
    pub fn predecessors(&self, vertex: &Vertex) -> Result<impl Iterator<Item = &Vertex> + '_> {
        self.predecessor_set(vertex)
            .map(|preds| preds.iter())
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }

    pub(crate) fn successor_set(&self, vertex: &Vertex) -> Option<&BTreeSet<Vertex>> {
        self.successors.get(vertex)
    }

    pub(crate) fn predecessor_set(&self, vertex: &Vertex) -> Option<&BTreeSet<Vertex>> {
        if self.is_directed() {
            self.predecessors.get(vertex)
        } else {
            self.successors.get(vertex)
        }
    }

    /// The number of edges incident to `vertex`.  For directed graphs this
    /// counts both incoming and outgoing edges.
    pub fn degree(&self, vertex: impl IntoVertex) -> Result<usize> {
        let vertex = self.require(vertex)?;
        let out = self.successors[&vertex].len();
        if self.is_directed() {
            Ok(out + self.predecessors[&vertex].len())
        } else {
            Ok(out)
        }
    }

    pub fn out_degree(&self, vertex: impl IntoVertex) -> Result<usize> {
        let vertex = self.require(vertex)?;
        Ok(self.successors[&vertex].len())
    }

    pub fn in_degree(&self, vertex: impl IntoVertex) -> Result<usize> {
        let vertex = self.require(vertex)?;
        if self.is_directed() {
            Ok(self.predecessors[&vertex].len())
        } else {
            Ok(self.successors[&vertex].len())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Removes all vertices and edges, keeping the label and directedness.
    pub fn clear(&mut self) {
        self.successors.clear();
        self.predecessors.clear();
        self.edges.clear();
    }

    // Searches

    /// Breadth-first traversal from `start`.
    pub fn bfs(&self, start: impl IntoVertex) -> Result<BfsIterator<'_>> {
        Ok(BfsIterator::new(self, self.require(start)?))
    }

    /// Depth-first traversal from `start`.
    pub fn dfs(&self, start: impl IntoVertex) -> Result<DfsIterator<'_>> {
        Ok(DfsIterator::new(self, self.require(start)?))
    }

    // Derived graphs and queries

    /// The complement over the same vertex set.  See
    /// [`operations::complement`](crate::operations::complement).
    pub fn complement(&self) -> Graph {
        crate::operations::complement(self)
    }

    /// The unweighted distance from `source` to `target`.
    pub fn distance(&self, source: impl IntoVertex, target: impl IntoVertex) -> Result<f64> {
        crate::topology::shortest_distance(self, source, target, None)
    }

    /// The unweighted diameter.  See [`topology::diameter`](crate::topology::diameter).
    pub fn diameter(&self) -> crate::topology::Diameter {
        crate::topology::diameter(self, None)
    }

    /// Checks that the adjacency index and the edge cache agree.  Panics
    /// with a description of the first disagreement.
    pub fn check_invariants(&self) {
        let mut expected = BTreeSet::new();
        for (u, succs) in &self.successors {
            for v in succs {
                assert!(
                    self.successors.contains_key(v),
                    "{v} is adjacent to {u} but not a vertex"
                );
                assert!(u != v, "loop at {u}");
                if self.is_directed() {
                    assert!(
                        self.predecessors.get(v).is_some_and(|p| p.contains(u)),
                        "{u} -> {v} missing from the predecessor index"
                    );
                } else {
                    assert!(
                        self.successors[v].contains(u),
                        "{u} -- {v} is only indexed one way"
                    );
                }
                expected.insert(Edge::from_distinct(u.clone(), v.clone(), self.directedness));
            }
        }
        if self.is_directed() {
            let arcs: usize = self.predecessors.values().map(BTreeSet::len).sum();
            assert_eq!(arcs, expected.len(), "stale predecessor entries");
            assert!(
                self.predecessors.keys().eq(self.successors.keys()),
                "predecessor index covers a different vertex set"
            );
        } else {
            assert!(self.predecessors.is_empty());
        }
        assert_eq!(expected, self.edges, "edge cache out of sync");
    }

    fn debug_check_invariants(&self) {
        #[cfg(all(debug_assertions, not(feature = "unchecked")))]
        self.check_invariants();
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Graph {}(Vertices(", self.id)?;
        for (i, v) in self.vertices().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "), Edges(")?;
        for (i, e) in self.edges().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "))")
    }
}

/// Values that can be tested for membership with [`Graph::contains`]: vertex
/// ids and edges.
pub trait GraphElement {
    fn is_in(self, graph: &Graph) -> bool;
}

impl GraphElement for Edge {
    fn is_in(self, graph: &Graph) -> bool {
        graph.contains_edge(&self)
    }
}

impl GraphElement for &Edge {
    fn is_in(self, graph: &Graph) -> bool {
        graph.contains_edge(self)
    }
}

macro_rules! vertex_graph_element {
    ($($t:ty),*) => {
        $(
            impl GraphElement for $t {
                fn is_in(self, graph: &Graph) -> bool {
                    graph.contains_vertex(self)
                }
            }
        )*
    };
}

vertex_graph_element!(
    Vertex, &Vertex, char, &str, String, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize,
    isize
);
