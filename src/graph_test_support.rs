use std::collections::HashSet;

use quickcheck::Arbitrary;

use crate::{
    Directedness, Graph,
    tracing_support::{info_span, init_tracing},
    vertex::Vertex,
};

/// A random graph with integer vertices for property tests.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let directedness = Directedness::from(bool::arbitrary(g));

        let mut graph = Graph::with_order("arbitrary", directedness, num_vertices)
            .unwrap_or_else(|e| panic!("building test graph: {e}"));
        if num_vertices >= 2 {
            for _ in 0..num_edges {
                let source = usize::arbitrary(g) % num_vertices;
                let target = usize::arbitrary(g) % num_vertices;
                if source != target {
                    graph
                        .add_edge(source, target)
                        .unwrap_or_else(|e| panic!("building test graph: {e}"));
                }
            }
        }
        ArbGraph { graph }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let graph = self.graph.clone();
        let vertices: Vec<Vertex> = graph.vertices().cloned().collect();
        Box::new(vertices.into_iter().rev().map(move |v| {
            let mut smaller = graph.clone();
            let _ = smaller.del_vertex(&v);
            ArbGraph { graph: smaller }
        }))
    }
}

/// Checks the internal consistency of a graph through its public interface.
pub fn check_graph_consistency(graph: &Graph) {
    init_tracing();
    {
        let _span = info_span!("check_invariants").entered();
        graph.check_invariants();
    }

    let vertices: HashSet<&Vertex> = graph.vertices().collect();
    assert_eq!(vertices.len(), graph.order());
    assert_eq!(graph.is_empty(), graph.order() == 0);

    let mut out_total = 0;
    let mut in_total = 0;
    for v in graph.vertices() {
        let _span = info_span!("check_vertex").entered();
        let out = graph.out_degree(v).unwrap_or_else(|e| panic!("{e}"));
        let into = graph.in_degree(v).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(out, graph.neighbors(v).map(Iterator::count).unwrap_or(0));
        assert_eq!(into, graph.predecessors(v).map(Iterator::count).unwrap_or(0));
        for next in graph.neighbors(v).into_iter().flatten() {
            assert!(graph.has_edge(v, next));
            assert!(graph.predecessors(next).is_ok_and(|mut p| p.any(|p| p == v)));
        }
        out_total += out;
        in_total += into;
    }

    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges.len(), graph.size());
    for edge in &edges {
        let _span = info_span!("check_edge").entered();
        assert_eq!(edge.directedness(), graph.directedness());
        let (u, v) = edge.endpoints();
        assert!(vertices.contains(u) && vertices.contains(v));
        assert!(graph.has_edge(u, v));
        if !graph.is_directed() {
            assert!(graph.has_edge(v, u));
        }
    }

    if graph.is_directed() {
        assert_eq!(out_total, graph.size());
        assert_eq!(in_total, graph.size());
    } else {
        assert_eq!(out_total, 2 * graph.size());
    }
}
