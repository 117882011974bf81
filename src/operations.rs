//! Graphs derived from other graphs.

use crate::{
    Graph,
    edge::Edge,
    graph_id::GraphId,
    tracing_support::{debug, info_span},
    vertex::Vertex,
};

/// The complement of `graph`: the same vertices, with an edge between every
/// pair of distinct vertices that are not adjacent in `graph`.  For directed
/// graphs each ordered pair is considered separately.
///
/// The result is labelled `Complement of <label>`.
pub fn complement(graph: &Graph) -> Graph {
    let _span = info_span!("complement", graph = %graph.id()).entered();
    let directedness = graph.directedness();
    let mut result = Graph::labelled(
        GraphId::Text(format!("Complement of {}", graph.id())),
        directedness,
    );
    for v in graph.vertices() {
        result.insert_vertex(v);
    }
    for u in graph.vertices() {
        for v in graph.vertices() {
            if u == v || graph.has_edge(u, v) || (!directedness.is_directed() && u > v) {
                continue;
            }
            result.insert_edge(&Edge::from_distinct(u.clone(), v.clone(), directedness));
        }
    }
    debug!(size = result.size(), "complement built");
    result
}

/// The Cartesian product of two graphs.
///
/// The vertices are the pairs `(a, b)` of a vertex from each input.  `(a, b)`
/// is joined to `(a', b)` when `a -> a'` in `first`, and to `(a, b')` when
/// `b -> b'` in `second`.  The result is directed if either input is; edges
/// that come from an undirected input then go both ways.
pub fn cross_product(first: &Graph, second: &Graph) -> Graph {
    let _span = info_span!("cross_product", first = %first.id(), second = %second.id()).entered();
    let mut result = Graph::labelled(
        GraphId::Text(format!("{} x {}", first.id(), second.id())),
        first.directedness().combine(second.directedness()),
    );
    for a in first.vertices() {
        for b in second.vertices() {
            result.insert_vertex(&Vertex::pair(a.clone(), b.clone()));
        }
    }
    for a in first.vertices() {
        for b in second.vertices() {
            let here = Vertex::pair(a.clone(), b.clone());
            for next in first.successor_set(a).into_iter().flatten() {
                let there = Vertex::pair(next.clone(), b.clone());
                add_product_edge(&mut result, &here, there, !first.is_directed());
            }
            for next in second.successor_set(b).into_iter().flatten() {
                let there = Vertex::pair(a.clone(), next.clone());
                add_product_edge(&mut result, &here, there, !second.is_directed());
            }
        }
    }
    debug!(order = result.order(), size = result.size(), "cross product built");
    result
}

fn add_product_edge(result: &mut Graph, from: &Vertex, to: Vertex, both_ways: bool) {
    let directedness = result.directedness();
    if both_ways && directedness.is_directed() {
        result.insert_edge(&Edge::from_distinct(to.clone(), from.clone(), directedness));
    }
    result.insert_edge(&Edge::from_distinct(from.clone(), to, directedness));
}
