//! Distances, shortest paths, diameters and components.
//!
//! Every query takes an optional [`Weights`] table.  Without one, distances
//! are edge counts found by breadth-first search; with one, they are found
//! with Dijkstra's algorithm, and edges missing from the table weigh
//! [`DEFAULT_WEIGHT`](crate::weights::DEFAULT_WEIGHT).  Unreachable vertices
//! are at distance [`f64::INFINITY`].
//!
//! Searches visit neighbours in sorted order, so predecessor choices, paths
//! and diameter endpoints are deterministic.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap, HashSet},
};

use crate::{
    Directedness, Graph,
    error::{GraphError, Result},
    path::Path,
    search::BfsIterator,
    tracing_support::{debug, info_span},
    vertex::{IntoVertex, Vertex},
    weights::Weights,
};

/// Which way a search follows edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// From tail to head: distances *from* the start.
    Forward,
    /// From head to tail: distances *to* the start.
    Backward,
}

/// The result of a single-source search: the distance to every vertex of
/// the graph and the predecessor tree used to rebuild geodesics.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    source: Vertex,
    directedness: Directedness,
    distances: BTreeMap<Vertex, f64>,
    predecessors: BTreeMap<Vertex, Vertex>,
}

impl ShortestPaths {
    pub fn source(&self) -> &Vertex {
        &self.source
    }

    /// The distance from the source to `target`, or `None` if `target` is not
    /// a vertex of the searched graph.
    pub fn distance(&self, target: &Vertex) -> Option<f64> {
        self.distances.get(target).copied()
    }

    /// Distances to every vertex, including unreachable ones.
    pub fn distances(&self) -> &BTreeMap<Vertex, f64> {
        &self.distances
    }

    /// The vertex before `target` on its geodesic.  `None` for the source and
    /// for unreachable vertices.
    pub fn predecessor(&self, target: &Vertex) -> Option<&Vertex> {
        self.predecessors.get(target)
    }

    pub fn predecessors(&self) -> &BTreeMap<Vertex, Vertex> {
        &self.predecessors
    }

    /// Rebuilds the geodesic to `target` by walking the predecessor tree
    /// backwards.  The path is empty if `target` is unreachable.
    pub fn path_to(&self, target: impl IntoVertex) -> Result<Path> {
        let target = target.into_vertex()?;
        let distance = self
            .distance(&target)
            .ok_or_else(|| GraphError::VertexNotFound(target.clone()))?;
        if distance.is_infinite() {
            return Ok(Path::default());
        }
        let mut vertices = vec![target];
        while let Some(prev) = vertices.last().and_then(|v| self.predecessors.get(v)) {
            vertices.push(prev.clone());
        }
        vertices.reverse();
        Path::from_vertices(vertices, self.directedness)
    }

    pub fn into_distances(self) -> BTreeMap<Vertex, f64> {
        self.distances
    }
}

/// A diameter: the largest finite distance between two vertices, and the
/// first ordered pair (in sorted order) at that distance.
///
/// Pairs of mutually unreachable vertices are ignored, so a disconnected
/// graph reports the diameter of its widest component.  `endpoints` is
/// `None` when no pair is at a positive finite distance.
#[derive(Clone, Debug, PartialEq)]
pub struct Diameter {
    pub distance: f64,
    pub endpoints: Option<(Vertex, Vertex)>,
}

/// Runs a single-source search from `source`.
pub fn distances_from(
    graph: &Graph,
    source: impl IntoVertex,
    weights: Option<&Weights>,
) -> Result<ShortestPaths> {
    let source = graph.require(source)?;
    Ok(search(graph, source, weights, Direction::Forward))
}

/// The distance from `source` to `target`.
pub fn shortest_distance(
    graph: &Graph,
    source: impl IntoVertex,
    target: impl IntoVertex,
    weights: Option<&Weights>,
) -> Result<f64> {
    let source = graph.require(source)?;
    let target = graph.require(target)?;
    if source == target {
        return Ok(0.0);
    }
    let paths = search(graph, source, weights, Direction::Forward);
    Ok(paths.distance(&target).unwrap_or(f64::INFINITY))
}

/// The distances from `source` to each of `targets`, in the order given.
/// Fails before searching if any target is missing.
pub fn shortest_distances<V: IntoVertex>(
    graph: &Graph,
    source: impl IntoVertex,
    targets: impl IntoIterator<Item = V>,
    weights: Option<&Weights>,
) -> Result<Vec<f64>> {
    let source = graph.require(source)?;
    let targets = targets
        .into_iter()
        .map(|t| graph.require(t))
        .collect::<Result<Vec<_>>>()?;
    let paths = search(graph, source, weights, Direction::Forward);
    Ok(targets
        .iter()
        .map(|t| paths.distance(t).unwrap_or(f64::INFINITY))
        .collect())
}

/// The distance from every vertex to `target`.
pub fn distances_to(
    graph: &Graph,
    target: impl IntoVertex,
    weights: Option<&Weights>,
) -> Result<BTreeMap<Vertex, f64>> {
    let target = graph.require(target)?;
    Ok(search(graph, target, weights, Direction::Backward).into_distances())
}

/// Distance maps from every vertex, keyed by source.
pub fn all_pairs_distances(
    graph: &Graph,
    weights: Option<&Weights>,
) -> BTreeMap<Vertex, BTreeMap<Vertex, f64>> {
    let _span = info_span!("all_pairs_distances", graph = %graph.id()).entered();
    graph
        .vertices()
        .map(|v| {
            let distances = search(graph, v.clone(), weights, Direction::Forward);
            (v.clone(), distances.into_distances())
        })
        .collect()
}

/// A geodesic from `source` to `target`.  The path is `[source]` when the two
/// are equal and empty when `target` is unreachable.
pub fn shortest_path(
    graph: &Graph,
    source: impl IntoVertex,
    target: impl IntoVertex,
    weights: Option<&Weights>,
) -> Result<Path> {
    let source = graph.require(source)?;
    let target = graph.require(target)?;
    if source == target {
        return Ok(Path::new(source));
    }
    search(graph, source, weights, Direction::Forward).path_to(target)
}

/// The largest finite distance between any two vertices.
///
/// Sources and targets are scanned in sorted order and only a strictly
/// larger distance replaces the current best, so the reported endpoints are
/// the first maximal pair.
pub fn diameter(graph: &Graph, weights: Option<&Weights>) -> Diameter {
    let _span = info_span!("diameter", graph = %graph.id()).entered();
    let mut best = Diameter {
        distance: 0.0,
        endpoints: None,
    };
    for source in graph.vertices() {
        let paths = search(graph, source.clone(), weights, Direction::Forward);
        for (target, &distance) in paths.distances() {
            if distance.is_finite() && distance > best.distance {
                best = Diameter {
                    distance,
                    endpoints: Some((source.clone(), target.clone())),
                };
            }
        }
    }
    debug!(graph = %graph.id(), distance = best.distance, "diameter");
    best
}

/// Partitions the vertices into connected components, ignoring edge
/// direction.  Each component is sorted, and components are ordered by
/// their smallest vertex.
#[cfg(feature = "pathfinding")]
pub fn connected_components(graph: &Graph) -> Vec<Vec<Vertex>> {
    let _span = info_span!("connected_components", graph = %graph.id()).entered();
    let vertices: Vec<Vertex> = graph.vertices().cloned().collect();
    let components = pathfinding::prelude::connected_components(&vertices, |v| {
        let succs = graph.successor_set(v).into_iter().flatten();
        let preds = graph.predecessor_set(v).into_iter().flatten();
        succs.chain(preds).cloned().collect::<Vec<_>>()
    });
    sorted_components(components.into_iter().map(|c| c.into_iter().collect()))
}

/// Partitions the vertices into strongly connected components, ordered as
/// in [`connected_components`].  For undirected graphs the two agree.
#[cfg(feature = "pathfinding")]
pub fn strongly_connected_components(graph: &Graph) -> Vec<Vec<Vertex>> {
    let _span = info_span!("strongly_connected_components", graph = %graph.id()).entered();
    let vertices: Vec<Vertex> = graph.vertices().cloned().collect();
    let components = pathfinding::prelude::strongly_connected_components(&vertices, |v| {
        graph
            .successor_set(v)
            .into_iter()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
    });
    sorted_components(components)
}

/// Returns true if every vertex can reach every other one when edge
/// direction is ignored.  Graphs with fewer than two vertices are connected.
#[cfg(feature = "pathfinding")]
pub fn is_connected(graph: &Graph) -> bool {
    graph.order() <= 1 || connected_components(graph).len() == 1
}

#[cfg(feature = "pathfinding")]
fn sorted_components(components: impl IntoIterator<Item = Vec<Vertex>>) -> Vec<Vec<Vertex>> {
    let mut components: Vec<Vec<Vertex>> = components
        .into_iter()
        .map(|mut c| {
            c.sort();
            c
        })
        .collect();
    components.sort();
    components
}

fn search(
    graph: &Graph,
    start: Vertex,
    weights: Option<&Weights>,
    direction: Direction,
) -> ShortestPaths {
    let mut paths = ShortestPaths {
        source: start.clone(),
        directedness: graph.directedness(),
        distances: graph.vertices().map(|v| (v.clone(), f64::INFINITY)).collect(),
        predecessors: BTreeMap::new(),
    };
    match weights {
        None => breadth_first(graph, start, direction, &mut paths),
        Some(weights) => dijkstra(graph, start, weights, direction, &mut paths),
    }
    paths
}

fn breadth_first(graph: &Graph, start: Vertex, direction: Direction, paths: &mut ShortestPaths) {
    let _span = info_span!("bfs_distances", source = %start).entered();
    let visits = match direction {
        Direction::Forward => BfsIterator::new(graph, start),
        Direction::Backward => BfsIterator::reversed(graph, start),
    };
    for visit in visits {
        paths.distances.insert(visit.vertex.clone(), visit.depth as f64);
        if let Some(prev) = visit.predecessor {
            paths.predecessors.insert(visit.vertex, prev);
        }
    }
}

/// A queue entry.  Ordered so that a max-heap pops the nearest vertex first,
/// breaking ties by the smaller vertex.
struct Candidate {
    distance: f64,
    vertex: Vertex,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

fn dijkstra(
    graph: &Graph,
    start: Vertex,
    weights: &Weights,
    direction: Direction,
    paths: &mut ShortestPaths,
) {
    let _span = info_span!("dijkstra", source = %start).entered();
    let directedness = graph.directedness();
    let mut settled = HashSet::new();
    let mut queue = BinaryHeap::new();
    paths.distances.insert(start.clone(), 0.0);
    queue.push(Candidate {
        distance: 0.0,
        vertex: start,
    });
    while let Some(Candidate { distance, vertex }) = queue.pop() {
        if !settled.insert(vertex.clone()) {
            continue;
        }
        let neighbors = match direction {
            Direction::Forward => graph.successor_set(&vertex),
            Direction::Backward => graph.predecessor_set(&vertex),
        };
        for next in neighbors.into_iter().flatten() {
            if settled.contains(next) {
                continue;
            }
            let weight = match direction {
                Direction::Forward => weights.weight(&vertex, next, directedness),
                Direction::Backward => weights.weight(next, &vertex, directedness),
            };
            let candidate = distance + weight;
            let known = paths.distances.get(next).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                paths.distances.insert(next.clone(), candidate);
                paths.predecessors.insert(next.clone(), vertex.clone());
                queue.push(Candidate {
                    distance: candidate,
                    vertex: next.clone(),
                });
            }
        }
    }
    debug!(settled = settled.len(), "dijkstra finished");
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::graph_test_support::ArbGraph;

    const INF: f64 = f64::INFINITY;

    fn cycle(directedness: Directedness) -> Graph {
        Graph::from_edges(
            "C5",
            directedness,
            [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
        )
        .unwrap()
    }

    fn cycle_weights() -> Weights {
        Weights::from_entries([
            ((0, 1), 2.0),
            ((1, 2), 2.0),
            ((2, 3), 2.0),
            ((3, 4), 10.0),
            ((4, 0), 2.0),
        ])
        .unwrap()
    }

    fn distance_map(values: &[f64]) -> BTreeMap<Vertex, f64> {
        values
            .iter()
            .enumerate()
            .map(|(i, &d)| (Vertex::int(i as i64), d))
            .collect()
    }

    fn ints(values: &[i64]) -> Vec<Vertex> {
        values.iter().copied().map(Vertex::int).collect()
    }

    #[test]
    fn test_unweighted_distances_from() {
        let directed = distances_from(&cycle(Directedness::Directed), 0, None).unwrap();
        assert_eq!(directed.distances(), &distance_map(&[0.0, 1.0, 2.0, 3.0, 4.0]));
        let undirected = distances_from(&cycle(Directedness::Undirected), 0, None).unwrap();
        assert_eq!(undirected.distances(), &distance_map(&[0.0, 1.0, 2.0, 2.0, 1.0]));
    }

    #[test]
    fn test_weighted_distances_from() {
        let weights = cycle_weights();
        let directed = distances_from(&cycle(Directedness::Directed), 0, Some(&weights)).unwrap();
        assert_eq!(directed.distances(), &distance_map(&[0.0, 2.0, 4.0, 6.0, 16.0]));
        let undirected =
            distances_from(&cycle(Directedness::Undirected), 0, Some(&weights)).unwrap();
        assert_eq!(undirected.distances(), &distance_map(&[0.0, 2.0, 4.0, 6.0, 2.0]));
    }

    #[test]
    fn test_distances_to() {
        let directed = distances_to(&cycle(Directedness::Directed), 3, None).unwrap();
        assert_eq!(directed, distance_map(&[3.0, 2.0, 1.0, 0.0, 4.0]));
        let undirected = distances_to(&cycle(Directedness::Undirected), 3, None).unwrap();
        assert_eq!(undirected, distance_map(&[2.0, 2.0, 1.0, 0.0, 1.0]));
    }

    #[test]
    fn test_weighted_distances_to_follow_direction() {
        let weights = cycle_weights();
        let directed = distances_to(&cycle(Directedness::Directed), 0, Some(&weights)).unwrap();
        assert_eq!(directed, distance_map(&[0.0, 16.0, 14.0, 12.0, 2.0]));
    }

    #[test]
    fn test_unreachable_is_infinite() {
        let mut g = Graph::from_edges("G", Directedness::Directed, [(0, 1)]).unwrap();
        g.add_vertex(2).unwrap();
        assert_eq!(shortest_distance(&g, 1, 0, None).unwrap(), INF);
        assert_eq!(shortest_distance(&g, 0, 2, None).unwrap(), INF);
        assert_eq!(
            distances_from(&g, 0, None).unwrap().into_distances(),
            distance_map(&[0.0, 1.0, INF])
        );
        assert!(shortest_path(&g, 1, 0, None).unwrap().is_empty());
    }

    #[test]
    fn test_self_distance_and_path() {
        let g = cycle(Directedness::Directed);
        assert_eq!(shortest_distance(&g, 3, 3, None).unwrap(), 0.0);
        assert_eq!(shortest_path(&g, 3, 3, None).unwrap().vertices(), ints(&[3]).as_slice());
    }

    #[test]
    fn test_missing_vertices() {
        let g = cycle(Directedness::Undirected);
        assert_eq!(
            shortest_distance(&g, 0, 9, None),
            Err(GraphError::VertexNotFound(Vertex::int(9)))
        );
        assert!(shortest_path(&g, 9, 0, None).is_err());
        assert!(distances_to(&g, 'x', None).is_err());
        assert!(shortest_distances(&g, 0, [1, 9], None).is_err());
    }

    #[test]
    fn test_shortest_distances_keeps_target_order() {
        let g = cycle(Directedness::Directed);
        assert_eq!(
            shortest_distances(&g, 0, [4, 1, 0], None).unwrap(),
            vec![4.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_shortest_paths() {
        let weights = cycle_weights();
        let directed = cycle(Directedness::Directed);
        let undirected = cycle(Directedness::Undirected);

        let path = shortest_path(&directed, 0, 3, None).unwrap();
        assert_eq!(path.vertices(), ints(&[0, 1, 2, 3]).as_slice());
        assert_eq!(path.edges()[2], crate::Edge::directed(2, 3).unwrap());
        let path = shortest_path(&directed, 0, 3, Some(&weights)).unwrap();
        assert_eq!(path.vertices(), ints(&[0, 1, 2, 3]).as_slice());

        let path = shortest_path(&undirected, 0, 3, None).unwrap();
        assert_eq!(path.vertices(), ints(&[0, 4, 3]).as_slice());
        let path = shortest_path(&undirected, 3, 4, Some(&weights)).unwrap();
        assert_eq!(path.vertices(), ints(&[3, 2, 1, 0, 4]).as_slice());
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_all_pairs_distances() {
        let all = all_pairs_distances(&cycle(Directedness::Directed), None);
        assert_eq!(all.len(), 5);
        assert_eq!(all[&Vertex::int(2)][&Vertex::int(1)], 4.0);
        assert_eq!(all[&Vertex::int(4)][&Vertex::int(0)], 1.0);
    }

    #[test]
    fn test_diameters() {
        let weights = cycle_weights();
        let cases = [
            (Directedness::Undirected, None, 2.0, (0, 2)),
            (Directedness::Undirected, Some(&weights), 8.0, (3, 4)),
            (Directedness::Directed, None, 4.0, (0, 4)),
            (Directedness::Directed, Some(&weights), 16.0, (0, 4)),
        ];
        for (directedness, weights, distance, (u, v)) in cases {
            let d = diameter(&cycle(directedness), weights);
            assert_eq!(d.distance, distance, "{directedness} {weights:?}");
            assert_eq!(d.endpoints, Some((Vertex::int(u), Vertex::int(v))));
        }
    }

    #[test]
    fn test_diameter_ignores_disconnected_pairs() {
        let mut g = Graph::from_edges("G", Directedness::Undirected, [(0, 1), (1, 2), (5, 6)])
            .unwrap();
        g.add_vertex(9).unwrap();
        let d = diameter(&g, None);
        assert_eq!(d.distance, 2.0);
        assert_eq!(d.endpoints, Some((Vertex::int(0), Vertex::int(2))));
    }

    #[test]
    fn test_diameter_of_edgeless_graph() {
        let g = Graph::with_order("E3", Directedness::Undirected, 3).unwrap();
        assert_eq!(
            diameter(&g, None),
            Diameter {
                distance: 0.0,
                endpoints: None
            }
        );
    }

    #[test]
    fn test_cycle_closing_shrinks_diameter() {
        let mut g = Graph::from_parts(
            "G",
            ['a', 'b', 'c', 'd', 'e'],
            [('a', 'b'), ('b', 'c'), ('c', 'd'), ('d', 'e')],
        )
        .unwrap();
        assert_eq!(g.diameter().distance, 4.0);
        assert_eq!(g.distance('a', 'e').unwrap(), 4.0);
        g.add_edge('a', 'e').unwrap();
        assert_eq!(g.diameter().distance, 2.0);
        assert_eq!(g.distance('a', 'e').unwrap(), 1.0);
    }

    #[test]
    fn test_zero_and_infinite_weights() {
        let g = Graph::from_edges("G", Directedness::Directed, [(0, 1), (1, 2)]).unwrap();
        let weights = Weights::from_entries([((0, 1), 0.0), ((1, 2), INF)]).unwrap();
        let paths = distances_from(&g, 0, Some(&weights)).unwrap();
        assert_eq!(paths.into_distances(), distance_map(&[0.0, 0.0, INF]));
    }

    #[cfg(feature = "pathfinding")]
    #[test]
    fn test_components() {
        let mut g = Graph::from_edges("G", Directedness::Directed, [(0, 1), (1, 0), (1, 2), (4, 3)])
            .unwrap();
        g.add_vertex(5).unwrap();
        assert_eq!(
            connected_components(&g),
            vec![ints(&[0, 1, 2]), ints(&[3, 4]), ints(&[5])]
        );
        assert_eq!(
            strongly_connected_components(&g),
            vec![ints(&[0, 1]), ints(&[2]), ints(&[3]), ints(&[4]), ints(&[5])]
        );
        assert!(!is_connected(&g));
        assert!(is_connected(&cycle(Directedness::Directed)));
        assert!(is_connected(&Graph::new("empty").unwrap()));
    }

    #[quickcheck]
    fn prop_self_distance_is_zero(ArbGraph { graph }: ArbGraph) -> bool {
        graph
            .vertices()
            .all(|v| shortest_distance(&graph, v, v, None) == Ok(0.0))
    }

    #[quickcheck]
    fn prop_triangle_inequality(ArbGraph { graph }: ArbGraph) -> bool {
        let all = all_pairs_distances(&graph, None);
        all.iter().all(|(_, from_a)| {
            from_a.iter().all(|(b, &ab)| {
                all[b]
                    .iter()
                    .all(|(c, &bc)| ab.is_infinite() || bc.is_infinite() || from_a[c] <= ab + bc)
            })
        })
    }

    #[quickcheck]
    fn prop_paths_match_distances(ArbGraph { graph }: ArbGraph) -> bool {
        let Some(source) = graph.vertices().next().cloned() else {
            return true;
        };
        let paths = distances_from(&graph, &source, None).unwrap();
        paths.distances().iter().all(|(target, &distance)| {
            let path = paths.path_to(target).unwrap();
            if distance.is_infinite() {
                path.is_empty()
            } else {
                path.len() as f64 == distance
                    && path.first_vertex() == Some(&source)
                    && path.edges().iter().all(|e| graph.contains_edge(e))
            }
        })
    }
}
