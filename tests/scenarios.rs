mod common;

use std::collections::BTreeMap;

use common::{five_cycle, five_cycle_weights, ints};
use smallgraph::prelude::*;

#[test]
fn path_graph() {
    let g = Graph::from_parts(
        "P5",
        1..=5,
        [(1, 2), (2, 3), (3, 4), (4, 5)],
    )
    .unwrap();
    assert_eq!(g.order(), 5);
    assert_eq!(g.size(), 4);
    assert_eq!(g.distance(1, 5).unwrap(), 4.0);
    assert_eq!(g.degree(1).unwrap(), 1);
    assert_eq!(g.degree(3).unwrap(), 2);
}

#[test]
fn closing_a_cycle() {
    let mut g = Graph::from_parts(
        "abcde",
        ['a', 'b', 'c', 'd', 'e'],
        [('a', 'b'), ('b', 'c'), ('c', 'd'), ('d', 'e')],
    )
    .unwrap();
    assert_eq!(g.diameter().distance, 4.0);
    assert_eq!(g.distance('a', 'e').unwrap(), 4.0);

    g.add_edge('a', 'e').unwrap();
    assert_eq!(g.diameter().distance, 2.0);
    assert_eq!(g.distance('a', 'e').unwrap(), 1.0);
    assert_eq!(g.distance('A', 'E').unwrap(), 1.0);
}

#[test]
fn weighted_directed_cycle() {
    let g = five_cycle(Directedness::Directed);
    let weights = five_cycle_weights();
    let distances = distances_from(&g, 0, Some(&weights)).unwrap();
    let expected: BTreeMap<Vertex, f64> = ints(&[0, 1, 2, 3, 4])
        .into_iter()
        .zip([0.0, 2.0, 4.0, 6.0, 16.0])
        .collect();
    assert_eq!(distances.distances(), &expected);
    assert_eq!(
        shortest_path(&g, 0, 4, Some(&weights)).unwrap().vertices(),
        ints(&[0, 1, 2, 3, 4]).as_slice()
    );
    assert_eq!(
        shortest_distances(&g, 0, [3, 4], Some(&weights)).unwrap(),
        vec![6.0, 16.0]
    );
}

#[test]
fn weighted_undirected_cycle_goes_around() {
    let g = five_cycle(Directedness::Undirected);
    let weights = five_cycle_weights();
    assert_eq!(shortest_distance(&g, 3, 4, Some(&weights)).unwrap(), 8.0);
    let path = shortest_path(&g, 3, 4, Some(&weights)).unwrap();
    assert_eq!(path.to_string(), "3 -> 2 -> 1 -> 0 -> 4");
    let d = diameter(&g, Some(&weights));
    assert_eq!(d.distance, 8.0);
    assert_eq!(d.endpoints, Some((Vertex::int(3), Vertex::int(4))));
}

#[test]
fn all_pairs_matches_single_queries() {
    let g = five_cycle(Directedness::Directed);
    let all = all_pairs_distances(&g, None);
    for (source, row) in &all {
        for (target, &distance) in row {
            assert_eq!(shortest_distance(&g, source, target, None).unwrap(), distance);
        }
        assert_eq!(&distances_to(&g, source, None).unwrap()[source], &0.0);
    }
}

#[test]
fn queries_on_missing_vertices_fail() {
    let g = five_cycle(Directedness::Undirected);
    assert_eq!(
        g.distance(0, 'q'),
        Err(GraphError::VertexNotFound(Vertex::char('q')))
    );
    assert!(matches!(
        g.degree(2.5),
        Err(GraphError::VertexNotFound(_))
    ));
    assert!(matches!(
        shortest_path(&g, "zz", 0, None),
        Err(GraphError::InvalidVertexId(_))
    ));
}

#[test]
fn mixed_kind_vertices_stay_apart() {
    let mut g = Graph::new("mixed").unwrap();
    g.add_edge(1, 1.0).unwrap();
    g.add_edge(1.0, 'a').unwrap();
    assert_eq!(g.order(), 3);
    let order: Vec<_> = g.vertices().map(Vertex::kind).collect();
    assert_eq!(order, vec![VertexKind::Int, VertexKind::Float, VertexKind::Char]);
    assert_eq!(g.distance(1, 'a').unwrap(), 2.0);
}

#[cfg(feature = "pathfinding")]
#[test]
fn components_of_a_forest() {
    let g = Graph::from_edges(
        "forest",
        Directedness::Undirected,
        [('a', 'b'), ('c', 'd'), ('d', 'e')],
    )
    .unwrap();
    let components = connected_components(&g);
    assert_eq!(components.len(), 2);
    assert_eq!(components[1], vec![Vertex::char('c'), Vertex::char('d'), Vertex::char('e')]);
    assert!(!is_connected(&g));
    assert_eq!(diameter(&g, None).distance, 2.0);
}
