mod common;

use common::five_cycle;
use smallgraph::prelude::*;

#[test]
fn five_cycle_is_isomorphic_to_its_complement() {
    let g = five_cycle(Directedness::Undirected);
    let c = complement(&g);
    assert_eq!(c.size(), 5);
    assert!(are_isomorphic(&g, &c));
    assert_eq!(c.id().to_string(), "Complement of C5");
}

#[test]
fn directed_five_cycle_is_not_isomorphic_to_its_complement() {
    let g = five_cycle(Directedness::Directed);
    let report = IsomorphismChecker::new().check(&g, &g.complement()).unwrap();
    assert!(!report.isomorphic);
    // 5 arcs against 15: told apart without searching.
    assert_eq!(report.steps, 0);
}

#[test]
fn product_of_a_square_and_a_triangle() {
    let square = Graph::from_edges(
        "square",
        Directedness::Undirected,
        [(0, 1), (1, 2), (2, 3), (3, 0)],
    )
    .unwrap();
    let triangle =
        Graph::from_edges("triangle", Directedness::Directed, [(0, 1), (1, 2), (2, 0)]).unwrap();
    let product = cross_product(&square, &triangle);
    assert!(product.is_directed());
    assert_eq!(product.order(), 12);
    for v in product.vertices() {
        let (a, b) = v.as_pair().unwrap();
        assert_eq!(a.kind(), VertexKind::Int);
        assert_eq!(b.kind(), VertexKind::Int);
        // Two square neighbours both ways, one triangle arc each way.
        assert_eq!(product.out_degree(v).unwrap(), 3);
        assert_eq!(product.in_degree(v).unwrap(), 3);
    }
    assert_eq!(
        product.distance((0, 0), (2, 2)).unwrap(),
        4.0,
        "two square steps and two triangle steps"
    );
}

#[test]
fn matrices_agree_with_the_graph() {
    let g = five_cycle(Directedness::Directed);
    let adjacency = g.adjacency_matrix();
    let incidence = g.incidence_matrix();
    assert_eq!(adjacency.count_ones(), g.size());
    for (j, edge) in incidence.edges().iter().enumerate() {
        let s = adjacency.index_of(edge.source()).unwrap();
        let t = adjacency.index_of(edge.target()).unwrap();
        assert!(adjacency.get(s, t));
        assert_eq!(incidence.get(s, j), -1);
        assert_eq!(incidence.get(t, j), 1);
    }
}

#[test]
fn checker_refuses_large_graphs() {
    let g = Graph::with_order("E", Directedness::Undirected, 12).unwrap();
    assert_eq!(
        IsomorphismChecker::default().check(&g, &g),
        Err(GraphError::TooLargeForIsomorphism {
            order: 12,
            limit: 10
        })
    );
    assert!(are_isomorphic(&g, &g));
}
