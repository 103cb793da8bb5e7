//! Tests for the reference random-graph models.

use rstest::rstest;

use super::*;
use crate::graph::Partition;
use crate::random::SeededRandom;
use crate::test_utils::ScriptedRandom;

fn n(id: usize) -> NodeId {
    NodeId::new(id)
}

fn all_degrees(graph: &Graph, expected: usize) -> bool {
    graph.degrees().all(|(_, degree)| degree == expected)
}

#[rstest]
#[case(1, 0)]
#[case(2, 1)]
#[case(12, 66)]
fn erdos_renyi_with_certainty_is_complete(#[case] nodes: usize, #[case] edges: usize) {
    let graph = erdos_renyi(nodes, 1.0, &mut SeededRandom::new(0)).expect("valid");
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), edges);
}

#[rstest]
fn erdos_renyi_without_probability_is_empty() {
    let graph = erdos_renyi(20, 0.0, &mut SeededRandom::new(9)).expect("valid");
    assert_eq!(graph.edge_count(), 0);
}

#[rstest]
fn erdos_renyi_draws_once_per_pair_in_order() {
    // Pairs (1,2), (1,3), (2,3).
    let mut rng = ScriptedRandom::new([], [0.1, 0.9, 0.2]);
    let graph = erdos_renyi(3, 0.5, &mut rng).expect("valid");
    assert_eq!(rng.probability_draws(), 3);
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges, vec![(n(1), n(2)), (n(2), n(3))]);
}

#[rstest]
#[case(0, 0.5)]
#[case(5, 1.5)]
fn erdos_renyi_rejects_bad_arguments(#[case] nodes: usize, #[case] p: f64) {
    let err = erdos_renyi(nodes, p, &mut SeededRandom::new(1)).expect_err("must fail");
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
}

#[rstest]
#[case(10, 2)]
#[case(10, 4)]
#[case(7, 6)]
#[case(9, 3)]
fn watts_strogatz_lattice_is_regular(#[case] nodes: usize, #[case] k: usize) {
    let graph = watts_strogatz(nodes, k, 0.0, &mut SeededRandom::new(1)).expect("valid");
    let half = k / 2;
    assert_eq!(graph.edge_count(), nodes * half);
    assert!(all_degrees(&graph, 2 * half));
    assert!(graph.has_edge(n(nodes), n(1)) || half == 0);
}

#[rstest]
fn watts_strogatz_rewiring_preserves_edge_count() {
    let graph = watts_strogatz(40, 4, 1.0, &mut SeededRandom::new(13)).expect("valid");
    assert_eq!(graph.edge_count(), 80);
    assert!(graph.edges().all(|(u, v)| u != v));
}

#[rstest]
fn watts_strogatz_rewires_to_a_non_neighbour() {
    // Ring of 5 with k = 2: only edge (1, 2) is rewired. Node 1 may move to
    // 3 or 4; index 1 selects 4.
    let mut rng = ScriptedRandom::new([1], [0.0, 0.9, 0.9, 0.9, 0.9]);
    let graph = watts_strogatz(5, 2, 0.5, &mut rng).expect("valid");
    assert!(!graph.has_edge(n(1), n(2)));
    assert!(graph.has_edge(n(1), n(4)));
    assert!(graph.has_edge(n(1), n(5)));
    assert_eq!(graph.edge_count(), 5);
}

#[rstest]
#[case(5, 5)]
#[case(4, 9)]
fn watts_strogatz_requires_k_below_node_count(#[case] nodes: usize, #[case] k: usize) {
    let err = watts_strogatz(nodes, k, 0.1, &mut SeededRandom::new(1)).expect_err("must fail");
    assert!(matches!(err, GraphError::InvalidArgument { parameter: "k", .. }));
}

#[rstest]
#[case(2, 1)]
#[case(10, 1)]
#[case(25, 3)]
fn barabasi_albert_adds_m_edges_per_node(#[case] nodes: usize, #[case] m: usize) {
    let graph = barabasi_albert(nodes, m, &mut SeededRandom::new(21)).expect("valid");
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), m + m * (nodes - m - 1));
    for id in (m + 2)..=nodes {
        assert!(graph.degree(n(id)).expect("present") >= m);
    }
}

#[rstest]
#[case(5, 0)]
#[case(3, 3)]
fn barabasi_albert_rejects_bad_m(#[case] nodes: usize, #[case] m: usize) {
    let err = barabasi_albert(nodes, m, &mut SeededRandom::new(1)).expect_err("must fail");
    assert!(matches!(err, GraphError::InvalidArgument { parameter: "m", .. }));
}

#[rstest]
fn barabasi_albert_targets_are_distinct() {
    // Star 1-2, 1-3; pool [1, 2, 1, 3]. Index 0 and 2 both hit the hub, so a
    // third draw is needed to reach m = 2 distinct targets.
    let mut rng = ScriptedRandom::with_indices([0, 2, 3]);
    let graph = barabasi_albert(4, 2, &mut rng).expect("valid");
    assert_eq!(rng.index_draws(), 3);
    assert!(graph.has_edge(n(4), n(1)));
    assert!(graph.has_edge(n(4), n(3)));
    assert!(!graph.has_edge(n(4), n(2)));
}

#[rstest]
#[case(3, 10)]
#[case(4, 9)]
#[case(0, 6)]
#[case(1, 2)]
fn random_regular_produces_uniform_degree(#[case] degree: usize, #[case] nodes: usize) {
    let graph = random_regular(degree, nodes, &mut SeededRandom::new(8)).expect("valid");
    assert_eq!(graph.node_count(), nodes);
    assert!(all_degrees(&graph, degree));
    assert_eq!(graph.edge_count(), nodes * degree / 2);
}

#[rstest]
#[case(3, 5)]
#[case(5, 5)]
#[case(1, 0)]
#[case(usize::MAX - 1, usize::MAX)]
fn random_regular_rejects_impossible_shapes(#[case] degree: usize, #[case] nodes: usize) {
    let err = random_regular(degree, nodes, &mut SeededRandom::new(1)).expect_err("must fail");
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
}

// Shuffle scripts for the 2-regular stubs [1, 2, 3, 4, 1, 2, 3, 4].
// Pairs (1,1) (2,3) (3,4) (2,4): node 1 is left pairing with itself.
const STALLED_SHUFFLE: [usize; 7] = [7, 5, 3, 3, 2, 1, 1];
// Pairs (1,2) (3,4) (1,3) (2,4).
const CYCLE_SHUFFLE: [usize; 7] = [7, 5, 5, 4, 3, 2, 1];

#[rstest]
fn random_regular_restarts_a_stalled_pairing() {
    let mut rng = ScriptedRandom::with_indices(STALLED_SHUFFLE.into_iter().chain(CYCLE_SHUFFLE));
    let graph = random_regular(2, 4, &mut rng).expect("second pairing succeeds");
    assert_eq!(rng.index_draws(), 14);
    assert!(all_degrees(&graph, 2));
    for (u, v) in [(1, 2), (3, 4), (1, 3), (2, 4)] {
        assert!(graph.has_edge(n(u), n(v)));
    }
}

#[rstest]
fn random_regular_gives_up_after_the_restart_budget() {
    let script = std::iter::repeat_n(STALLED_SHUFFLE, regular::MAX_PAIRING_ATTEMPTS).flatten();
    let mut rng = ScriptedRandom::with_indices(script);
    let err = random_regular(2, 4, &mut rng).expect_err("every pairing stalls");
    assert_eq!(
        err,
        GraphError::GenerationExhausted {
            model: "random_regular",
            attempts: regular::MAX_PAIRING_ATTEMPTS,
        }
    );
    assert_eq!(rng.index_draws(), 7 * regular::MAX_PAIRING_ATTEMPTS);
}

#[rstest]
fn random_partition_respects_blocks() {
    let graph = random_partition(&[2, 3, 1], 1.0, 0.0, &mut SeededRandom::new(4)).expect("valid");
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 1 + 3);
    assert!(graph.has_edge(n(1), n(2)));
    assert!(graph.has_edge(n(3), n(5)));
    assert!(!graph.has_edge(n(2), n(3)));
    assert_eq!(graph.degree(n(6)), Ok(0));
}

#[rstest]
fn random_partition_with_full_mixing_is_complete() {
    let graph = random_partition(&[2, 2], 1.0, 1.0, &mut SeededRandom::new(4)).expect("valid");
    assert_eq!(graph.edge_count(), 6);
}

#[rstest]
#[case(&[])]
#[case(&[0, 0])]
#[case(&[usize::MAX, 1])]
fn random_partition_needs_a_representable_node_count(#[case] sizes: &[usize]) {
    let err = random_partition(sizes, 0.5, 0.5, &mut SeededRandom::new(1)).expect_err("must fail");
    assert!(matches!(
        err,
        GraphError::InvalidArgument { parameter: "sizes", .. }
    ));
}

#[rstest]
fn random_bipartite_rejects_overflowing_sides() {
    let err = random_bipartite(usize::MAX, 1, 0.5, &mut SeededRandom::new(1))
        .expect_err("sides must fit the node count");
    assert!(matches!(
        err,
        GraphError::InvalidArgument {
            parameter: "num_right",
            ..
        }
    ));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(50)]
fn recursive_tree_is_connected_and_acyclic(#[case] nodes: usize) {
    let graph = random_recursive_tree(nodes, &mut SeededRandom::new(17)).expect("valid");
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), nodes - 1);
    for id in 2..=nodes {
        let earlier = graph
            .neighbors(n(id))
            .expect("present")
            .filter(|neighbour| neighbour.get() < id)
            .count();
        assert_eq!(earlier, 1, "node {id} must have exactly one parent");
    }
}

#[rstest]
fn random_bipartite_only_joins_opposite_sides() {
    let graph = random_bipartite(4, 3, 1.0, &mut SeededRandom::new(2)).expect("valid");
    assert_eq!(graph.edge_count(), 12);
    for (u, v) in graph.edges() {
        assert_ne!(graph.label(u), graph.label(v));
    }
    assert_eq!(graph.nodes_in(Partition::Right).count(), 3);
}

#[rstest]
fn reference_models_are_reproducible() {
    let build = |seed| {
        let mut rng = SeededRandom::new(seed);
        (
            erdos_renyi(30, 0.2, &mut rng).expect("valid"),
            watts_strogatz(30, 4, 0.3, &mut rng).expect("valid"),
            barabasi_albert(30, 2, &mut rng).expect("valid"),
            random_regular(4, 30, &mut rng).expect("valid"),
        )
    };
    assert_eq!(build(99), build(99));
}
