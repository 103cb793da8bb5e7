//! Property-based tests for the recursive generators.
//!
//! Each property draws its parameters and seed from proptest and checks a
//! structural invariant of the generated graph.

use proptest::prelude::*;
use rstest::rstest;

use super::{
    BipartiteParams, InitialTopology, TriangulationRule, UnipartiteParams, generate_bipartite,
    generate_bipartite_traced, generate_unipartite, generate_unipartite_traced,
};
use crate::graph::{Graph, Partition};
use crate::random::SeededRandom;
use crate::stats::{degree_histogram, degree_pmf};
use crate::test_utils::suite_proptest_config;

fn topology() -> impl Strategy<Value = InitialTopology> {
    prop_oneof![Just(InitialTopology::SingleNode), Just(InitialTopology::Path)]
}

fn rule() -> impl Strategy<Value = TriangulationRule> {
    prop_oneof![
        Just(TriangulationRule::Literal),
        Just(TriangulationRule::OppositeOfTarget)
    ]
}

fn check_simple(graph: &Graph) -> Result<(), TestCaseError> {
    let mut edges = 0;
    for (u, v) in graph.edges() {
        prop_assert_ne!(u, v);
        prop_assert!(graph.contains_node(u));
        prop_assert!(graph.contains_node(v));
        prop_assert!(graph.has_edge(v, u));
        edges += 1;
    }
    prop_assert_eq!(edges, graph.edge_count());
    let degree_sum: usize = graph.degrees().map(|(_, degree)| degree).sum();
    prop_assert_eq!(degree_sum, 2 * graph.edge_count());
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn unipartite_graphs_are_simple(
        nodes in 1_usize..120,
        p in 0.0_f64..=1.0,
        topology in topology(),
        seed in any::<u64>(),
    ) {
        let params = UnipartiteParams::new(nodes, p)?.with_initial_topology(topology);
        let graph = generate_unipartite(&params, &mut SeededRandom::new(seed))?;
        prop_assert_eq!(graph.node_count(), nodes);
        check_simple(&graph)?;
    }

    #[test]
    fn unipartite_without_triangulation_is_a_tree(
        nodes in 1_usize..200,
        seed in any::<u64>(),
    ) {
        let params = UnipartiteParams::new(nodes, 0.0)?;
        let generated = generate_unipartite_traced(&params, &mut SeededRandom::new(seed))?;
        prop_assert_eq!(generated.graph.edge_count(), nodes - 1);
        for step in &generated.steps {
            prop_assert_eq!(step.edges_added(), 1);
            prop_assert!(generated.graph.degree(step.node)? >= 1);
        }
    }

    #[test]
    fn full_triangulation_absorbs_the_target_neighbourhood(
        nodes in 2_usize..80,
        seed in any::<u64>(),
    ) {
        let params = UnipartiteParams::new(nodes, 1.0)?;
        let generated = generate_unipartite_traced(&params, &mut SeededRandom::new(seed))?;
        for step in &generated.steps {
            prop_assert_eq!(step.edges_added(), 1 + step.target_degree);
        }
    }

    #[test]
    fn unipartite_generation_is_reproducible(
        nodes in 1_usize..100,
        p in 0.0_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let params = UnipartiteParams::new(nodes, p)?;
        let first = generate_unipartite(&params, &mut SeededRandom::new(seed))?;
        let second = generate_unipartite(&params, &mut SeededRandom::new(seed))?;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bipartite_attachment_edges_cross_partitions(
        left in 1_usize..60,
        right in 1_usize..60,
        p in 0.0_f64..=1.0,
        rule in rule(),
        seed in any::<u64>(),
    ) {
        let params = BipartiteParams::new(left, right, p)?.with_triangulation(rule);
        let generated = generate_bipartite_traced(&params, &mut SeededRandom::new(seed))?;
        prop_assert_eq!(generated.graph.node_count(), left + right);
        prop_assert_eq!(generated.steps.len(), left);
        check_simple(&generated.graph)?;
        for step in &generated.steps {
            prop_assert_eq!(generated.graph.label(step.node), Some(Partition::Left));
            prop_assert_eq!(generated.graph.label(step.target), Some(Partition::Right));
        }
    }

    #[test]
    fn pmf_sums_to_one(
        nodes in 1_usize..150,
        p in 0.0_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let params = UnipartiteParams::new(nodes, p)?;
        let graph = generate_unipartite(&params, &mut SeededRandom::new(seed))?;
        let pmf = degree_pmf(&graph)?;
        let histogram = degree_histogram(&graph)?;
        prop_assert!((pmf.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        for (probability, count) in pmf.iter().zip(&histogram) {
            prop_assert!(*probability >= 0.0);
            prop_assert_eq!(*probability, *count as f64 / nodes as f64);
        }
    }
}

#[rstest]
fn five_node_graph_repeats_for_seed_one() {
    let params = UnipartiteParams::new(5, 0.0).expect("valid parameters");
    let first = generate_unipartite(&params, &mut SeededRandom::new(1)).expect("generate");
    let second = generate_unipartite(&params, &mut SeededRandom::new(1)).expect("generate");
    let first_edges: Vec<_> = first.edges().collect();
    let second_edges: Vec<_> = second.edges().collect();
    assert_eq!(first_edges, second_edges);
    assert_eq!(first_edges.len(), 4);
}

#[rstest]
fn bipartite_generation_is_reproducible() {
    let params = BipartiteParams::new(25, 10, 0.5)
        .expect("valid parameters")
        .with_triangulation(TriangulationRule::OppositeOfTarget);
    let first = generate_bipartite(&params, &mut SeededRandom::new(77)).expect("generate");
    let second = generate_bipartite(&params, &mut SeededRandom::new(77)).expect("generate");
    assert_eq!(first, second);
}
