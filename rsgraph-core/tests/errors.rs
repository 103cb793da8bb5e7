//! Error codes and messages of `GraphError`.

use rsgraph_core::{GraphError, GraphErrorCode, NodeId};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::InvalidArgument { parameter: "p", reason: "out of range".to_owned() },
    GraphErrorCode::InvalidArgument,
    "GRAPH_INVALID_ARGUMENT",
)]
#[case(GraphError::EmptyGraph, GraphErrorCode::EmptyGraph, "GRAPH_EMPTY")]
#[case(
    GraphError::UnsatisfiablePredicate { attempts: 3 },
    GraphErrorCode::UnsatisfiablePredicate,
    "GRAPH_UNSATISFIABLE_PREDICATE",
)]
#[case(
    GraphError::UnknownNode { node: NodeId::new(9) },
    GraphErrorCode::UnknownNode,
    "GRAPH_UNKNOWN_NODE",
)]
#[case(
    GraphError::SelfLoop { node: NodeId::new(1) },
    GraphErrorCode::SelfLoop,
    "GRAPH_SELF_LOOP",
)]
#[case(GraphError::Unlabelled, GraphErrorCode::Unlabelled, "GRAPH_UNLABELLED")]
#[case(
    GraphError::GenerationExhausted { model: "random_regular", attempts: 1_000 },
    GraphErrorCode::GenerationExhausted,
    "GRAPH_GENERATION_EXHAUSTED",
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
}

#[rstest]
fn messages_name_the_offending_parameter() {
    let err = rsgraph_core::UnipartiteParams::new(0, 0.5).expect_err("zero nodes must fail");
    assert_eq!(
        err.to_string(),
        "invalid argument `num_nodes`: must be at least 1 (got 0)"
    );
}
