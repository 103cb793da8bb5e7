//! Bipartite recursive scale-free graph (RSRBG).

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use super::{Generated, GrowthStep};
use crate::error::Result;
use crate::graph::{Graph, NodeId, Partition};
use crate::random::{RandomSource, Selection};
use crate::validation;

/// Which neighbours of the attachment target the triangulation step may copy.
///
/// Targets are always RIGHT nodes, so under strict bipartite structure their
/// neighbours are LEFT nodes and [`Self::Literal`] never fires. The two
/// rules capture the two readings of the model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriangulationRule {
    /// Copy neighbours labelled RIGHT, as the model is literally stated.
    #[default]
    Literal,
    /// Copy neighbours on the opposite side of the target. This introduces
    /// LEFT-LEFT edges.
    OppositeOfTarget,
}

impl TriangulationRule {
    fn admits(self, graph: &Graph, target: NodeId, neighbour: NodeId) -> bool {
        let wanted = match self {
            Self::Literal => Some(Partition::Right),
            Self::OppositeOfTarget => graph.label(target).map(Partition::opposite),
        };
        wanted.is_some() && graph.label(neighbour) == wanted
    }
}

/// Validated configuration for [`generate_bipartite`].
///
/// # Examples
/// ```
/// use rsgraph_core::{BipartiteParams, TriangulationRule};
///
/// let params = BipartiteParams::new(10, 5, 0.3)?
///     .with_triangulation(TriangulationRule::OppositeOfTarget);
/// assert_eq!(params.num_left().get(), 10);
/// assert_eq!(params.triangulation(), TriangulationRule::OppositeOfTarget);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BipartiteParams {
    num_left: NonZeroUsize,
    num_right: NonZeroUsize,
    probability: f64,
    triangulation: TriangulationRule,
    selection: Selection,
}

impl BipartiteParams {
    /// Creates parameters for `num_left` LEFT nodes, `num_right` RIGHT
    /// nodes, and triangulation probability `probability`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidArgument`] when either side is
    /// empty, the sides together overflow the node count, or `probability`
    /// is not a finite value in `[0, 1]`.
    pub fn new(num_left: usize, num_right: usize, probability: f64) -> Result<Self> {
        let left = validation::positive("num_left", num_left)?;
        let right = validation::positive("num_right", num_right)?;
        validation::node_total("num_right", &[num_left, num_right])?;
        Ok(Self {
            num_left: left,
            num_right: right,
            probability: validation::probability("p", probability)?,
            triangulation: TriangulationRule::default(),
            selection: Selection::default(),
        })
    }

    /// Overrides the triangulation rule.
    #[must_use]
    pub const fn with_triangulation(mut self, rule: TriangulationRule) -> Self {
        self.triangulation = rule;
        self
    }

    /// Overrides how attachment targets are drawn.
    #[must_use]
    pub const fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Number of LEFT nodes.
    #[must_use]
    pub const fn num_left(&self) -> NonZeroUsize {
        self.num_left
    }

    /// Number of RIGHT nodes.
    #[must_use]
    pub const fn num_right(&self) -> NonZeroUsize {
        self.num_right
    }

    /// Probability of copying each eligible neighbour of the target.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Triangulation rule.
    #[must_use]
    pub const fn triangulation(&self) -> TriangulationRule {
        self.triangulation
    }

    /// Target selection strategy.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }
}

/// Generates an RSRBG graph.
///
/// LEFT nodes are `1..=num_left` and RIGHT nodes follow them. Every node is
/// labelled with its [`Partition`].
///
/// # Errors
/// Propagates [`crate::GraphError::UnsatisfiablePredicate`] from target
/// selection; validated parameters always leave a qualifying target.
///
/// # Examples
/// ```
/// use rsgraph_core::{BipartiteParams, NodeId, Partition, SeededRandom, generate_bipartite};
///
/// let params = BipartiteParams::new(3, 3, 0.0)?;
/// let graph = generate_bipartite(&params, &mut SeededRandom::new(5))?;
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.label(NodeId::new(4)), Some(Partition::Right));
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
pub fn generate_bipartite<R: RandomSource + ?Sized>(
    params: &BipartiteParams,
    rng: &mut R,
) -> Result<Graph> {
    generate_bipartite_traced(params, rng).map(Generated::into_graph)
}

/// Generates an RSRBG graph and records every growth step.
///
/// # Errors
/// Propagates [`crate::GraphError::UnsatisfiablePredicate`] from target
/// selection; validated parameters always leave a qualifying target.
#[instrument(
    name = "core.generate_bipartite",
    err,
    skip(params, rng),
    fields(
        left = params.num_left.get(),
        right = params.num_right.get(),
        p = params.probability,
        triangulation = ?params.triangulation,
        selection = ?params.selection,
    ),
)]
pub fn generate_bipartite_traced<R: RandomSource + ?Sized>(
    params: &BipartiteParams,
    rng: &mut R,
) -> Result<Generated> {
    let num_left = params.num_left.get();
    let num_right = params.num_right.get();

    let mut graph = Graph::new();
    for id in 1..=num_left {
        graph.add_labelled_node(NodeId::new(id), Partition::Left);
    }
    for id in (num_left + 1)..=(num_left + num_right) {
        graph.add_labelled_node(NodeId::new(id), Partition::Right);
    }

    let mut steps = Vec::with_capacity(num_left);
    for id in 1..=num_left {
        steps.push(grow(&mut graph, NodeId::new(id), params, rng)?);
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "bipartite generation completed"
    );
    Ok(Generated { graph, steps })
}

fn grow<R: RandomSource + ?Sized>(
    graph: &mut Graph,
    node: NodeId,
    params: &BipartiteParams,
    rng: &mut R,
) -> Result<GrowthStep> {
    let target = params.selection.choose(graph, rng, |candidate| {
        candidate != node && graph.label(candidate) == Some(Partition::Right)
    })?;
    let target_degree = graph.degree(target)?;
    let attached = graph.add_edge(node, target)?;

    let neighbours: Vec<NodeId> = graph
        .neighbors(target)?
        .filter(|&neighbour| {
            neighbour != node && params.triangulation.admits(graph, target, neighbour)
        })
        .collect();

    let mut triangulated = Vec::new();
    for neighbour in neighbours {
        if rng.uniform_probability() < params.probability && graph.add_edge(node, neighbour)? {
            triangulated.push(neighbour);
        }
    }

    Ok(GrowthStep {
        node,
        target,
        target_degree,
        attached,
        triangulated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::error::GraphError;
    use crate::random::SeededRandom;
    use crate::test_utils::ScriptedRandom;

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    #[rstest]
    #[case(0, 3, 0.5)]
    #[case(3, 0, 0.5)]
    #[case(3, 3, -1.0)]
    #[case(3, 3, 2.0)]
    #[case(usize::MAX, 1, 0.5)]
    fn params_reject_invalid_arguments(
        #[case] left: usize,
        #[case] right: usize,
        #[case] p: f64,
    ) {
        let err = BipartiteParams::new(left, right, p).expect_err("arguments must be rejected");
        assert!(matches!(err, GraphError::InvalidArgument { .. }));
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(99)]
    fn three_by_three_without_triangulation(#[case] seed: u64) {
        let params = BipartiteParams::new(3, 3, 0.0).expect("valid parameters");
        let graph = generate_bipartite(&params, &mut SeededRandom::new(seed)).expect("generate");

        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 3);
        for (u, v) in graph.edges() {
            assert_ne!(graph.label(u), graph.label(v));
        }
        for id in 1..=3 {
            assert_eq!(graph.label(n(id)), Some(Partition::Left));
            assert_eq!(graph.degree(n(id)), Ok(1));
        }
        for id in 4..=6 {
            assert_eq!(graph.label(n(id)), Some(Partition::Right));
        }
    }

    #[rstest]
    fn literal_rule_never_triangulates() {
        let params = BipartiteParams::new(40, 10, 1.0).expect("valid parameters");
        let generated =
            generate_bipartite_traced(&params, &mut SeededRandom::new(8)).expect("generate");
        assert_eq!(generated.graph.edge_count(), 40);
        assert!(
            generated
                .steps
                .iter()
                .all(|step| step.triangulated.is_empty())
        );
    }

    #[rstest]
    fn opposite_rule_copies_left_neighbours() {
        // Candidates for every LEFT node are the RIGHT nodes [3, 4]. Node 1
        // attaches to 3; node 2 attaches to 3 as well and copies node 1.
        let params = BipartiteParams::new(2, 2, 1.0)
            .expect("valid parameters")
            .with_triangulation(TriangulationRule::OppositeOfTarget);
        let mut rng = ScriptedRandom::new([0, 0], [0.0]);
        let generated = generate_bipartite_traced(&params, &mut rng).expect("generate");

        assert!(generated.graph.has_edge(n(1), n(3)));
        assert!(generated.graph.has_edge(n(2), n(3)));
        assert!(generated.graph.has_edge(n(1), n(2)));
        assert_eq!(generated.steps[1].triangulated, vec![n(1)]);
        assert_eq!(rng.probability_draws(), 1);
    }

    #[rstest]
    #[case(TriangulationRule::Literal)]
    #[case(TriangulationRule::OppositeOfTarget)]
    fn attachment_edges_cross_partitions(#[case] rule: TriangulationRule) {
        let params = BipartiteParams::new(60, 15, 0.7)
            .expect("valid parameters")
            .with_triangulation(rule);
        let generated =
            generate_bipartite_traced(&params, &mut SeededRandom::new(31)).expect("generate");
        for step in &generated.steps {
            assert_eq!(generated.graph.label(step.node), Some(Partition::Left));
            assert_eq!(generated.graph.label(step.target), Some(Partition::Right));
            assert!(generated.graph.has_edge(step.node, step.target));
        }
    }

    #[rstest]
    fn rejection_selection_only_targets_right_nodes() {
        let params = BipartiteParams::new(20, 2, 0.0)
            .expect("valid parameters")
            .with_selection(Selection::rejection());
        let generated =
            generate_bipartite_traced(&params, &mut SeededRandom::new(4)).expect("generate");
        assert!(generated.steps.iter().all(|step| step.target.get() > 20));
    }

    #[rstest]
    fn rejection_selection_reaches_a_lone_right_node() {
        let budget = NonZeroUsize::new(8).expect("non-zero budget");
        let params = BipartiteParams::new(2_000, 1, 0.0)
            .expect("valid parameters")
            .with_selection(Selection::Rejection {
                max_attempts: budget,
            });
        let graph = generate_bipartite(&params, &mut SeededRandom::new(1)).expect("generate");
        let hub = NodeId::new(2_001);
        assert_eq!(graph.edge_count(), 2_000);
        assert_eq!(graph.degree(hub).expect("hub exists"), 2_000);
    }
}
