//! Unipartite recursive scale-free graph (RSRG).

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use super::{Generated, GrowthStep};
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::random::{RandomSource, Selection};
use crate::validation;

/// Starting edge set for unipartite growth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitialTopology {
    /// Start from node `1` alone and insert every later node as it is
    /// processed.
    #[default]
    SingleNode,
    /// Start from the path `1 - 2 - ... - n`; growth then revisits nodes
    /// `2..=n` and only adds edges.
    Path,
}

/// Validated configuration for [`generate_unipartite`].
///
/// # Examples
/// ```
/// use rsgraph_core::{InitialTopology, UnipartiteParams};
///
/// let params = UnipartiteParams::new(100, 0.3)?
///     .with_initial_topology(InitialTopology::Path);
/// assert_eq!(params.num_nodes().get(), 100);
/// assert_eq!(params.initial_topology(), InitialTopology::Path);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UnipartiteParams {
    num_nodes: NonZeroUsize,
    probability: f64,
    initial_topology: InitialTopology,
    selection: Selection,
}

impl UnipartiteParams {
    /// Creates parameters for `num_nodes` nodes and triangulation
    /// probability `probability`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidArgument`] when `num_nodes` is zero
    /// or `probability` is not a finite value in `[0, 1]`.
    pub fn new(num_nodes: usize, probability: f64) -> Result<Self> {
        Ok(Self {
            num_nodes: validation::positive("num_nodes", num_nodes)?,
            probability: validation::probability("p", probability)?,
            initial_topology: InitialTopology::default(),
            selection: Selection::default(),
        })
    }

    /// Overrides the starting edge set.
    #[must_use]
    pub const fn with_initial_topology(mut self, topology: InitialTopology) -> Self {
        self.initial_topology = topology;
        self
    }

    /// Overrides how attachment targets are drawn.
    #[must_use]
    pub const fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Number of nodes in the generated graph.
    #[must_use]
    pub const fn num_nodes(&self) -> NonZeroUsize {
        self.num_nodes
    }

    /// Probability of copying each neighbour of the attachment target.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Starting edge set.
    #[must_use]
    pub const fn initial_topology(&self) -> InitialTopology {
        self.initial_topology
    }

    /// Target selection strategy.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }
}

/// Generates an RSRG graph.
///
/// # Errors
/// Propagates [`crate::GraphError::UnsatisfiablePredicate`] from target
/// selection; validated parameters always leave a qualifying target.
///
/// # Examples
/// ```
/// use rsgraph_core::{SeededRandom, UnipartiteParams, generate_unipartite};
///
/// let params = UnipartiteParams::new(50, 0.0)?;
/// let graph = generate_unipartite(&params, &mut SeededRandom::new(1))?;
/// assert_eq!(graph.node_count(), 50);
/// // Without triangulation every node after the first adds one edge.
/// assert_eq!(graph.edge_count(), 49);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
pub fn generate_unipartite<R: RandomSource + ?Sized>(
    params: &UnipartiteParams,
    rng: &mut R,
) -> Result<Graph> {
    generate_unipartite_traced(params, rng).map(Generated::into_graph)
}

/// Generates an RSRG graph and records every growth step.
///
/// # Errors
/// Propagates [`crate::GraphError::UnsatisfiablePredicate`] from target
/// selection; validated parameters always leave a qualifying target.
#[instrument(
    name = "core.generate_unipartite",
    err,
    skip(params, rng),
    fields(
        nodes = params.num_nodes.get(),
        p = params.probability,
        topology = ?params.initial_topology,
        selection = ?params.selection,
    ),
)]
pub fn generate_unipartite_traced<R: RandomSource + ?Sized>(
    params: &UnipartiteParams,
    rng: &mut R,
) -> Result<Generated> {
    let num_nodes = params.num_nodes.get();
    let mut graph = match params.initial_topology {
        InitialTopology::SingleNode => {
            let mut graph = Graph::new();
            graph.add_node(NodeId::new(1));
            graph
        }
        InitialTopology::Path => Graph::path(num_nodes),
    };

    let mut steps = Vec::with_capacity(num_nodes - 1);
    for id in 2..=num_nodes {
        let node = NodeId::new(id);
        graph.add_node(node);
        steps.push(grow(&mut graph, node, params, rng)?);
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "unipartite generation completed"
    );
    Ok(Generated { graph, steps })
}

fn grow<R: RandomSource + ?Sized>(
    graph: &mut Graph,
    node: NodeId,
    params: &UnipartiteParams,
    rng: &mut R,
) -> Result<GrowthStep> {
    let target = params
        .selection
        .choose(graph, rng, |candidate| candidate != node)?;
    let target_degree = graph.degree(target)?;
    let attached = graph.add_edge(node, target)?;

    // Adding edges at `node` never touches the target's neighbour set, so a
    // snapshot sees exactly the neighbours present after attachment.
    let neighbours: Vec<NodeId> = graph
        .neighbors(target)?
        .filter(|&neighbour| neighbour != node)
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
