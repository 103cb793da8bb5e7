//! Recursive scale-free graph generators.
//!
//! Both variants grow a graph one node at a time. Each new node attaches to a
//! uniformly chosen target and then copies every eligible neighbour of that
//! target independently with probability `p`. Copying a neighbourhood makes
//! well-connected nodes likelier to be reached again, which produces a heavy
//! tailed degree distribution without degree-proportional sampling.
//!
//! - [`generate_unipartite`] grows the unipartite model (RSRG).
//! - [`generate_bipartite`] grows the bipartite model (RSRBG), attaching LEFT
//!   nodes to RIGHT targets.
//!
//! The `_traced` variants additionally return one [`GrowthStep`] per
//! processed node.

mod bipartite;
mod unipartite;

pub use bipartite::{
    BipartiteParams, TriangulationRule, generate_bipartite, generate_bipartite_traced,
};
pub use unipartite::{
    InitialTopology, UnipartiteParams, generate_unipartite, generate_unipartite_traced,
};

use crate::graph::{Graph, NodeId};

/// Record of a single growth step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthStep {
    /// Node processed by this step.
    pub node: NodeId,
    /// Target chosen by the attachment step.
    pub target: NodeId,
    /// Degree of `target` before the attachment edge was added.
    pub target_degree: usize,
    /// Whether the attachment edge was new (it may already exist when the
    /// graph was seeded with a path).
    pub attached: bool,
    /// Neighbours of `target` newly joined to `node` by triangulation, in
    /// the order they were examined.
    pub triangulated: Vec<NodeId>,
}

impl GrowthStep {
    /// Number of edges this step added.
    #[must_use]
    pub fn edges_added(&self) -> usize {
        usize::from(self.attached) + self.triangulated.len()
    }
}

/// Graph produced by a traced generator together with its growth steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    /// The finished graph.
    pub graph: Graph,
    /// Growth steps in processing order.
    pub steps: Vec<GrowthStep>,
}

impl Generated {
    /// Discards the trace and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod property;
