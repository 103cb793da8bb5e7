//! Benchmark parameter types.
//!
//! Each struct renders as the Criterion parameter label of one input size.

use std::fmt;

/// Parameters for a unipartite generation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnipartiteBenchParams {
    /// Number of nodes grown.
    pub node_count: usize,
    /// Triangulation probability.
    pub probability: f64,
}

impl fmt::Display for UnipartiteBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.node_count, self.probability)
    }
}

/// Parameters for a bipartite generation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BipartiteBenchParams {
    /// Number of LEFT nodes.
    pub left: usize,
    /// Number of RIGHT nodes.
    pub right: usize,
    /// Triangulation probability.
    pub probability: f64,
}

impl fmt::Display for BipartiteBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={},right={},p={}",
            self.left, self.right, self.probability
        )
    }
}

/// Parameters for a run that only varies the node count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeBenchParams {
    /// Number of nodes.
    pub node_count: usize,
}

impl fmt::Display for SizeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.node_count)
    }
}
