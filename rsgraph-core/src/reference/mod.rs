//! Reference random-graph models used as comparison baselines.
//!
//! Each generator draws from the same [`RandomSource`] as the recursive
//! models and numbers its nodes from `1`, so degree statistics and
//! reproducibility work the same way across every model.

mod preferential;
mod regular;
mod small_world;

pub use preferential::barabasi_albert;
pub use regular::random_regular;
pub use small_world::watts_strogatz;

use tracing::{instrument, warn};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId, Partition};
use crate::random::{RandomSource, choose_node};
use crate::validation;

pub(crate) fn numbered(count: usize) -> Graph {
    let mut graph = Graph::new();
    for id in 1..=count {
        graph.add_node(NodeId::new(id));
    }
    graph
}

/// Erdős–Rényi `G(n, p)`: every unordered pair is joined independently with
/// probability `p`.
///
/// # Errors
/// Returns [`GraphError::InvalidArgument`] when `num_nodes` is zero or `p` is
/// not a probability.
///
/// # Examples
/// ```
/// use rsgraph_core::{SeededRandom, erdos_renyi};
///
/// let graph = erdos_renyi(10, 1.0, &mut SeededRandom::new(1))?;
/// assert_eq!(graph.edge_count(), 45);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[instrument(name = "core.erdos_renyi", err, skip(rng))]
pub fn erdos_renyi<R: RandomSource + ?Sized>(
    num_nodes: usize,
    p: f64,
    rng: &mut R,
) -> Result<Graph> {
    let node_count = validation::positive("num_nodes", num_nodes)?.get();
    let threshold = validation::probability("p", p)?;

    let mut graph = numbered(node_count);
    for i in 1..=node_count {
        for j in (i + 1)..=node_count {
            if rng.uniform_probability() < threshold {
                graph.add_edge(NodeId::new(i), NodeId::new(j))?;
            }
        }
    }
    Ok(graph)
}

/// Random partition graph: nodes are split into consecutive blocks of the
/// given sizes; pairs inside a block are joined with probability `p_in` and
/// pairs across blocks with probability `p_out`.
///
/// # Errors
/// Returns [`GraphError::InvalidArgument`] when the blocks hold no nodes,
/// their sizes overflow `usize`, or a probability is out of range.
///
/// # Examples
/// ```
/// use rsgraph_core::{SeededRandom, random_partition};
///
/// let graph = random_partition(&[3, 3], 1.0, 0.0, &mut SeededRandom::new(1))?;
/// assert_eq!(graph.edge_count(), 6);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[instrument(name = "core.random_partition", err, skip(rng))]
pub fn random_partition<R: RandomSource + ?Sized>(
    sizes: &[usize],
    p_in: f64,
    p_out: f64,
    rng: &mut R,
) -> Result<Graph> {
    let node_count = validation::node_total("sizes", sizes)?.get();
    let within = validation::probability("p_in", p_in)?;
    let across = validation::probability("p_out", p_out)?;

    let block_of: Vec<usize> = sizes
        .iter()
        .enumerate()
        .flat_map(|(block, &size)| std::iter::repeat_n(block, size))
        .collect();

    let mut graph = numbered(node_count);
    for (i, block_i) in block_of.iter().enumerate() {
        for (j, block_j) in block_of.iter().enumerate().skip(i + 1) {
            let threshold = if block_i == block_j { within } else { across };
            if rng.uniform_probability() < threshold {
                graph.add_edge(NodeId::new(i + 1), NodeId::new(j + 1))?;
            }
        }
    }
    Ok(graph)
}

/// Random recursive tree: node `i` attaches to a node drawn uniformly from
/// `1..i`.
///
/// # Errors
/// Returns [`GraphError::InvalidArgument`] when `num_nodes` is zero.
///
/// # Examples
/// ```
/// use rsgraph_core::{SeededRandom, random_recursive_tree};
///
/// let tree = random_recursive_tree(20, &mut SeededRandom::new(4))?;
/// assert_eq!(tree.edge_count(), 19);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[instrument(name = "core.random_recursive_tree", err, skip(rng))]
pub fn random_recursive_tree<R: RandomSource + ?Sized>(
    num_nodes: usize,
    rng: &mut R,
) -> Result<Graph> {
    let node_count = validation::positive("num_nodes", num_nodes)?.get();
    let mut graph = numbered(1);
    for id in 2..=node_count {
        let parent = choose_node(&graph, rng)?;
        let node = NodeId::new(id);
        graph.add_node(node);
        graph.add_edge(node, parent)?;
    }
    Ok(graph)
}

/// Random bipartite graph: LEFT nodes `1..=num_left`, RIGHT nodes after them,
/// each LEFT-RIGHT pair joined independently with probability `p`.
///
/// # Errors
/// Returns [`GraphError::InvalidArgument`] when either side is empty, the
/// sides overflow the node count, or `p` is not a probability.
#[instrument(name = "core.random_bipartite", err, skip(rng))]
pub fn random_bipartite<R: RandomSource + ?Sized>(
    num_left: usize,
    num_right: usize,
    p: f64,
    rng: &mut R,
) -> Result<Graph> {
    let left = validation::positive("num_left", num_left)?.get();
    validation::positive("num_right", num_right)?;
    let node_count = validation::node_total("num_right", &[num_left, num_right])?.get();
    let threshold = validation::probability("p", p)?;

    let mut graph = Graph::new();
    for id in 1..=left {
        graph.add_labelled_node(NodeId::new(id), Partition::Left);
    }
    for id in (left + 1)..=node_count {
        graph.add_labelled_node(NodeId::new(id), Partition::Right);
    }
    for u in 1..=left {
        for v in (left + 1)..=node_count {
            if rng.uniform_probability() < threshold {
                graph.add_edge(NodeId::new(u), NodeId::new(v))?;
            }
        }
    }
    Ok(graph)
}

fn require(condition: bool, parameter: &'static str, reason: impl Into<String>) -> Result<()> {
    if condition {
        return Ok(());
    }
    let message = reason.into();
    warn!(parameter, reason = %message, "rejecting model argument");
    Err(GraphError::invalid(parameter, message))
}

#[cfg(test)]
mod tests;
