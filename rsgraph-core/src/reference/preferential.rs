//! Barabási–Albert preferential attachment.

use std::num::NonZeroUsize;

use tracing::instrument;

use super::{numbered, require};
use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};
use crate::random::RandomSource;
use crate::validation;

/// Grows a graph by preferential attachment.
///
/// Starts from a star on nodes `1..=m + 1` centred on node `1`. Every later
/// node joins `m` distinct existing nodes drawn with probability proportional
/// to their degree.
///
/// # Errors
/// Returns [`GraphError::InvalidArgument`] unless `1 <= m < num_nodes`.
///
/// # Examples
/// ```
/// use rsgraph_core::{SeededRandom, barabasi_albert};
///
/// let graph = barabasi_albert(30, 2, &mut SeededRandom::new(5))?;
/// assert_eq!(graph.node_count(), 30);
/// // Star of 2 edges, then 2 edges per additional node.
/// assert_eq!(graph.edge_count(), 2 + 2 * 27);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[instrument(name = "core.barabasi_albert", err, skip(rng))]
pub fn barabasi_albert<R: RandomSource + ?Sized>(
    num_nodes: usize,
    m: usize,
    rng: &mut R,
) -> Result<Graph> {
    let edges_per_node = validation::positive("m", m)?.get();
    require(
        edges_per_node < num_nodes,
        "m",
        format!("must be smaller than the node count {num_nodes} (got {edges_per_node})"),
    )?;

    let mut graph = numbered(edges_per_node + 1);
    let hub = NodeId::new(1);
    // Each node appears once per incident edge.
    let mut repeated: Vec<NodeId> = Vec::new();
    for id in 2..=(edges_per_node + 1) {
        let leaf = NodeId::new(id);
        graph.add_edge(hub, leaf)?;
        repeated.extend([hub, leaf]);
    }

    for id in (edges_per_node + 2)..=num_nodes {
        let targets = distinct_targets(&repeated, edges_per_node, rng)?;
        let source = NodeId::new(id);
        graph.add_node(source);
        for &target in &targets {
            graph.add_edge(source, target)?;
        }
        repeated.extend(targets);
        repeated.extend(std::iter::repeat_n(source, edges_per_node));
    }
    Ok(graph)
}

/// Draws from `pool` until `count` distinct nodes were seen.
///
/// Terminates because the pool always holds more than `count` distinct
/// nodes.
fn distinct_targets<R: RandomSource + ?Sized>(
    pool: &[NodeId],
    count: usize,
    rng: &mut R,
) -> Result<Vec<NodeId>> {
    let len = NonZeroUsize::new(pool.len()).ok_or(GraphError::EmptyGraph)?;
    let mut targets = Vec::with_capacity(count);
    while targets.len() < count {
        let candidate = pool
            .get(rng.uniform_index(len))
            .copied()
            .ok_or(GraphError::EmptyGraph)?;
        if !targets.contains(&candidate) {
            targets.push(candidate);
        }
    }
    Ok(targets)
}
