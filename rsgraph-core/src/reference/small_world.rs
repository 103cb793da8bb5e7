//! Watts–Strogatz small-world model.

use tracing::instrument;

use super::{numbered, require};
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::random::{RandomSource, choose_node_with};
use crate::validation;

#[expect(
    clippy::integer_division_remainder_used,
    reason = "ring positions wrap modulo the node count"
)]
const fn ring_neighbour(node: usize, offset: usize, node_count: usize) -> usize {
    (node - 1 + offset) % node_count + 1
}

#[expect(
    clippy::integer_division,
    reason = "each side of the ring takes half of the lattice neighbours, rounded down"
)]
const fn half_width(k: usize) -> usize {
    k / 2
}

/// Builds a ring lattice in which each node is joined to its `k / 2` nearest
/// neighbours on either side, then rewires each lattice edge `(u, v)` with
/// probability `p` to `(u, w)` for a uniformly chosen `w` not already adjacent
/// to `u`.
///
/// Edges are visited offset by offset, and within an offset in node order.
/// A node already adjacent to every other node keeps its edge.
///
/// # Errors
/// Returns [`GraphError::InvalidArgument`](crate::GraphError::InvalidArgument)
/// when `num_nodes` is zero, `k >= num_nodes`, or `p` is not a probability.
///
/// # Examples
/// ```
/// use rsgraph_core::{SeededRandom, watts_strogatz};
///
/// let lattice = watts_strogatz(10, 4, 0.0, &mut SeededRandom::new(3))?;
/// assert_eq!(lattice.edge_count(), 20);
/// assert!(lattice.degrees().all(|(_, degree)| degree == 4));
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[instrument(name = "core.watts_strogatz", err, skip(rng))]
pub fn watts_strogatz<R: RandomSource + ?Sized>(
    num_nodes: usize,
    k: usize,
    p: f64,
    rng: &mut R,
) -> Result<Graph> {
    let node_count = validation::positive("num_nodes", num_nodes)?.get();
    require(
        k < node_count,
        "k",
        format!("must be smaller than the node count {node_count} (got {k})"),
    )?;
    let threshold = validation::probability("p", p)?;

    let mut graph = numbered(node_count);
    let half = half_width(k);
    for offset in 1..=half {
        for id in 1..=node_count {
            let neighbour = ring_neighbour(id, offset, node_count);
            graph.add_edge(NodeId::new(id), NodeId::new(neighbour))?;
        }
    }

    for offset in 1..=half {
        for id in 1..=node_count {
            if rng.uniform_probability() >= threshold {
                continue;
            }
            let u = NodeId::new(id);
            let v = NodeId::new(ring_neighbour(id, offset, node_count));
            if graph.degree(u)? >= node_count - 1 {
                continue;
            }
            let w = choose_node_with(&graph, rng, |candidate| {
                candidate != u && !graph.has_edge(u, candidate)
            })?;
            graph.remove_edge(u, v);
            graph.add_edge(u, w)?;
        }
    }
    Ok(graph)
}
