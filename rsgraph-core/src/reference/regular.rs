//! Uniform random `d`-regular graphs by stub pairing.

use std::collections::{BTreeMap, BTreeSet};
use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use super::{numbered, require};
use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};
use crate::random::RandomSource;
use crate::validation;

/// Restarts allowed before [`random_regular`] gives up.
pub(crate) const MAX_PAIRING_ATTEMPTS: usize = 1_000;

type Pair = (usize, usize);

/// Builds a random graph in which every node has degree `degree`.
///
/// Each node contributes `degree` stubs. Shuffled stubs are paired off; pairs
/// that would form a self-loop or a parallel edge go back into the pool and
/// are reshuffled. When the leftover stubs can no longer form a new edge the
/// attempt restarts from scratch.
///
/// # Errors
/// Returns [`GraphError::InvalidArgument`] when `num_nodes` is zero,
/// `degree >= num_nodes`, or `num_nodes * degree` is odd, and
/// [`GraphError::GenerationExhausted`] after [`MAX_PAIRING_ATTEMPTS`] failed
/// attempts.
///
/// # Examples
/// ```
/// use rsgraph_core::{SeededRandom, random_regular};
///
/// let graph = random_regular(3, 10, &mut SeededRandom::new(2))?;
/// assert!(graph.degrees().all(|(_, degree)| degree == 3));
/// assert_eq!(graph.edge_count(), 15);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[instrument(name = "core.random_regular", err, skip(rng))]
pub fn random_regular<R: RandomSource + ?Sized>(
    degree: usize,
    num_nodes: usize,
    rng: &mut R,
) -> Result<Graph> {
    let node_count = validation::positive("num_nodes", num_nodes)?.get();
    require(
        degree < node_count,
        "degree",
        format!("must be smaller than the node count {node_count} (got {degree})"),
    )?;
    let stub_count = node_count.checked_mul(degree);
    require(
        stub_count.is_some(),
        "degree",
        format!("{node_count} nodes of degree {degree} overflow the stub count"),
    )?;
    require(
        stub_count.is_some_and(|count| count.is_multiple_of(2)),
        "degree",
        format!("{node_count} nodes of degree {degree} leave an unpaired stub"),
    )?;

    let mut graph = numbered(node_count);
    if degree == 0 {
        return Ok(graph);
    }

    for attempt in 1..=MAX_PAIRING_ATTEMPTS {
        if let Some(edges) = try_pairing(degree, node_count, rng) {
            for (u, v) in edges {
                graph.add_edge(NodeId::new(u), NodeId::new(v))?;
            }
            return Ok(graph);
        }
        debug!(attempt, "stub pairing stalled, restarting");
    }
    Err(GraphError::GenerationExhausted {
        model: "random_regular",
        attempts: MAX_PAIRING_ATTEMPTS,
    })
}

fn try_pairing<R: RandomSource + ?Sized>(
    degree: usize,
    num_nodes: usize,
    rng: &mut R,
) -> Option<BTreeSet<Pair>> {
    let mut edges = BTreeSet::new();
    let mut stubs: Vec<usize> = (0..degree).flat_map(|_| 1..=num_nodes).collect();

    while !stubs.is_empty() {
        shuffle(&mut stubs, rng);
        let mut leftover: BTreeMap<usize, usize> = BTreeMap::new();
        for pair in stubs.chunks_exact(2) {
            let &[a, b] = pair else {
                continue;
            };
            let edge = (a.min(b), a.max(b));
            if a == b || !edges.insert(edge) {
                *leftover.entry(a).or_default() += 1;
                *leftover.entry(b).or_default() += 1;
            }
        }
        if !can_progress(&edges, &leftover) {
            return None;
        }
        stubs = leftover
            .into_iter()
            .flat_map(|(node, count)| std::iter::repeat_n(node, count))
            .collect();
    }
    Some(edges)
}

/// Whether two distinct leftover nodes are still unconnected.
fn can_progress(edges: &BTreeSet<Pair>, leftover: &BTreeMap<usize, usize>) -> bool {
    if leftover.is_empty() {
        return true;
    }
    let nodes: Vec<usize> = leftover.keys().copied().collect();
    nodes.iter().enumerate().any(|(position, &u)| {
        nodes
            .iter()
            .skip(position + 1)
            .any(|&v| !edges.contains(&(u, v)))
    })
}

/// Fisher–Yates shuffle driven by `rng`.
fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for upper in (1..items.len()).rev() {
        let Some(len) = NonZeroUsize::new(upper + 1) else {
            continue;
        };
        let other = rng.uniform_index(len);
        items.swap(upper, other);
    }
}
