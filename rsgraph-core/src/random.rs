//! Random choice utilities shared by every generator.
//!
//! Generators never touch ambient random state: callers pass a
//! [`RandomSource`] explicitly, usually a [`SeededRandom`] so runs can be
//! replayed from their seed.

use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng, distributions::Standard, rngs::SmallRng};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};

/// SplitMix64 increment (the 64-bit golden ratio) used for stream seed
/// derivation.
const STREAM_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Rejection budget used when callers ask for rejection sampling without an
/// explicit bound.
pub const DEFAULT_REJECTION_ATTEMPTS: NonZeroUsize = match NonZeroUsize::new(10_000) {
    Some(value) => value,
    None => NonZeroUsize::MIN,
};

/// Pluggable source of uniform randomness.
pub trait RandomSource {
    /// Returns a uniform draw from `[0, 1)`.
    fn uniform_probability(&mut self) -> f64;

    /// Returns a uniform index from `[0, len)`.
    fn uniform_index(&mut self, len: NonZeroUsize) -> usize;
}

/// [`RandomSource`] backed by a [`SmallRng`] seeded from an explicit value.
///
/// # Examples
/// ```
/// use rsgraph_core::{RandomSource, SeededRandom};
///
/// let mut first = SeededRandom::new(7);
/// let mut second = SeededRandom::new(7);
/// assert_eq!(first.uniform_probability(), second.uniform_probability());
/// assert_eq!(first.seed(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: SmallRng,
}

impl SeededRandom {
    /// Creates a stream from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a stream from a fresh random seed, recorded for replay.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this stream was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent stream for `index` from this stream's seed.
    ///
    /// Derivation depends only on the seed, not on how far this stream has
    /// advanced.
    ///
    /// # Examples
    /// ```
    /// use rsgraph_core::SeededRandom;
    ///
    /// let base = SeededRandom::new(42);
    /// assert_eq!(base.fork(3).seed(), SeededRandom::new(42).fork(3).seed());
    /// assert_ne!(base.fork(0).seed(), base.fork(1).seed());
    /// ```
    #[must_use]
    pub fn fork(&self, index: usize) -> Self {
        Self::new(mix_stream_seed(self.seed, index))
    }
}

impl RandomSource for SeededRandom {
    fn uniform_probability(&mut self) -> f64 {
        self.rng.sample(Standard)
    }

    fn uniform_index(&mut self, len: NonZeroUsize) -> usize {
        self.rng.gen_range(0..len.get())
    }
}

#[inline]
const fn mix_stream_seed(base_seed: u64, index: usize) -> u64 {
    splitmix64(base_seed ^ ((index as u64 + 1).wrapping_mul(STREAM_SEED_SPACING)))
}

#[inline]
const fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(STREAM_SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

/// Returns an independent uniform draw from `[0, 1)`.
pub fn uniform_probability<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    rng.uniform_probability()
}

/// Returns a node drawn uniformly from `graph`.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when `graph` has no nodes.
///
/// # Examples
/// ```
/// use rsgraph_core::{Graph, SeededRandom, choose_node};
///
/// let graph = Graph::path(4);
/// let node = choose_node(&graph, &mut SeededRandom::new(1))?;
/// assert!(graph.contains_node(node));
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
pub fn choose_node<R: RandomSource + ?Sized>(graph: &Graph, rng: &mut R) -> Result<NodeId> {
    let len = NonZeroUsize::new(graph.node_count()).ok_or(GraphError::EmptyGraph)?;
    graph
        .node_at(rng.uniform_index(len))
        .ok_or(GraphError::EmptyGraph)
}

/// Returns a node drawn uniformly from the nodes of `graph` satisfying
/// `predicate`.
///
/// Candidates are filtered once and one index is drawn among them, so the
/// call terminates whether or not any node qualifies.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when `graph` has no nodes and
/// [`GraphError::UnsatisfiablePredicate`] when no node satisfies `predicate`.
///
/// # Examples
/// ```
/// use rsgraph_core::{Graph, GraphError, NodeId, SeededRandom, choose_node_with};
///
/// let graph = Graph::path(4);
/// let mut rng = SeededRandom::new(3);
/// let node = choose_node_with(&graph, &mut rng, |node| node.get() % 2 == 0)?;
/// assert!(node == NodeId::new(2) || node == NodeId::new(4));
///
/// let err = choose_node_with(&graph, &mut rng, |node| node.get() > 10).unwrap_err();
/// assert!(matches!(err, GraphError::UnsatisfiablePredicate { .. }));
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
pub fn choose_node_with<R, P>(graph: &Graph, rng: &mut R, mut predicate: P) -> Result<NodeId>
where
    R: RandomSource + ?Sized,
    P: FnMut(NodeId) -> bool,
{
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let candidates: Vec<NodeId> = graph.nodes().filter(|node| predicate(*node)).collect();
    let len = NonZeroUsize::new(candidates.len()).ok_or(GraphError::UnsatisfiablePredicate {
        attempts: graph.node_count(),
    })?;
    candidates
        .get(rng.uniform_index(len))
        .copied()
        .ok_or(GraphError::UnsatisfiablePredicate {
            attempts: graph.node_count(),
        })
}

/// Draws nodes uniformly with [`choose_node`] until one satisfies
/// `predicate`, for at most `max_attempts` draws.
///
/// This consumes the random stream the same way as unconstrained rejection
/// sampling for as long as it runs. When the budget is spent and some node
/// still qualifies, the call finishes with a [`choose_node_with`] draw among
/// the qualifying nodes.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when `graph` has no nodes and
/// [`GraphError::UnsatisfiablePredicate`] when `max_attempts` draws were
/// rejected and no node satisfies `predicate`.
pub fn choose_node_rejecting<R, P>(
    graph: &Graph,
    rng: &mut R,
    mut predicate: P,
    max_attempts: NonZeroUsize,
) -> Result<NodeId>
where
    R: RandomSource + ?Sized,
    P: FnMut(NodeId) -> bool,
{
    for _ in 0..max_attempts.get() {
        let node = choose_node(graph, rng)?;
        if predicate(node) {
            return Ok(node);
        }
    }
    debug!(
        attempts = max_attempts.get(),
        "rejection budget spent, drawing among qualifying nodes"
    );
    choose_node_with(graph, rng, &mut predicate).map_err(|err| match err {
        GraphError::UnsatisfiablePredicate { .. } => GraphError::UnsatisfiablePredicate {
            attempts: max_attempts.get(),
        },
        other => other,
    })
}

/// Strategy generators use to pick an attachment target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Filter the candidates once and draw among them.
    #[default]
    Filtered,
    /// Redraw from the whole graph until a candidate qualifies.
    Rejection {
        /// Upper bound on rejected draws.
        max_attempts: NonZeroUsize,
    },
}

impl Selection {
    /// Rejection sampling bounded by [`DEFAULT_REJECTION_ATTEMPTS`].
    #[must_use]
    pub const fn rejection() -> Self {
        Self::Rejection {
            max_attempts: DEFAULT_REJECTION_ATTEMPTS,
        }
    }

    /// Picks a node satisfying `predicate` using this strategy.
    ///
    /// # Errors
    /// Propagates the errors of [`choose_node_with`] or
    /// [`choose_node_rejecting`].
    pub fn choose<R, P>(self, graph: &Graph, rng: &mut R, predicate: P) -> Result<NodeId>
    where
        R: RandomSource + ?Sized,
        P: FnMut(NodeId) -> bool,
    {
        match self {
            Self::Filtered => choose_node_with(graph, rng, predicate),
            Self::Rejection { max_attempts } => {
                choose_node_rejecting(graph, rng, predicate, max_attempts)
            }
        }
    }
}
