//! Degree statistics for generated graphs.
//!
//! The histogram is indexed by degree, from zero up to the maximum degree, and
//! the probability mass function divides each bucket by the node count.

use serde::Serialize;
use tracing::instrument;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Counts nodes per degree.
///
/// The result has length `max_degree + 1`; entry `d` is the number of nodes
/// with degree `d`.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when `graph` has no nodes.
///
/// # Examples
/// ```
/// use rsgraph_core::{Graph, degree_histogram};
///
/// let histogram = degree_histogram(&Graph::path(4))?;
/// assert_eq!(histogram, vec![0, 2, 2]);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
pub fn degree_histogram(graph: &Graph) -> Result<Vec<usize>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let max_degree = graph.degrees().map(|(_, degree)| degree).max().unwrap_or(0);
    let mut histogram = vec![0_usize; max_degree + 1];
    for (_, degree) in graph.degrees() {
        if let Some(bucket) = histogram.get_mut(degree) {
            *bucket += 1;
        }
    }
    Ok(histogram)
}

/// Fraction of nodes per degree.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when `graph` has no nodes.
///
/// # Examples
/// ```
/// use rsgraph_core::{Graph, degree_pmf};
///
/// let pmf = degree_pmf(&Graph::path(4))?;
/// assert_eq!(pmf, vec![0.0, 0.5, 0.5]);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
pub fn degree_pmf(graph: &Graph) -> Result<Vec<f64>> {
    let histogram = degree_histogram(graph)?;
    Ok(normalise(&histogram, graph.node_count()))
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "degree probabilities are float ratios of node counts"
)]
fn normalise(histogram: &[usize], node_count: usize) -> Vec<f64> {
    let total = node_count as f64;
    histogram.iter().map(|&count| count as f64 / total).collect()
}

/// Degree histogram of a graph together with its size.
///
/// # Examples
/// ```
/// use rsgraph_core::{DegreeDistribution, Graph};
///
/// let distribution = DegreeDistribution::from_graph(&Graph::path(3))?;
/// assert_eq!(distribution.max_degree(), 2);
/// assert_eq!(distribution.edge_count(), 2);
/// let rows: Vec<(usize, usize)> = distribution
///     .iter()
///     .map(|(degree, count, _)| (degree, count))
///     .collect();
/// assert_eq!(rows, vec![(0, 0), (1, 2), (2, 1)]);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DegreeDistribution {
    node_count: usize,
    edge_count: usize,
    histogram: Vec<usize>,
}

impl DegreeDistribution {
    /// Computes the distribution of `graph`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `graph` has no nodes.
    #[instrument(
        name = "core.degree_distribution",
        err,
        skip(graph),
        fields(nodes = graph.node_count(), edges = graph.edge_count()),
    )]
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        Ok(Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            histogram: degree_histogram(graph)?,
        })
    }

    /// Number of nodes in the source graph.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges in the source graph.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Node counts indexed by degree.
    #[must_use]
    pub fn histogram(&self) -> &[usize] {
        &self.histogram
    }

    /// Largest degree present.
    #[must_use]
    pub const fn max_degree(&self) -> usize {
        self.histogram.len().saturating_sub(1)
    }

    /// Average degree, `2 * edges / nodes`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "the mean degree is a float ratio of edge endpoints to nodes"
    )]
    pub const fn mean_degree(&self) -> f64 {
        (2 * self.edge_count) as f64 / self.node_count as f64
    }

    /// Fraction of nodes per degree.
    #[must_use]
    pub fn pmf(&self) -> Vec<f64> {
        normalise(&self.histogram, self.node_count)
    }

    /// `(degree, count, probability)` for every degree up to the maximum.
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "degree probabilities are float ratios of node counts"
    )]
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let total = self.node_count as f64;
        self.histogram
            .iter()
            .enumerate()
            .map(move |(degree, &count)| (degree, count, count as f64 / total))
    }
}
