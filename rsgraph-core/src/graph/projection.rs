//! One-mode projection of a labelled bipartite graph.

use tracing::instrument;

use super::{Graph, Partition};
use crate::error::{GraphError, Result};

/// Projects `graph` onto the nodes labelled `side`.
///
/// Two nodes of `side` are joined in the projection when they share at least
/// one neighbour. Neighbours reached through same-side edges count as well,
/// but only nodes of `side` appear in the result. Projected nodes keep their
/// label.
///
/// # Errors
/// Returns [`GraphError::Unlabelled`] when `graph` carries no labels.
///
/// # Examples
/// ```
/// use rsgraph_core::{Graph, NodeId, Partition, project};
///
/// let mut graph = Graph::new();
/// for id in 1..=2 {
///     graph.add_labelled_node(NodeId::new(id), Partition::Left);
/// }
/// graph.add_labelled_node(NodeId::new(3), Partition::Right);
/// graph.add_edge(NodeId::new(1), NodeId::new(3))?;
/// graph.add_edge(NodeId::new(2), NodeId::new(3))?;
///
/// let projected = project(&graph, Partition::Left)?;
/// assert_eq!(projected.node_count(), 2);
/// assert!(projected.has_edge(NodeId::new(1), NodeId::new(2)));
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[instrument(name = "core.project", err, skip(graph), fields(nodes = graph.node_count()))]
pub fn project(graph: &Graph, side: Partition) -> Result<Graph> {
    if !graph.is_labelled() {
        return Err(GraphError::Unlabelled);
    }

    let mut projected = Graph::new();
    for node in graph.nodes_in(side) {
        projected.add_labelled_node(node, side);
    }

    for u in graph.nodes_in(side) {
        for middle in graph.neighbors(u)? {
            for v in graph.neighbors(middle)? {
                if v != u && graph.label(v) == Some(side) {
                    projected.add_edge(u, v)?;
                }
            }
        }
    }
    Ok(projected)
}
