//! Undirected simple graph used by every generator in the crate.
//!
//! Nodes keep their insertion order so uniform selection by position is
//! reproducible; neighbour sets are ordered by identifier for the same
//! reason. Bipartite generators attach a [`Partition`] label to each node.

mod projection;

use std::collections::{BTreeMap, BTreeSet, btree_set};
use std::fmt;
use std::iter::Copied;

use crate::error::{GraphError, Result};

pub use projection::project;

/// Identifier of a node within a [`Graph`].
///
/// # Examples
/// ```
/// use rsgraph_core::NodeId;
///
/// let node = NodeId::new(3);
/// assert_eq!(node.get(), 3);
/// assert_eq!(node.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Side of a bipartite graph a node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Partition {
    /// The side whose nodes drive bipartite growth.
    Left,
    /// The side chosen as attachment targets.
    Right,
}

impl Partition {
    /// Returns the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Iterator over the neighbours of a node in ascending identifier order.
pub type Neighbors<'a> = Copied<btree_set::Iter<'a, NodeId>>;

/// Undirected graph without self-loops or parallel edges.
///
/// # Examples
/// ```
/// use rsgraph_core::{Graph, NodeId};
///
/// let mut graph = Graph::path(3);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
///
/// // Re-adding an existing edge is a no-op.
/// let added = graph.add_edge(NodeId::new(2), NodeId::new(1))?;
/// assert!(!added);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), rsgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    order: Vec<NodeId>,
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    labels: BTreeMap<NodeId, Partition>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates nodes `1..=len` with each node joined to its predecessor.
    ///
    /// `len == 0` yields an empty graph.
    #[must_use]
    pub fn path(len: usize) -> Self {
        let mut graph = Self::new();
        for id in 1..=len {
            let node = NodeId::new(id);
            graph.add_node(node);
            if id > 1 {
                graph.link(node, NodeId::new(id - 1));
            }
        }
        graph
    }

    /// Inserts `node`, returning `false` when it was already present.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, BTreeSet::new());
        self.order.push(node);
        true
    }

    /// Inserts `node` with a partition label.
    ///
    /// Labels are immutable: when the node already exists neither it nor its
    /// label changes and `false` is returned.
    pub fn add_labelled_node(&mut self, node: NodeId, partition: Partition) -> bool {
        if !self.add_node(node) {
            return false;
        }
        self.labels.insert(node, partition);
        true
    }

    /// Joins `u` and `v`, returning `false` when the edge already existed.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `u == v` and
    /// [`GraphError::UnknownNode`] when either endpoint is missing.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<bool> {
        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }
        for node in [u, v] {
            if !self.contains_node(node) {
                return Err(GraphError::UnknownNode { node });
            }
        }
        Ok(self.link(u, v))
    }

    /// Removes the edge between `u` and `v`, returning whether it existed.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        let removed = self
            .adjacency
            .get_mut(&u)
            .is_some_and(|neighbours| neighbours.remove(&v));
        if removed {
            if let Some(neighbours) = self.adjacency.get_mut(&v) {
                neighbours.remove(&u);
            }
            self.edge_count -= 1;
        }
        removed
    }

    fn link(&mut self, u: NodeId, v: NodeId) -> bool {
        let inserted = self.adjacency.entry(u).or_default().insert(v);
        if inserted {
            self.adjacency.entry(v).or_default().insert(u);
            self.edge_count += 1;
        }
        inserted
    }

    /// Returns whether `node` is part of the graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns whether `u` and `v` are adjacent.
    #[must_use]
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency
            .get(&u)
            .is_some_and(|neighbours| neighbours.contains(&v))
    }

    /// Number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Node at `position` in insertion order.
    #[must_use]
    pub fn node_at(&self, position: usize) -> Option<NodeId> {
        self.order.get(position).copied()
    }

    /// Neighbours of `node` in ascending identifier order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is missing.
    pub fn neighbors(&self, node: NodeId) -> Result<Neighbors<'_>> {
        self.adjacency
            .get(&node)
            .map(|neighbours| neighbours.iter().copied())
            .ok_or(GraphError::UnknownNode { node })
    }

    /// Number of edges incident to `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is missing.
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        self.adjacency
            .get(&node)
            .map(BTreeSet::len)
            .ok_or(GraphError::UnknownNode { node })
    }

    /// `(node, degree)` pairs in insertion order.
    pub fn degrees(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.order.iter().map(|node| {
            let degree = self.adjacency.get(node).map_or(0, BTreeSet::len);
            (*node, degree)
        })
    }

    /// Each edge once as `(smaller, larger)`, ordered by the smaller endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().flat_map(|(&u, neighbours)| {
            neighbours
                .range((std::ops::Bound::Excluded(u), std::ops::Bound::Unbounded))
                .map(move |&v| (u, v))
        })
    }

    /// Partition label of `node`, if it carries one.
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<Partition> {
        self.labels.get(&node).copied()
    }

    /// Returns `true` when at least one node carries a partition label.
    #[must_use]
    pub fn is_labelled(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Nodes labelled `partition`, in insertion order.
    pub fn nodes_in(&self, partition: Partition) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes()
            .filter(move |node| self.label(*node) == Some(partition))
    }
}
