//! Recursive scale-free graph generators and degree statistics.
//!
//! The crate grows undirected graphs one node at a time: each new node
//! attaches to a uniformly chosen existing node and then closes triangles with
//! that node's neighbours with a fixed probability. [`generate_unipartite`]
//! builds plain graphs and [`generate_bipartite`] grows a LEFT/RIGHT labelled
//! graph. Classical random-graph models live alongside them as comparison
//! baselines, and [`DegreeDistribution`] summarises any result.
//!
//! # Examples
//! ```
//! use rsgraph_core::{DegreeDistribution, SeededRandom, UnipartiteParams, generate_unipartite};
//!
//! let params = UnipartiteParams::new(100, 0.3)?;
//! let graph = generate_unipartite(&params, &mut SeededRandom::new(42))?;
//! let distribution = DegreeDistribution::from_graph(&graph)?;
//! assert_eq!(distribution.node_count(), 100);
//! assert!((distribution.pmf().iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! # Ok::<(), rsgraph_core::GraphError>(())
//! ```

mod error;
mod graph;
mod random;
mod recursive;
mod reference;
mod stats;
#[cfg(test)]
mod test_utils;
mod validation;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::{Graph, Neighbors, NodeId, Partition, project},
    random::{
        DEFAULT_REJECTION_ATTEMPTS, RandomSource, SeededRandom, Selection, choose_node,
        choose_node_rejecting, choose_node_with, uniform_probability,
    },
    recursive::{
        BipartiteParams, Generated, GrowthStep, InitialTopology, TriangulationRule,
        UnipartiteParams, generate_bipartite, generate_bipartite_traced, generate_unipartite,
        generate_unipartite_traced,
    },
    reference::{
        barabasi_albert, erdos_renyi, random_bipartite, random_partition, random_recursive_tree,
        random_regular, watts_strogatz,
    },
    stats::{DegreeDistribution, degree_histogram, degree_pmf},
};
