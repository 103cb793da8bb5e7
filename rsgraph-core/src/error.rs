//! Error types for the rsgraph core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by graph construction, selection, and statistics.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A size or probability parameter was outside its accepted range.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of the accepted range.
        reason: String,
    },
    /// Selection or statistics were requested on a graph with no nodes.
    #[error("graph contains no nodes")]
    EmptyGraph,
    /// No node in the graph satisfied a selection predicate.
    #[error("no node satisfied the selection predicate after {attempts} attempts")]
    UnsatisfiablePredicate {
        /// Number of candidates inspected or draws rejected before giving up.
        attempts: usize,
    },
    /// An edge referenced a node that is not part of the graph.
    #[error("node {node} is not part of the graph")]
    UnknownNode {
        /// The missing node.
        node: NodeId,
    },
    /// An edge joined a node to itself.
    #[error("self-loop on node {node} is not permitted")]
    SelfLoop {
        /// The node that would have been joined to itself.
        node: NodeId,
    },
    /// A bipartite operation was applied to a graph without partition labels.
    #[error("graph carries no partition labels")]
    Unlabelled,
    /// A generator that restarts on dead ends ran out of attempts.
    #[error("{model} generation gave up after {attempts} attempts")]
    GenerationExhausted {
        /// Name of the generator that gave up.
        model: &'static str,
        /// Number of restarts performed.
        attempts: usize,
    },
}

impl GraphError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A size or probability parameter was outside its accepted range.
        InvalidArgument => InvalidArgument { .. } => "GRAPH_INVALID_ARGUMENT",
        /// Selection or statistics were requested on a graph with no nodes.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// No node in the graph satisfied a selection predicate.
        UnsatisfiablePredicate => UnsatisfiablePredicate { .. } => "GRAPH_UNSATISFIABLE_PREDICATE",
        /// An edge referenced a node that is not part of the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// An edge joined a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// A bipartite operation was applied to a graph without partition labels.
        Unlabelled => Unlabelled => "GRAPH_UNLABELLED",
        /// A generator that restarts on dead ends ran out of attempts.
        GenerationExhausted => GenerationExhausted { .. } => "GRAPH_GENERATION_EXHAUSTED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
