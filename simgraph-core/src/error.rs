//! Error types for the simgraph core library.
//!
//! Defines the graph-structure and generation error enums exposed by the
//! public API, their stable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced when mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a node id outside `0..node_count`.
    #[error("node {node} does not exist in a graph with {node_count} nodes")]
    UnknownNode {
        /// The node id that was not found.
        node: usize,
        /// Number of nodes in the graph at the time of the call.
        node_count: usize,
    },
    /// An edge connected a node to itself.
    #[error("self-loop on node {node} is not allowed")]
    SelfLoop {
        /// The node both endpoints referred to.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a node id outside the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// An edge connected a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

/// Error type produced by the graph generators.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenerationError {
    /// A numeric input was outside its valid domain.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },
    /// Per-group completions did not line up with the group sizes.
    #[error(
        "group_completion has {completions} entries but group_sizes has {group_sizes}; lengths must match"
    )]
    Configuration {
        /// Number of group sizes supplied.
        group_sizes: usize,
        /// Number of completion probabilities supplied.
        completions: usize,
    },
    /// A graph mutation failed while assembling the result.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`GenerationError`] variants.
    enum GenerationErrorCode for GenerationError {
        /// A numeric input was outside its valid domain.
        InvalidParameter => InvalidParameter { .. } => "SIMGRAPH_INVALID_PARAMETER",
        /// Per-group completions did not line up with the group sizes.
        Configuration => Configuration { .. } => "SIMGRAPH_CONFIGURATION",
        /// A graph mutation failed while assembling the result.
        GraphFailure => Graph(..) => "SIMGRAPH_GRAPH_FAILURE",
    }
}

impl GenerationError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Retrieve the inner [`GraphErrorCode`] when the error originated in a [`crate::Graph`].
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GenerationError>;
