//! Synthetic graph generation for simulation inputs.
//!
//! Builds connected random graphs, preferential-attachment graphs and
//! multi-group graphs whose groups are joined by a bounded random number of
//! edges. All randomness is drawn from a caller-supplied [`RandomSource`].
//!
//! # Examples
//! ```
//! use simgraph_core::{groups_graph, seeded_rng};
//!
//! let mut rng = seeded_rng(42);
//! let (graph, groups) = groups_graph(&mut rng, &[3, 3, 3], 0.5, 2)?.into_parts();
//! assert_eq!(graph.graph().node_count(), 9);
//! assert_eq!(groups.len(), 3);
//! # Ok::<(), simgraph_core::GenerationError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod generators;
mod graph;
mod primitives;
mod random;
mod simulation_graph;

pub use crate::{
    builder::{GroupsGraphBuilder, GroupsGraphConfig},
    error::{GenerationError, GenerationErrorCode, GraphError, GraphErrorCode, Result},
    generators::{
        DEFAULT_COMPLETION, Group, GroupCompletion, GroupsGraph, barabasi_albert, connect_groups,
        connected_gnp, connected_gnp_graph, groups_graph,
    },
    graph::{Edge, Graph},
    primitives::{barabasi_albert_graph, gnp_random_graph},
    random::{RandomSource, entropy_rng, seeded_rng},
    simulation_graph::SimulationGraph,
};
