//! Graph generators producing [`crate::SimulationGraph`] values.
//!
//! - [`connected_gnp_graph`]: G(n,p) repaired into a single component.
//! - [`barabasi_albert`]: preferential attachment, unmodified.
//! - [`groups_graph`]: connected groups joined by [`connect_groups`].

mod attachment;
mod connected;
mod groups;

pub use attachment::barabasi_albert;
pub use connected::{DEFAULT_COMPLETION, connected_gnp, connected_gnp_graph};
pub use groups::{Group, GroupCompletion, GroupsGraph, connect_groups, groups_graph};

pub(crate) use groups::compose_groups;
