//! Random graph primitives.
//!
//! G(n,p) sampling and Barabási–Albert preferential attachment, the raw
//! models the generators in [`crate::generators`] post-process.

mod barabasi_albert;
mod gnp;
#[cfg(test)]
mod tests;

pub use barabasi_albert::barabasi_albert_graph;
pub use gnp::gnp_random_graph;

use crate::error::{GenerationError, Result};

/// Rejects probabilities that are not finite values in `[0, 1]`.
pub(crate) fn validate_probability(parameter: &'static str, p: f64) -> Result<f64> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(GenerationError::invalid(
            parameter,
            format!("probability must lie in [0, 1] (got {p})"),
        ))
    }
}
