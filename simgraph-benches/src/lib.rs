//! Benchmark support crate for simgraph.
//!
//! Provides the parameter types used to label Criterion benchmark inputs.

pub mod params;
