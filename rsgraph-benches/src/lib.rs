//! Benchmark support crate for rsgraph.
//!
//! Holds the parameter types Criterion benchmarks use to label their inputs.

pub mod params;
