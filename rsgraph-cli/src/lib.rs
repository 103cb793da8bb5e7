//! Support library for the rsgraph CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and tests can
//! drive commands without spawning a process.

pub mod cli;
pub mod logging;
