//! Command implementations for the `wgraph` binary.

pub mod commands;
