//! Core traits defined in `packhub-core` and implemented by other crates.

pub mod deps_optimizer;

pub use deps_optimizer::{DepsOptimizer, DepsOptimizerRegistry};
