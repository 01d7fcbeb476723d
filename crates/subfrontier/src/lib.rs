//! # Pantheon Sub-Frontier Analyzer
//!
//! Answers the question "what is the smallest combination of stats under
//! which this performance is still unbeaten?" For a d-dimension mode it
//! sweeps all 2^d - 1 non-empty dimension subsets, computes the Pareto
//! frontier of the full population under each, and accumulates per entry:
//! how many subsets keep it on a frontier, the minimal subset size that
//! does, and the canonical subset achieving that minimum.
//!
//! This is the one combinatorially expensive component in the workspace and
//! the structural reason dimension sets are kept small, so the sweep runs
//! in parallel across subsets and is guarded by a warn threshold and a hard
//! dimension cap.

pub mod analyzer;
pub mod error;
pub mod subsets;

// Re-export the core types to provide a clean public API.
pub use analyzer::{SubFrontierAnalyzer, SubFrontierMembership, SubFrontierReport};
pub use error::SubFrontierError;
pub use subsets::{enumerate_subsets, subset_count};
