//! # Pantheon Dominance
//!
//! The pairwise Pareto-dominance predicate and the frontier extractor built
//! on top of it. Everything above this crate (layering, sub-frontier
//! analysis, the dominance graph, percentiles) reduces to these two
//! operations.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** A pure logic crate. It depends only on `core-types`
//!   and touches no I/O; every function is a deterministic transform of its
//!   arguments.
//! - **Strict Partial Order:** `dominates` is irreflexive and antisymmetric
//!   by construction. Vectors that are equal on every compared dimension do
//!   not dominate each other in either direction, so ties coexist on the
//!   same frontier.
//! - **Ineligible Means Invisible:** A vector missing a value on any compared
//!   dimension is excluded from a frontier call entirely: it neither
//!   dominates nor is dominated, and it is reported back to the caller as
//!   skipped, never silently dropped.
//!
//! ## Public API
//!
//! - `dominates`: the checked pairwise predicate.
//! - `extract_frontier` / `frontier_among`: non-dominated subset extraction.
//! - `project` / `strictly_dominates`: the building blocks, exposed for the
//!   sibling crates that batch-compare projected vectors.
//! - `DominanceError`: the specific error types returned from this crate.

pub mod comparator;
pub mod error;
pub mod frontier;

// Re-export the core types to provide a clean public API.
pub use comparator::{dominates, project, strictly_dominates};
pub use error::DominanceError;
pub use frontier::{extract_frontier, frontier_among, FrontierResult};
