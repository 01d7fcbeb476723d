pub mod dimensions;
pub mod error;
pub mod vector;

// Re-export the core types to provide a clean public API.
pub use dimensions::{DimensionSet, DimensionSubset};
pub use error::CoreError;
pub use vector::{PerformanceVector, SkippedEntry};
