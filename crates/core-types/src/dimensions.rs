use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An ordered, named list of statistical dimensions for one analysis mode.
///
/// Dimension indices are implicit: `dimensions[i]` names the value found at
/// position `i` of every `PerformanceVector` analyzed under this set. Two
/// modes (e.g. a 6-dimension season profile and a 3-dimension counting-stat
/// profile) are two distinct `DimensionSet`s and always run independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionSet {
    name: String,
    dimensions: Vec<String>,
}

impl DimensionSet {
    pub fn new(name: impl Into<String>, dimensions: Vec<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if dimensions.is_empty() {
            return Err(CoreError::EmptyDimensionSet(name));
        }
        for (i, dimension) in dimensions.iter().enumerate() {
            if dimensions[..i].contains(dimension) {
                return Err(CoreError::DuplicateDimension {
                    set: name,
                    dimension: dimension.clone(),
                });
            }
        }
        Ok(Self { name, dimensions })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension_names(&self) -> &[String] {
        &self.dimensions
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// The subset containing every index of this set.
    pub fn full_subset(&self) -> DimensionSubset {
        DimensionSubset::full(self.len())
    }

    /// Resolves a subset's indices back to dimension names, in subset order.
    pub fn subset_names(&self, subset: &DimensionSubset) -> Vec<String> {
        subset
            .indices()
            .iter()
            .map(|&i| self.dimensions[i].clone())
            .collect()
    }
}

/// A non-empty subset of a `DimensionSet`'s indices, held in canonical
/// ascending order.
///
/// Subsets are totally ordered by (size, then lexicographic index sequence).
/// That order is the deterministic tie-break applied when several subsets of
/// the same minimal size all keep an entry on a frontier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionSubset(Vec<usize>);

impl DimensionSubset {
    /// Canonicalizes `indices` (sorted ascending, duplicates removed).
    pub fn new(mut indices: Vec<usize>) -> Result<Self, CoreError> {
        indices.sort_unstable();
        indices.dedup();
        if indices.is_empty() {
            return Err(CoreError::EmptySubset);
        }
        Ok(Self(indices))
    }

    /// The subset `{0, 1, .., len - 1}`.
    pub fn full(len: usize) -> Self {
        debug_assert!(len > 0, "a dimension set is never empty");
        Self((0..len).collect())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Ord for DimensionSubset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for DimensionSubset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DimensionSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "}}")
    }
}
