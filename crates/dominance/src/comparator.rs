use crate::error::DominanceError;
use core_types::{DimensionSubset, PerformanceVector};
use rust_decimal::Decimal;

/// Returns true iff `a` Pareto-dominates `b` when both are restricted to the
/// dimensions in `dims`: at least as good everywhere, strictly better
/// somewhere.
///
/// Equality on every compared dimension yields `false` in both directions;
/// equal vectors coexist on the same frontier. Fails if either vector lacks
/// a value for any index in `dims`.
pub fn dominates(
    a: &PerformanceVector,
    b: &PerformanceVector,
    dims: &DimensionSubset,
) -> Result<bool, DominanceError> {
    let va = project(a, dims)?;
    let vb = project(b, dims)?;
    Ok(strictly_dominates(&va, &vb))
}

/// Restricts a vector to the given dimensions, in subset order.
pub fn project(
    vector: &PerformanceVector,
    dims: &DimensionSubset,
) -> Result<Vec<Decimal>, DominanceError> {
    dims.indices()
        .iter()
        .map(|&index| {
            vector.value(index).ok_or_else(|| DominanceError::MissingValue {
                id: vector.id.clone(),
                index,
            })
        })
        .collect()
}

/// The dominance predicate over two already-projected value rows.
///
/// Callers guarantee the rows were projected through the same subset, so the
/// slices are always the same length.
pub fn strictly_dominates(a: &[Decimal], b: &[Decimal]) -> bool {
    let mut strictly_better_somewhere = false;
    for (x, y) in a.iter().zip(b.iter()) {
        if x < y {
            return false;
        }
        if x > y {
            strictly_better_somewhere = true;
        }
    }
    strictly_better_somewhere
}
