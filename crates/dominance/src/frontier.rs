use crate::comparator::strictly_dominates;
use crate::error::DominanceError;
use core_types::{DimensionSubset, PerformanceVector, SkippedEntry};
use rust_decimal::Decimal;

/// The outcome of one frontier extraction.
///
/// `members` and `skipped` are disjoint; entries missing a value on any
/// compared dimension land in `skipped` and take no part in the comparison,
/// in either role.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierResult {
    /// Indices into the population, ascending, of the non-dominated entries.
    pub members: Vec<usize>,
    pub skipped: Vec<SkippedEntry>,
}

/// Computes the Pareto frontier of `population` under `dims`.
///
/// An entry is a member iff no other eligible entry dominates it. The scan is
/// the plain O(n² · |dims|) pairwise comparison; that is the reference
/// behavior any shortcut would have to reproduce exactly.
pub fn extract_frontier(population: &[PerformanceVector], dims: &DimensionSubset) -> FrontierResult {
    let mut projected: Vec<(usize, Vec<Decimal>)> = Vec::with_capacity(population.len());
    let mut skipped = Vec::new();

    for (index, vector) in population.iter().enumerate() {
        match try_project(vector, dims) {
            Some(row) => projected.push((index, row)),
            None => skipped.push(SkippedEntry {
                id: vector.id.clone(),
                reason: format!("missing value on dimension subset {dims}"),
            }),
        }
    }

    FrontierResult {
        members: non_dominated(&projected),
        skipped,
    }
}

/// Computes the frontier of the sub-population given by `candidates`
/// (indices into `population`), under `dims`.
///
/// Unlike `extract_frontier`, an ineligible candidate is an error here: the
/// caller has already partitioned eligibility and a gap means its working
/// set is corrupt.
pub fn frontier_among(
    population: &[PerformanceVector],
    candidates: &[usize],
    dims: &DimensionSubset,
) -> Result<Vec<usize>, DominanceError> {
    let projected: Vec<(usize, Vec<Decimal>)> = candidates
        .iter()
        .map(|&index| {
            let vector = &population[index];
            crate::comparator::project(vector, dims).map(|row| (index, row))
        })
        .collect::<Result<_, _>>()?;

    Ok(non_dominated(&projected))
}

fn try_project(vector: &PerformanceVector, dims: &DimensionSubset) -> Option<Vec<Decimal>> {
    dims.indices().iter().map(|&i| vector.value(i)).collect()
}

/// The non-dominated subset of a list of projected rows. Preserves the input
/// order of the surviving indices.
fn non_dominated(projected: &[(usize, Vec<Decimal>)]) -> Vec<usize> {
    let mut members = Vec::new();
    for (i, (index, row)) in projected.iter().enumerate() {
        let dominated = projected
            .iter()
            .enumerate()
            .any(|(j, (_, other))| i != j && strictly_dominates(other, row));
        if !dominated {
            members.push(*index);
        }
    }
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn vector(id: &str, values: &[i64]) -> PerformanceVector {
        PerformanceVector::new(
            id,
            values.iter().map(|&v| Some(Decimal::from(v))).collect(),
        )
    }

    #[test]
    fn dominated_entry_is_excluded_from_the_frontier() {
        // A and B trade off against each other; C loses to both.
        let population = vec![
            vector("a", &[30, 10, 5]),
            vector("b", &[25, 12, 6]),
            vector("c", &[20, 8, 4]),
        ];
        let result = extract_frontier(&population, &DimensionSubset::full(3));
        assert_eq!(result.members, vec![0, 1]);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn equal_vectors_share_the_frontier() {
        let population = vec![
            vector("a", &[10, 10, 10]),
            vector("b", &[10, 10, 10]),
            vector("c", &[5, 5, 5]),
        ];
        let result = extract_frontier(&population, &DimensionSubset::full(3));
        assert_eq!(result.members, vec![0, 1]);
    }

    #[test]
    fn ineligible_entry_is_skipped_not_dominated() {
        // The gapped entry would dominate everything if its hole were treated
        // as a zero; it must instead sit out entirely.
        let population = vec![
            PerformanceVector::new("gap", vec![Some(dec!(99)), None, Some(dec!(99))]),
            vector("a", &[30, 10, 5]),
        ];
        let result = extract_frontier(&population, &DimensionSubset::full(3));
        assert_eq!(result.members, vec![1]);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].id, "gap");
    }

    #[test]
    fn skipped_entry_does_not_rescue_a_dominated_one() {
        let population = vec![
            PerformanceVector::new("gap", vec![None, None, None]),
            vector("a", &[30, 10, 5]),
            vector("c", &[20, 8, 4]),
        ];
        let result = extract_frontier(&population, &DimensionSubset::full(3));
        assert_eq!(result.members, vec![1]);
    }

    #[test]
    fn frontier_among_respects_the_candidate_set() {
        let population = vec![
            vector("a", &[30, 10, 5]),
            vector("b", &[25, 12, 6]),
            vector("c", &[20, 8, 4]),
        ];
        // With A removed from the working set, C is still beaten by B.
        let members =
            frontier_among(&population, &[1, 2], &DimensionSubset::full(3)).unwrap();
        assert_eq!(members, vec![1]);
    }

    #[test]
    fn frontier_among_rejects_an_ineligible_candidate() {
        let population = vec![
            PerformanceVector::new("gap", vec![Some(dec!(1)), None, Some(dec!(1))]),
            vector("a", &[30, 10, 5]),
        ];
        let err = frontier_among(&population, &[0, 1], &DimensionSubset::full(3)).unwrap_err();
        assert_eq!(err, DominanceError::MissingValue { id: "gap".into(), index: 1 });
    }

    #[test]
    fn extracting_a_frontier_from_a_frontier_changes_nothing() {
        let population = vec![
            vector("a", &[30, 10, 5]),
            vector("b", &[25, 12, 6]),
            vector("c", &[20, 8, 4]),
            vector("d", &[10, 14, 2]),
            vector("e", &[5, 5, 5]),
        ];
        let dims = DimensionSubset::full(3);
        let first = extract_frontier(&population, &dims);

        let members: Vec<PerformanceVector> = first
            .members
            .iter()
            .map(|&index| population[index].clone())
            .collect();
        let second = extract_frontier(&members, &dims);

        // No member of a frontier dominates another, so every one survives a
        // second extraction.
        assert_eq!(second.members, (0..members.len()).collect::<Vec<_>>());
    }

    #[test]
    fn single_entry_population_is_its_own_frontier() {
        let population = vec![vector("a", &[1, 2, 3])];
        let result = extract_frontier(&population, &DimensionSubset::full(3));
        assert_eq!(result.members, vec![0]);
    }
}
