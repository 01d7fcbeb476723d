use core_types::DimensionSubset;
use itertools::Itertools;

/// Lazily enumerates every non-empty subset of `{0, .., dim_count - 1}` in
/// canonical order: by size, then lexicographically within a size.
///
/// The sequence is never materialized. For d dimensions there are 2^d - 1
/// subsets; peak memory stays bounded by a single combination buffer no
/// matter how large d gets.
pub fn enumerate_subsets(dim_count: usize) -> impl Iterator<Item = DimensionSubset> {
    (1..=dim_count).flat_map(move |size| {
        (0..dim_count)
            .combinations(size)
            .map(|indices| {
                DimensionSubset::new(indices).expect("combinations of size >= 1 are never empty")
            })
    })
}

/// The number of non-empty subsets of a `dim_count`-dimension set.
pub fn subset_count(dim_count: usize) -> u64 {
    (1u64 << dim_count) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_dimensions_yield_seven_subsets() {
        assert_eq!(subset_count(3), 7);
        assert_eq!(enumerate_subsets(3).count(), 7);
    }

    #[test]
    fn six_dimensions_yield_sixty_three_subsets() {
        assert_eq!(subset_count(6), 63);
        assert_eq!(enumerate_subsets(6).count(), 63);
    }

    #[test]
    fn enumeration_order_is_size_then_lexicographic() {
        let order: Vec<Vec<usize>> = enumerate_subsets(3)
            .map(|s| s.indices().to_vec())
            .collect();
        assert_eq!(
            order,
            vec![
                vec![0],
                vec![1],
                vec![2],
                vec![0, 1],
                vec![0, 2],
                vec![1, 2],
                vec![0, 1, 2],
            ]
        );
    }

    #[test]
    fn enumeration_matches_the_canonical_subset_order() {
        // The generator's order and DimensionSubset's Ord agree, which is
        // what makes the parallel min-merge deterministic.
        let subsets: Vec<DimensionSubset> = enumerate_subsets(4).collect();
        for pair in subsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
