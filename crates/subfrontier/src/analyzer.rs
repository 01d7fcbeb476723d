use crate::error::SubFrontierError;
use crate::subsets::{enumerate_subsets, subset_count};
use core_types::{DimensionSet, DimensionSubset, PerformanceVector};
use dominance::extract_frontier;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::iter::{ParallelBridge, ParallelIterator};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Per-entry summary over every dimension subset of one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubFrontierMembership {
    /// Number of subsets for which the entry sits on that subset's frontier.
    pub pareto_count: u64,
    /// Smallest subset size keeping the entry on a frontier; `None` if the
    /// entry is never Pareto-optimal under any subset.
    pub min_pareto_dim: Option<usize>,
    /// Dimension names of the canonical minimal subset. When several subsets
    /// of the minimal size qualify, the lexicographically smallest wins.
    pub min_pareto_vars: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubFrontierReport {
    pub memberships: BTreeMap<String, SubFrontierMembership>,
    /// Non-fatal advisories raised during the sweep (e.g. subset explosion).
    pub warnings: Vec<String>,
}

/// Running totals for one entry while the sweep is in flight.
#[derive(Debug, Clone, Default)]
struct Accumulator {
    count: u64,
    best: Option<DimensionSubset>,
}

/// Sweeps every non-empty dimension subset of a mode and accumulates
/// frontier membership per entry.
///
/// The sweep is parallel across subsets: each subset reads the same
/// immutable population and folds into a thread-local accumulator, and the
/// accumulators merge by entry id. Counts are additive and the minimal
/// subset is taken under the canonical total order, so the merged result is
/// independent of scheduling.
#[derive(Debug)]
pub struct SubFrontierAnalyzer {
    warn_dims: usize,
    max_dims: usize,
}

impl Default for SubFrontierAnalyzer {
    fn default() -> Self {
        Self {
            warn_dims: Self::DEFAULT_WARN_DIMS,
            max_dims: Self::DEFAULT_MAX_DIMS,
        }
    }
}

impl SubFrontierAnalyzer {
    /// Above this many dimensions the sweep still runs, but the caller is
    /// warned about the cost.
    pub const DEFAULT_WARN_DIMS: usize = 12;
    /// Above this many dimensions the run is refused outright.
    pub const DEFAULT_MAX_DIMS: usize = 20;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(warn_dims: usize, max_dims: usize) -> Self {
        Self {
            warn_dims,
            max_dims,
        }
    }

    /// Runs the full subset sweep for `population` under `dims`.
    ///
    /// Every entry in `population` gets a membership row; entries that never
    /// reach a frontier report a zero count and `None` minima.
    pub fn analyze(
        &self,
        population: &[PerformanceVector],
        dims: &DimensionSet,
    ) -> Result<SubFrontierReport, SubFrontierError> {
        let dim_count = dims.len();
        if dim_count > self.max_dims {
            return Err(SubFrontierError::DimensionCapExceeded {
                set: dims.name().to_string(),
                dims: dim_count,
                max: self.max_dims,
            });
        }

        let total_subsets = subset_count(dim_count);
        let mut warnings = Vec::new();
        if dim_count > self.warn_dims {
            let warning = format!(
                "dimension set '{}' spans {} dimensions; sweeping {} subsets will be slow",
                dims.name(),
                dim_count,
                total_subsets
            );
            tracing::warn!(set = dims.name(), dims = dim_count, total_subsets, "subset explosion");
            warnings.push(warning);
        }

        let progress_bar = ProgressBar::new(total_subsets);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("=>-"),
        );

        let merged = enumerate_subsets(dim_count)
            .par_bridge()
            .map(|subset| {
                let front = extract_frontier(population, &subset);
                progress_bar.inc(1);
                (subset, front.members)
            })
            .fold(HashMap::new, |mut acc: HashMap<usize, Accumulator>, (subset, members)| {
                for index in members {
                    let slot = acc.entry(index).or_default();
                    slot.count += 1;
                    slot.best = minimal_subset(slot.best.take(), Some(subset.clone()));
                }
                acc
            })
            .reduce(HashMap::new, |mut left, right| {
                for (index, acc) in right {
                    let slot = left.entry(index).or_default();
                    slot.count += acc.count;
                    slot.best = minimal_subset(slot.best.take(), acc.best);
                }
                left
            });

        progress_bar.finish_and_clear();
        tracing::debug!(
            set = dims.name(),
            total_subsets,
            entries = population.len(),
            "subset sweep complete"
        );

        let mut memberships = BTreeMap::new();
        for (index, vector) in population.iter().enumerate() {
            let slot = merged.get(&index);
            let best = slot.and_then(|s| s.best.as_ref());
            memberships.insert(
                vector.id.clone(),
                SubFrontierMembership {
                    pareto_count: slot.map_or(0, |s| s.count),
                    min_pareto_dim: best.map(|subset| subset.len()),
                    min_pareto_vars: best.map(|subset| dims.subset_names(subset)),
                },
            );
        }

        Ok(SubFrontierReport {
            memberships,
            warnings,
        })
    }
}

/// The smaller of two optional subsets under the canonical (size, lex) order.
fn minimal_subset(
    left: Option<DimensionSubset>,
    right: Option<DimensionSubset>,
) -> Option<DimensionSubset> {
    match (left, right) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn vector(id: &str, values: &[i64]) -> PerformanceVector {
        PerformanceVector::new(
            id,
            values.iter().map(|&v| Some(Decimal::from(v))).collect(),
        )
    }

    fn dims3() -> DimensionSet {
        DimensionSet::new("counting", vec!["pts".into(), "reb".into(), "ast".into()]).unwrap()
    }

    /// Independent brute-force check: enumerate subsets by bitmask and test
    /// frontier membership with direct pairwise comparisons.
    fn brute_force_counts(population: &[PerformanceVector], dim_count: usize) -> Vec<u64> {
        let mut counts = vec![0u64; population.len()];
        for mask in 1u32..(1 << dim_count) {
            let indices: Vec<usize> = (0..dim_count).filter(|i| mask & (1 << i) != 0).collect();
            for (i, candidate) in population.iter().enumerate() {
                let beaten = population.iter().enumerate().any(|(j, other)| {
                    if i == j {
                        return false;
                    }
                    let mut geq_everywhere = true;
                    let mut gt_somewhere = false;
                    for &k in &indices {
                        let a = other.value(k).unwrap();
                        let b = candidate.value(k).unwrap();
                        if a < b {
                            geq_everywhere = false;
                        }
                        if a > b {
                            gt_somewhere = true;
                        }
                    }
                    geq_everywhere && gt_somewhere
                });
                if !beaten {
                    counts[i] += 1;
                }
            }
        }
        counts
    }

    #[test]
    fn pareto_counts_match_a_brute_force_enumeration() {
        let population = vec![
            vector("a", &[30, 10, 5]),
            vector("b", &[25, 12, 6]),
            vector("c", &[20, 8, 4]),
            vector("d", &[28, 12, 3]),
        ];
        let report = SubFrontierAnalyzer::new()
            .analyze(&population, &dims3())
            .unwrap();
        let expected = brute_force_counts(&population, 3);
        for (i, v) in population.iter().enumerate() {
            assert_eq!(
                report.memberships[&v.id].pareto_count, expected[i],
                "entry {}",
                v.id
            );
        }
    }

    #[test]
    fn dominated_everywhere_means_zero_count_and_null_minima() {
        let population = vec![vector("a", &[30, 10, 5]), vector("c", &[20, 8, 4])];
        let report = SubFrontierAnalyzer::new()
            .analyze(&population, &dims3())
            .unwrap();
        let c = &report.memberships["c"];
        assert_eq!(c.pareto_count, 0);
        assert_eq!(c.min_pareto_dim, None);
        assert_eq!(c.min_pareto_vars, None);
    }

    #[test]
    fn category_leader_is_optimal_in_one_dimension() {
        // b owns rebounds outright, so the smallest subset keeping it
        // unbeaten is {reb} alone.
        let population = vec![vector("a", &[30, 10, 5]), vector("b", &[25, 12, 6])];
        let report = SubFrontierAnalyzer::new()
            .analyze(&population, &dims3())
            .unwrap();
        let b = &report.memberships["b"];
        assert_eq!(b.min_pareto_dim, Some(1));
        assert_eq!(b.min_pareto_vars, Some(vec!["reb".into()]));
    }

    #[test]
    fn minimal_subset_tie_breaks_lexicographically() {
        // a leads (or ties for the lead) in every single dimension, so all
        // three singletons qualify; the canonical answer is the first one.
        let population = vec![vector("a", &[30, 12, 6]), vector("b", &[30, 11, 6])];
        let report = SubFrontierAnalyzer::new()
            .analyze(&population, &dims3())
            .unwrap();
        let a = &report.memberships["a"];
        assert_eq!(a.min_pareto_dim, Some(1));
        assert_eq!(a.min_pareto_vars, Some(vec!["pts".into()]));
    }

    #[test]
    fn minimum_is_genuinely_minimal() {
        // c trails some rival in every single stat, so no singleton keeps it
        // unbeaten; the pts+reb pair does.
        let population = vec![
            vector("a", &[30, 8, 6]),
            vector("b", &[20, 12, 4]),
            vector("c", &[29, 11, 5]),
        ];
        let report = SubFrontierAnalyzer::new()
            .analyze(&population, &dims3())
            .unwrap();
        let c = &report.memberships["c"];
        // Singletons: pts -> a wins, reb -> b wins, ast -> a wins. But no
        // single rival is at least c's equal on both pts and reb.
        assert_eq!(c.min_pareto_dim, Some(2));
        assert_eq!(c.min_pareto_vars, Some(vec!["pts".into(), "reb".into()]));
    }

    #[test]
    fn dimension_cap_refuses_the_run() {
        let analyzer = SubFrontierAnalyzer::with_thresholds(2, 2);
        let err = analyzer.analyze(&[], &dims3()).unwrap_err();
        assert!(matches!(
            err,
            SubFrontierError::DimensionCapExceeded { dims: 3, max: 2, .. }
        ));
    }

    #[test]
    fn warn_threshold_records_an_advisory_but_runs() {
        let analyzer = SubFrontierAnalyzer::with_thresholds(2, 20);
        let population = vec![vector("a", &[30, 10, 5])];
        let report = analyzer.analyze(&population, &dims3()).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.memberships["a"].pareto_count, 7);
    }
}
