//! # Pantheon Dominance Percentile
//!
//! For a pooled population (typically every season across every era), this
//! crate computes, per entry, the fraction of the population that entry
//! strictly dominates under the full dimension set.
//!
//! The percentile is deliberately independent of the entry's Pareto layer.
//! A season can be beaten by a handful of all-timers (layer 2, say) and
//! still out-perform 98% of the pool; reporting both numbers side by side is
//! what makes the layering interpretable.

use crate::error::PercentileError;
use core_types::{DimensionSet, PerformanceVector};
use dominance::{project, strictly_dominates};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub mod error;

/// A stateless calculator for per-entry dominance percentiles.
#[derive(Debug, Default)]
pub struct PercentileCalculator {}

impl PercentileCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes `dominated-count / (eligible population - 1)` for every
    /// eligible entry, as a ratio in [0, 1].
    ///
    /// Ineligible vectors take no part on either side of the count and are
    /// excluded from the denominator. A single-entry population has no peers
    /// to dominate, so its percentile is 0.
    pub fn compute(
        &self,
        population: &[PerformanceVector],
        dims: &DimensionSet,
    ) -> Result<BTreeMap<String, f64>, PercentileError> {
        let full = dims.full_subset();

        let projected: Vec<(&str, Vec<Decimal>)> = population
            .iter()
            .filter(|vector| vector.check_against(dims).is_ok())
            .map(|vector| project(vector, &full).map(|row| (vector.id.as_str(), row)))
            .collect::<Result<_, _>>()?;

        let peers = projected.len().saturating_sub(1);
        let mut percentiles = BTreeMap::new();
        for (id, row) in &projected {
            let dominated = projected
                .iter()
                .filter(|(other_id, other_row)| {
                    other_id != id && strictly_dominates(row, other_row)
                })
                .count();
            let percentile = if peers == 0 {
                0.0
            } else {
                dominated as f64 / peers as f64
            };
            percentiles.insert((*id).to_string(), percentile);
        }

        tracing::debug!(
            entries = percentiles.len(),
            excluded = population.len() - projected.len(),
            "dominance percentiles computed"
        );

        Ok(percentiles)
    }
}
