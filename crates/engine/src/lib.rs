//! # Pantheon Analysis Engine
//!
//! The master orchestrator for one analysis run. Given an immutable
//! population of performance vectors and a dimension set, it validates the
//! run, peels the population into Pareto layers, sweeps the dimension-subset
//! lattice, builds the dominance graph, computes dominance percentiles, and
//! assembles everything into the single `AnalysisResult` structure the
//! presentation layer consumes.
//!
//! ## Architectural Principles
//!
//! - **Run-Level vs. Entry-Level Failure:** A bad record (short vector,
//!   missing observation) costs that record its ranking and nothing more; it
//!   is reported in the result's `skipped` list. Ambiguous identity
//!   (duplicate ids) or an unusable population aborts the whole run before
//!   any computation starts; there are no partial results.
//! - **One Generic Engine:** The engine is parameterized by the
//!   `DimensionSet` it is handed. Running a 6-dimension season analysis and
//!   a 3-dimension counting-stat analysis means calling `run` twice with two
//!   dimension sets, nothing else.
//! - **Determinism:** The same population and dimension set always produce
//!   an identical result (modulo the run stamp). Internal parallelism only
//!   uses order-independent merges.

use chrono::Utc;
use configuration::AnalysisSettings;
use core_types::{DimensionSet, PerformanceVector};
use graph::DagBuilder;
use layering::LayeringEngine;
use percentile::PercentileCalculator;
use std::collections::HashSet;
use subfrontier::SubFrontierAnalyzer;
use uuid::Uuid;

pub mod error;
pub mod result;

// Re-export the core types to provide a clean public API.
pub use error::EngineError;
pub use result::{AnalysisResult, RunInfo};

pub struct AnalysisEngine {
    settings: AnalysisSettings,
}

impl AnalysisEngine {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    /// Runs the full analysis of `population` under `dims`.
    pub fn run(
        &self,
        population: &[PerformanceVector],
        dims: &DimensionSet,
    ) -> Result<AnalysisResult, EngineError> {
        // 1. Run-level validation. These abort before any computation; a
        //    partial result is worse than no result.
        if population.is_empty() {
            return Err(EngineError::EmptyPopulation);
        }
        let mut seen = HashSet::new();
        for vector in population {
            if !seen.insert(vector.id.as_str()) {
                return Err(EngineError::DuplicateEntryId(vector.id.clone()));
            }
        }

        let span = tracing::info_span!("analysis", mode = dims.name());
        let _guard = span.enter();
        tracing::info!(entries = population.len(), dims = dims.len(), "starting analysis run");

        // 2. Peel the population into layers. This also settles which
        //    entries are eligible for the rest of the run.
        let assignments = LayeringEngine::new().assign(population, dims)?;
        if assignments.ranked.is_empty() {
            return Err(EngineError::NoEligibleEntries {
                total: population.len(),
            });
        }
        let skipped = assignments.skipped.clone();
        let excluded: HashSet<&str> = skipped.iter().map(|s| s.id.as_str()).collect();
        let eligible: Vec<PerformanceVector> = population
            .iter()
            .filter(|vector| !excluded.contains(vector.id.as_str()))
            .cloned()
            .collect();

        // 3. The subset sweep and the percentile scan are independent reads
        //    of the same immutable population; run them side by side.
        let analyzer = SubFrontierAnalyzer::with_thresholds(
            self.settings.warn_subset_dims,
            self.settings.max_subset_dims,
        );
        let (sub_report, percentiles) = rayon::join(
            || analyzer.analyze(&eligible, dims),
            || PercentileCalculator::new().compute(&eligible, dims),
        );
        let sub_report = sub_report?;
        let percentiles = percentiles?;

        // 4. Derive the dominance graph and its elite view.
        let dag = DagBuilder::new().build(population, dims, &assignments)?;
        let dag_elite = dag.restricted_to_layers(self.settings.elite_layer_cutoff);

        tracing::info!(
            ranked = dag.stats.total_entries,
            skipped = skipped.len(),
            max_layer = dag.stats.max_layer,
            edges = dag.edges.len(),
            "analysis run complete"
        );

        // 5. Assemble the output contract.
        Ok(AnalysisResult {
            run: RunInfo {
                snapshot_id: Uuid::new_v4(),
                generated_at: Utc::now(),
                mode: dims.name().to_string(),
                dimensions: dims.dimension_names().to_vec(),
                total_entries: population.len(),
            },
            layers: assignments.layers,
            sub_pareto: sub_report.memberships,
            dag,
            dag_elite,
            dominance_percentile: percentiles,
            skipped,
            warnings: sub_report.warnings,
        })
    }
}
