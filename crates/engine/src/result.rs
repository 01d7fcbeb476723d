use chrono::{DateTime, Utc};
use core_types::SkippedEntry;
use graph::DominanceDag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use subfrontier::SubFrontierMembership;
use uuid::Uuid;

/// Identity of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunInfo {
    /// Snapshot id for this population. Anything caching derived results
    /// (repeated subset computations, rendered views) keys on this, never on
    /// implicit global state.
    pub snapshot_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub mode: String,
    pub dimensions: Vec<String>,
    pub total_entries: usize,
}

/// The complete output for one mode under one dimension set.
///
/// The names and nesting of `layers`, `sub_pareto`, `dag` and
/// `dominance_percentile` are the compatibility contract consumed by the
/// presentation layer. Fields may be added to this struct but never renamed
/// or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub run: RunInfo,
    /// Entry id → layer index; `null` for unranked (ineligible) entries.
    pub layers: BTreeMap<String, Option<u32>>,
    pub sub_pareto: BTreeMap<String, SubFrontierMembership>,
    pub dag: DominanceDag,
    /// Compact view of `dag` truncated at the configured elite layer cutoff.
    pub dag_elite: DominanceDag,
    pub dominance_percentile: BTreeMap<String, f64>,
    /// Entries excluded from the run, with reasons.
    pub skipped: Vec<SkippedEntry>,
    /// Non-fatal advisories raised during the run.
    pub warnings: Vec<String>,
}
