use crate::dimensions::{DimensionSet, DimensionSubset};
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single historical performance: one player-season or one player-game.
///
/// `values` holds the statistical dimensions in the order fixed by the active
/// `DimensionSet`. Every dimension is oriented "higher is better"; a stat
/// that ranks the other way (turnovers, fouls) must be negated by the data
/// preparation layer before it reaches this type. `None` marks a missing
/// observation; upstream preparation maps NaN and non-numeric source values
/// to `None` rather than inventing a number.
///
/// Vectors are immutable once constructed and live only for the duration of
/// a single analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceVector {
    /// Stable identity, e.g. "jordan-1988" or "chamberlain-1962-03-02".
    pub id: String,
    pub values: Vec<Option<Decimal>>,
    /// Opaque display metadata (player name, team, era). Carried through to
    /// the output untouched; the core never inspects it.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl PerformanceVector {
    pub fn new(id: impl Into<String>, values: Vec<Option<Decimal>>) -> Self {
        Self {
            id: id.into(),
            values,
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// The value at dimension `index`, if one was observed.
    pub fn value(&self, index: usize) -> Option<Decimal> {
        self.values.get(index).copied().flatten()
    }

    /// Whether this vector has a usable value for every index in `subset`.
    pub fn is_eligible(&self, subset: &DimensionSubset) -> bool {
        subset.indices().iter().all(|&i| self.value(i).is_some())
    }

    /// Validates this vector against a full dimension set, distinguishing a
    /// truncated vector from one carrying missing observations.
    pub fn check_against(&self, dims: &DimensionSet) -> Result<(), CoreError> {
        if self.values.len() < dims.len() {
            return Err(CoreError::DimensionMismatch {
                id: self.id.clone(),
                set: dims.name().to_string(),
                required: dims.len(),
                found: self.values.len(),
            });
        }
        for (index, name) in dims.dimension_names().iter().enumerate() {
            if self.values[index].is_none() {
                return Err(CoreError::InvalidValue {
                    id: self.id.clone(),
                    dimension: name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// An entry excluded from a run, with the reason it was excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub id: String,
    pub reason: String,
}
