use dominance::DominanceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PercentileError {
    #[error("Dominance comparison failed during percentile calculation: {0}")]
    Dominance(#[from] DominanceError),
}
