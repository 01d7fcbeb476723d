use dominance::DominanceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayeringError {
    #[error("Dominance comparison failed during peeling: {0}")]
    Dominance(#[from] DominanceError),

    #[error("An unexpected error occurred during layering: {0}")]
    Internal(String),
}
