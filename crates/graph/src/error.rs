use dominance::DominanceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Dominance comparison failed during edge construction: {0}")]
    Dominance(#[from] DominanceError),

    #[error("layer assignments reference entry '{0}' which is not in the population")]
    UnknownEntry(String),
}
