use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DominanceError {
    #[error("entry '{id}' has no value for dimension index {index}")]
    MissingValue { id: String, index: usize },
}
