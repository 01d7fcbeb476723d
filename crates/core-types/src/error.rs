use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("entry '{id}' carries {found} values but dimension set '{set}' requires {required}")]
    DimensionMismatch {
        id: String,
        set: String,
        required: usize,
        found: usize,
    },

    #[error("entry '{id}' has no usable value for dimension '{dimension}'")]
    InvalidValue { id: String, dimension: String },

    #[error("dimension set '{0}' must name at least one dimension")]
    EmptyDimensionSet(String),

    #[error("dimension set '{set}' names dimension '{dimension}' more than once")]
    DuplicateDimension { set: String, dimension: String },

    #[error("a dimension subset cannot be empty")]
    EmptySubset,
}
