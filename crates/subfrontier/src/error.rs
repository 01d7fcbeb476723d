use indicatif::style::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubFrontierError {
    #[error(
        "dimension set '{set}' spans {dims} dimensions; the analyzer caps at {max} \
         because the subset sweep grows as 2^d"
    )]
    DimensionCapExceeded {
        set: String,
        dims: usize,
        max: usize,
    },

    #[error("Progress bar template error: {0}")]
    ProgressBarTemplate(String),
}

impl From<TemplateError> for SubFrontierError {
    fn from(error: TemplateError) -> Self {
        SubFrontierError::ProgressBarTemplate(error.to_string())
    }
}
