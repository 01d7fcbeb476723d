use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from file: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Invalid mode definition: {0}")]
    InvalidMode(#[from] CoreError),
}
