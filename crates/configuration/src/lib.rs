use crate::error::ConfigError;
use crate::settings::Config;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AnalysisSettings, ModeSettings};

/// Loads the application configuration from the `config.toml` file.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from("config.toml")
}

/// Loads and validates configuration from an explicit path.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, and applies the cross-field validation rules.
pub fn load_config_from(path: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(path))
        // Optionally, one could add environment variables here as well.
        // .add_source(config::Environment::with_prefix("PANTHEON"));
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
