use core_types::DimensionSet;
use serde::Deserialize;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    pub modes: Vec<ModeSettings>,
}

impl Config {
    /// Looks up a configured mode by name.
    pub fn mode(&self, name: &str) -> Option<&ModeSettings> {
        self.modes.iter().find(|mode| mode.name == name)
    }

    /// Cross-field validation that the deserializer cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.modes.is_empty() {
            return Err(ConfigError::Validation(
                "at least one analysis mode must be configured".to_string(),
            ));
        }
        for (i, mode) in self.modes.iter().enumerate() {
            if self.modes[..i].iter().any(|m| m.name == mode.name) {
                return Err(ConfigError::Validation(format!(
                    "mode '{}' is configured more than once",
                    mode.name
                )));
            }
            // Surfaces empty or duplicated dimension lists early.
            mode.to_dimension_set()?;
        }
        self.analysis.validate()
    }
}

/// Guard rails and presentation knobs shared by every mode.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    /// Above this many dimensions the subset sweep warns about its cost.
    #[serde(default = "default_warn_subset_dims")]
    pub warn_subset_dims: usize,

    /// Above this many dimensions the run is refused; 2^d subsets past this
    /// point is not a sane batch job.
    #[serde(default = "default_max_subset_dims")]
    pub max_subset_dims: usize,

    /// Highest layer index included in the compact "elite" graph view.
    #[serde(default = "default_elite_layer_cutoff")]
    pub elite_layer_cutoff: u32,
}

impl AnalysisSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.warn_subset_dims > self.max_subset_dims {
            return Err(ConfigError::Validation(format!(
                "warn_subset_dims ({}) cannot exceed max_subset_dims ({})",
                self.warn_subset_dims, self.max_subset_dims
            )));
        }
        Ok(())
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            warn_subset_dims: default_warn_subset_dims(),
            max_subset_dims: default_max_subset_dims(),
            elite_layer_cutoff: default_elite_layer_cutoff(),
        }
    }
}

fn default_warn_subset_dims() -> usize {
    12
}

fn default_max_subset_dims() -> usize {
    20
}

fn default_elite_layer_cutoff() -> u32 {
    2
}

/// One analysis mode: a named, ordered list of statistical dimensions.
///
/// Modes are plain configuration data; the engine is parameterized by the
/// `DimensionSet` a mode resolves to, never by branching on mode names.
#[derive(Debug, Clone, Deserialize)]
pub struct ModeSettings {
    /// e.g. "player_season_6d".
    pub name: String,
    /// Dimension names in vector order, all oriented "higher is better".
    pub dimensions: Vec<String>,
}

impl ModeSettings {
    pub fn to_dimension_set(&self) -> Result<DimensionSet, ConfigError> {
        Ok(DimensionSet::new(self.name.clone(), self.dimensions.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(name: &str, dims: &[&str]) -> ModeSettings {
        ModeSettings {
            name: name.to_string(),
            dimensions: dims.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn duplicate_mode_names_fail_validation() {
        let config = Config {
            analysis: AnalysisSettings::default(),
            modes: vec![mode("a", &["pts"]), mode("a", &["reb"])],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_dimension_list_fails_validation() {
        let config = Config {
            analysis: AnalysisSettings::default(),
            modes: vec![mode("a", &[])],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_thresholds_fail_validation() {
        let config = Config {
            analysis: AnalysisSettings {
                warn_subset_dims: 21,
                max_subset_dims: 20,
                elite_layer_cutoff: 2,
            },
            modes: vec![mode("a", &["pts"])],
        };
        assert!(config.validate().is_err());
    }
}
