//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use lp_core::{DEFAULT_ACTIVITY_BUFFER, TravelMode};

/// Application configuration.
///
/// Presentation-adjacent knobs only; the calculation constants (security
/// buffers, city transfer legs) are fixed by the core and not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Slack required between consecutive activities, in minutes.
    pub gap_buffer_min: f64,

    /// Transport mode assumed when none is given.
    pub default_mode: TravelMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap_buffer_min: DEFAULT_ACTIVITY_BUFFER,
            default_mode: TravelMode::Transit,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (LP_*)
        figment = figment.merge(Env::prefixed("LP_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for lp.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::float_cmp, reason = "default values are exact")]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.gap_buffer_min, 15.0);
        assert_eq!(config.default_mode, TravelMode::Transit);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "gap_buffer_min = 20.0\ndefault_mode = \"walking\"\n").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert!((config.gap_buffer_min - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.default_mode, TravelMode::Walking);
    }
}
