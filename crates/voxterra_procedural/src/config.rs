//! # World Configuration
//!
//! World parameters loaded from TOML, once at startup.
//!
//! ```toml
//! seed = 1234
//! width = 64
//! height = 32
//!
//! [options]
//! scale = 30.0
//! magnitude = 0.2
//! offset = 0.5
//! ```
//!
//! Every field is optional and falls back to the built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use voxterra_shared::constants::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};

use crate::error::{WorldError, WorldResult};
use crate::world::WorldOptions;

/// Everything needed to build a [`World`](crate::World).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// World seed.
    pub seed: u64,
    /// X and Z extent in blocks.
    pub width: u32,
    /// Y extent in blocks.
    pub height: u32,
    /// Height-field options.
    pub options: WorldOptions,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            options: WorldOptions::default(),
        }
    }
}

impl WorldConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ConfigParse`] for malformed TOML and a
    /// configuration error for out-of-range values.
    pub fn from_toml_str(text: &str) -> WorldResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ConfigRead`] if the file cannot be read, plus
    /// everything [`WorldConfig::from_toml_str`] can return.
    pub fn load(path: impl AsRef<Path>) -> WorldResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WorldError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Applies the same rules as world construction.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated.
    pub fn validate(&self) -> WorldResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WorldError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        self.options.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = WorldConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, WorldConfig::default());
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 32);
    }

    #[test]
    fn test_partial_config() {
        let config = WorldConfig::from_toml_str(
            r"
            seed = 1234
            height = 48

            [options]
            magnitude = 0.35
            ",
        )
        .expect("valid config");

        assert_eq!(config.seed, 1234);
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 48);
        assert!((config.options.magnitude - 0.35).abs() < f64::EPSILON);
        assert!((config.options.scale - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = WorldConfig::from_toml_str("width = 0").err();
        assert!(matches!(err, Some(WorldError::InvalidDimensions { .. })));

        let err = WorldConfig::from_toml_str("[options]\nscale = -2.0").err();
        assert!(matches!(err, Some(WorldError::InvalidScale(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = WorldConfig::from_toml_str("width = \"wide\"").err();
        assert!(matches!(err, Some(WorldError::ConfigParse(_))));

        let err = WorldConfig::from_toml_str("octaves = 4").err();
        assert!(matches!(err, Some(WorldError::ConfigParse(_))), "unknown keys are rejected");
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("voxterra_missing_config.toml");
        let err = WorldConfig::load(&path).err();
        assert!(matches!(err, Some(WorldError::ConfigRead { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("voxterra_test_config.toml");
        std::fs::write(&path, "seed = 7\nwidth = 16\nheight = 16\n").expect("write temp config");

        let config = WorldConfig::load(&path).expect("valid config file");
        assert_eq!(config.seed, 7);
        assert_eq!(config.width, 16);

        std::fs::remove_file(&path).ok();
    }
}
