//! Configuration system
//!
//! Configuration files are TOML or RON, picked by file extension.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::shapes::Rect;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Check semantic constraints after parsing
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Load and validate configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?,
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Parsed but semantically unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Spatial grid layout of a collision handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Area covered by the grid
    pub bounds: Rect,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 16,
            bounds: Rect::new(0.0, 0.0, 1920.0, 1080.0),
        }
    }
}

impl Config for CollisionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid needs at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(self.bounds.width > 0.0 && self.bounds.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid bounds must have a positive area, got {}x{}",
                self.bounds.width, self.bounds.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("collision_engine_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_default_is_valid() {
        assert!(CollisionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = CollisionConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = CollisionConfig {
            bounds: Rect::new(0.0, 0.0, 0.0, 100.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_toml_and_ron_files() {
        let config = CollisionConfig {
            rows: 4,
            cols: 8,
            bounds: Rect::new(-100.0, -50.0, 200.0, 100.0),
        };
        for name in ["grid.toml", "grid.ron"] {
            let path = temp_path(name);
            config.save_to_file(&path).unwrap();
            let loaded = CollisionConfig::load_from_file(&path).unwrap();
            std::fs::remove_file(&path).unwrap();
            assert_eq!(loaded, config);
        }
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "rows = 2\n").unwrap();
        let loaded = CollisionConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.rows, 2);
        assert_eq!(loaded.cols, 16);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let path = temp_path("zero.toml");
        std::fs::write(&path, "rows = 0\n").unwrap();
        let result = CollisionConfig::load_from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unsupported_format() {
        let result = CollisionConfig::default().save_to_file(temp_path("grid.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
        assert!(matches!(
            CollisionConfig::load_from_file(temp_path("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
