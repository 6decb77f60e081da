//! Configuration for the placement engine
//!
//! Values can be set in code through the builder methods or loaded from a
//! TOML file; keys missing from the file keep their defaults.
//!
//! ```toml
//! arrow_clearance = 11.0
//! arrow_width = 22.0
//! append_to_body = false
//! flip_alignment = false
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Gap reserved between anchor and panel for the arrow glyph
pub const DEFAULT_ARROW_CLEARANCE: f64 = 11.0;

/// Rendered width of the arrow glyph
pub const DEFAULT_ARROW_WIDTH: f64 = 22.0;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for placement computation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementConfig {
    /// Distance between anchor edge and panel edge, left free for the arrow
    pub arrow_clearance: f64,

    /// Arrow width, used to center the arrow under the anchor for `left` alignment
    pub arrow_width: f64,

    /// Place relative to the page instead of the anchor's offset parent
    pub append_to_body: bool,

    /// Also flip `left`/`right` alignment when the panel would overflow the viewport
    pub flip_alignment: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            arrow_clearance: DEFAULT_ARROW_CLEARANCE,
            arrow_width: DEFAULT_ARROW_WIDTH,
            append_to_body: false,
            flip_alignment: false,
        }
    }
}

impl PlacementConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the arrow clearance
    pub fn with_arrow_clearance(mut self, clearance: f64) -> Self {
        self.arrow_clearance = clearance;
        self
    }

    /// Set the arrow width
    pub fn with_arrow_width(mut self, width: f64) -> Self {
        self.arrow_width = width;
        self
    }

    /// Compute positions in page coordinates
    pub fn with_append_to_body(mut self, append: bool) -> Self {
        self.append_to_body = append;
        self
    }

    /// Enable or disable alignment flipping
    pub fn with_flip_alignment(mut self, flip: bool) -> Self {
        self.flip_alignment = flip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacementConfig::default();
        assert_eq!(config.arrow_clearance, 11.0);
        assert_eq!(config.arrow_width, 22.0);
        assert!(!config.append_to_body);
        assert!(!config.flip_alignment);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlacementConfig::new()
            .with_arrow_clearance(8.0)
            .with_append_to_body(true);

        assert_eq!(config.arrow_clearance, 8.0);
        assert!(config.append_to_body);
        assert_eq!(config.arrow_width, 22.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PlacementConfig::from_str("flip_alignment = true").expect("Should parse");
        assert!(config.flip_alignment);
        assert_eq!(config.arrow_clearance, 11.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = PlacementConfig::from_str("").expect("Should parse");
        assert_eq!(config, PlacementConfig::default());
    }

    #[test]
    fn test_unknown_key_error() {
        let result = PlacementConfig::from_str("arrow_size = 3");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
