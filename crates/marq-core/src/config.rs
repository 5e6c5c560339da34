use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MarqError, MarqResult};
use crate::types::DisplayMetrics;

/// Top-level library configuration (loaded from marquee.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqConfig {
    pub display: DisplayConfig,
    pub font: FontConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Panel width in columns (default: 12, the Uno R4 LED matrix)
    pub viewport_columns: u32,
    /// Scroll-animation buffer capacity in columns (default: 96)
    pub buffer_capacity_columns: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font name, informational only (default: "4x6")
    pub name: String,
    /// Glyph width in columns for this font (default: 4)
    pub glyph_width: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            viewport_columns: 12,
            buffer_capacity_columns: 96,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            name: "4x6".into(),
            glyph_width: 4,
        }
    }
}

impl MarqConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> MarqResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .map_err(|e| MarqError::Config(format!("parsing {}: {e}", path.display())))?;
        Ok(config)
    }

    /// The display-metrics triple handed to the chunking layer.
    pub fn metrics(&self) -> DisplayMetrics {
        DisplayMetrics {
            viewport_columns: self.display.viewport_columns,
            buffer_capacity_columns: self.display.buffer_capacity_columns,
            glyph_width: self.font.glyph_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[display]
viewport_columns = 48
buffer_capacity_columns = 100

[font]
name = "5x7"
glyph_width = 5
"#;
        let config: MarqConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.display.viewport_columns, 48);
        assert_eq!(config.display.buffer_capacity_columns, 100);
        assert_eq!(config.font.name, "5x7");
        assert_eq!(config.font.glyph_width, 5);
    }

    #[test]
    fn test_parse_defaults() {
        let config: MarqConfig = toml::from_str("").unwrap();

        assert_eq!(config.display.viewport_columns, 12);
        assert_eq!(config.display.buffer_capacity_columns, 96);
        assert_eq!(config.font.name, "4x6");
        assert_eq!(config.font.glyph_width, 4);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
[font]
glyph_width = 5
"#;
        let config: MarqConfig = toml::from_str(toml_str).unwrap();

        // Overridden
        assert_eq!(config.font.glyph_width, 5);
        // Defaults
        assert_eq!(config.font.name, "4x6");
        assert_eq!(config.display.viewport_columns, 12);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = MarqConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: MarqConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.display.viewport_columns, parsed.display.viewport_columns);
        assert_eq!(config.font.glyph_width, parsed.font.glyph_width);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("marquee.toml");
        std::fs::write(&path, "[display]\nviewport_columns = 32\n").unwrap();

        let config = MarqConfig::load(&path).unwrap();
        assert_eq!(config.display.viewport_columns, 32);
        assert_eq!(config.display.buffer_capacity_columns, 96);

        let metrics = config.metrics();
        assert_eq!(metrics.viewport_columns, 32);
        assert_eq!(metrics.glyph_width, 4);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("marquee.toml");
        std::fs::write(&path, "[display\nviewport").unwrap();

        let err = MarqConfig::load(&path).unwrap_err();
        assert!(matches!(err, MarqError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(MarqConfig::load(&path).is_err());
    }
}
