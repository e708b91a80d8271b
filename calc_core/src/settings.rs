//! # Settings
//!
//! Defaults the input form starts from. Settings are optional: every field
//! has a built-in default and a TOML file only needs the keys it overrides.
//!
//! ```toml
//! default_block_type = "Hollow Concrete Block"
//! default_strength_mpa = 25
//! default_formwork_thickness_mm = 12.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{BlockType, DEFAULT_STRENGTH_MPA};

/// Formwork thickness preselected in the input form (mm)
pub const DEFAULT_FORMWORK_THICKNESS_MM: f64 = 10.0;

/// Calculator defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Block type selected when none is given
    pub default_block_type: BlockType,
    /// Strength grade (MPa) used when none is given
    pub default_strength_mpa: u32,
    /// Formwork buffer (mm) used when none is given
    pub default_formwork_thickness_mm: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_block_type: BlockType::Splitface,
            default_strength_mpa: DEFAULT_STRENGTH_MPA,
            default_formwork_thickness_mm: DEFAULT_FORMWORK_THICKNESS_MM,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        toml::from_str(content).map_err(|e| CalcError::config_error("<inline>", e.to_string()))
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config_error(path.display().to_string(), e.to_string()))?;
        let settings: Settings = toml::from_str(&content)
            .map_err(|e| CalcError::config_error(path.display().to_string(), e.to_string()))?;
        tracing::debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    /// Render as TOML (for `--print-config` style output)
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::SerializationError { reason: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_block_type, BlockType::Splitface);
        assert_eq!(settings.default_strength_mpa, 20);
        assert_eq!(settings.default_formwork_thickness_mm, 10.0);
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml_str("default_strength_mpa = 30").unwrap();
        assert_eq!(settings.default_strength_mpa, 30);
        assert_eq!(settings.default_block_type, BlockType::Splitface);
        assert_eq!(settings.default_formwork_thickness_mm, 10.0);
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
            default_block_type = "Hollow Concrete Block"
            default_strength_mpa = 35
            default_formwork_thickness_mm = 12.5
        "#;
        let settings = Settings::from_toml_str(toml).unwrap();
        assert_eq!(settings.default_block_type, BlockType::HollowConcrete);
        assert_eq!(settings.default_strength_mpa, 35);
        assert_eq!(settings.default_formwork_thickness_mm, 12.5);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Settings::from_toml_str("default_block_type = \"Glass Block\"").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_toml_roundtrip() {
        let settings = Settings::default();
        let text = settings.to_toml_string().unwrap();
        assert_eq!(Settings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/blockcalc.toml")).unwrap_err();
        assert!(matches!(err, CalcError::ConfigError { .. }));
    }
}
