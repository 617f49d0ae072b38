//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Quick survey of a large dataset
    ///
    /// - Components above 50 vertices are not grouped
    /// - Diameter and colouring capped at 200 vertices
    /// - Top-3 degree lists
    Fast,

    /// Everyday analysis
    ///
    /// - Components above 200 vertices are not grouped
    /// - Diameter and colouring capped at 2000 vertices
    /// - Top-5 degree lists
    #[default]
    Balanced,

    /// Exhaustive analysis
    ///
    /// - Components above 1000 vertices are not grouped
    /// - No cap on diameter and colouring
    /// - Top-10 degree lists
    Thorough,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "balanced" => Ok(Self::Balanced),
            "thorough" => Ok(Self::Thorough),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Thorough => "thorough",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
