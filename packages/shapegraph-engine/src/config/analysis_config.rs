//! Analysis configuration
//!
//! ```
//! use shapegraph_engine::config::{AnalysisConfig, Preset};
//! use shapegraph_engine::features::canonical_form::TraversalKind;
//!
//! let config = AnalysisConfig::preset(Preset::Fast)
//!     .traversal(TraversalKind::Undirected)
//!     .top_k(8);
//! assert!(config.validated().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::io::{AnalysisOverrides, ConfigFileV1, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::validation::{check_range, Validatable};
use crate::features::canonical_form::TraversalKind;
use crate::features::dataset::Decomposition;
use crate::shared::models::VertexOrder;

pub const MIN_COMPONENT_SIZE: usize = 2;
pub const MAX_COMPONENT_SIZE: usize = 1_000_000;
pub const MAX_MEASURE_LIMIT: usize = 10_000_000;
pub const MAX_TOP_K: usize = 1_000;

/// Every knob of an analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Preset the remaining values started from
    pub preset: Preset,
    /// Components above this many vertices are skipped by grouping
    pub max_component_size: usize,
    /// Diameter and colouring are reported as too large above this many
    /// vertices. `None` measures everything.
    pub measure_limit: Option<usize>,
    pub vertex_order: VertexOrder,
    pub traversal: TraversalKind,
    /// Length of the per-component highest-degree lists
    pub top_k: usize,
    pub decomposition: Decomposition,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl AnalysisConfig {
    pub fn preset(preset: Preset) -> Self {
        let (max_component_size, measure_limit, top_k) = match preset {
            Preset::Fast => (50, Some(200), 3),
            Preset::Balanced => (200, Some(2_000), 5),
            Preset::Thorough => (1_000, None, 10),
        };
        Self {
            preset,
            max_component_size,
            measure_limit,
            vertex_order: VertexOrder::default(),
            traversal: TraversalKind::default(),
            top_k,
            decomposition: Decomposition::default(),
        }
    }

    pub fn max_component_size(mut self, max: usize) -> Self {
        self.max_component_size = max;
        self
    }

    pub fn measure_limit(mut self, limit: Option<usize>) -> Self {
        self.measure_limit = limit;
        self
    }

    pub fn vertex_order(mut self, order: VertexOrder) -> Self {
        self.vertex_order = order;
        self
    }

    pub fn traversal(mut self, kind: TraversalKind) -> Self {
        self.traversal = kind;
        self
    }

    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    pub fn decomposition(mut self, decomposition: Decomposition) -> Self {
        self.decomposition = decomposition;
        self
    }

    /// Validate and return self
    pub fn validated(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    fn apply(mut self, overrides: AnalysisOverrides) -> Self {
        if let Some(max) = overrides.max_component_size {
            self.max_component_size = max;
        }
        if let Some(limit) = overrides.measure_limit {
            self.measure_limit = limit;
        }
        if let Some(order) = overrides.vertex_order {
            self.vertex_order = order;
        }
        if let Some(kind) = overrides.traversal {
            self.traversal = kind;
        }
        if let Some(k) = overrides.top_k {
            self.top_k = k;
        }
        if let Some(decomposition) = overrides.decomposition {
            self.decomposition = decomposition;
        }
        self
    }

    /// Load from YAML text (schema v1) and validate
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = match file.preset.as_deref() {
            Some(name) => Preset::from_str(name)?,
            None => Preset::default(),
        };

        let mut config = Self::preset(preset);
        if let Some(overrides) = file.overrides {
            config = config.apply(overrides);
        }
        config.validated()
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export as YAML (schema v1), every value written as an override
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            preset: Some(self.preset.to_string()),
            overrides: Some(AnalysisOverrides {
                max_component_size: Some(self.max_component_size),
                measure_limit: Some(self.measure_limit),
                vertex_order: Some(self.vertex_order),
                traversal: Some(self.traversal),
                top_k: Some(self.top_k),
                decomposition: Some(self.decomposition),
            }),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_range(
            "max_component_size",
            self.max_component_size,
            MIN_COMPONENT_SIZE,
            MAX_COMPONENT_SIZE,
            "Single-vertex components are never grouped",
        )?;
        if let Some(limit) = self.measure_limit {
            check_range(
                "measure_limit",
                limit,
                1,
                MAX_MEASURE_LIMIT,
                "Use null to measure every component",
            )?;
        }
        check_range("top_k", self.top_k, 1, MAX_TOP_K, "Degree lists need at least one entry")?;
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "AnalysisConfig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_presets() {
        let fast = AnalysisConfig::preset(Preset::Fast);
        assert_eq!(fast.max_component_size, 50);
        assert_eq!(fast.measure_limit, Some(200));

        let balanced = AnalysisConfig::default();
        assert_eq!(balanced.preset, Preset::Balanced);
        assert_eq!(balanced.max_component_size, 200);
        assert_eq!(balanced.measure_limit, Some(2_000));
        assert_eq!(balanced.top_k, 5);
        assert_eq!(balanced.vertex_order, VertexOrder::Lexicographic);
        assert_eq!(balanced.traversal, TraversalKind::Directed);
        assert_eq!(balanced.decomposition, Decomposition::Weak);

        assert_eq!(AnalysisConfig::preset(Preset::Thorough).measure_limit, None);
        for preset in [Preset::Fast, Preset::Balanced, Preset::Thorough] {
            assert!(AnalysisConfig::preset(preset).validate().is_ok());
        }
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalysisConfig::preset(Preset::Fast)
            .max_component_size(75)
            .vertex_order(VertexOrder::Insertion)
            .decomposition(Decomposition::Strong);
        assert_eq!(config.max_component_size, 75);
        assert_eq!(config.vertex_order, VertexOrder::Insertion);
        assert_eq!(config.decomposition, Decomposition::Strong);
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let err = AnalysisConfig::default().max_component_size(1).validate().unwrap_err();
        assert!(err.to_string().contains("max_component_size"));

        assert!(AnalysisConfig::default().top_k(0).validate().is_err());
        assert!(AnalysisConfig::default().measure_limit(Some(0)).validate().is_err());
        assert!(AnalysisConfig::default().measure_limit(None).validate().is_ok());
    }

    #[test]
    fn test_yaml_overrides() {
        let yaml = r#"
version: 1
preset: fast
overrides:
  traversal: undirected
  measure_limit: null
  top_k: 7
"#;
        let config = AnalysisConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.preset, Preset::Fast);
        assert_eq!(config.traversal, TraversalKind::Undirected);
        assert_eq!(config.measure_limit, None);
        assert_eq!(config.top_k, 7);
        assert_eq!(config.max_component_size, 50);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = AnalysisConfig::preset(Preset::Thorough)
            .traversal(TraversalKind::Undirected)
            .max_component_size(300);
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("preset: thorough"));
        assert!(yaml.contains("max_component_size: 300"));
        assert_eq!(AnalysisConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_yaml_version_checks() {
        assert!(matches!(
            AnalysisConfig::from_yaml_str("preset: fast\n"),
            Err(ConfigError::MissingVersion)
        ));
        assert!(matches!(
            AnalysisConfig::from_yaml_str("version: 2\n"),
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_rejects_unknown_fields() {
        let yaml = "version: 1\noverrides:\n  max_size: 10\n";
        assert!(matches!(
            AnalysisConfig::from_yaml_str(yaml),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_invalid_values_fail_validation() {
        let yaml = "version: 1\noverrides:\n  top_k: 0\n";
        assert!(matches!(
            AnalysisConfig::from_yaml_str(yaml),
            Err(ConfigError::Range { .. })
        ));
    }
}
