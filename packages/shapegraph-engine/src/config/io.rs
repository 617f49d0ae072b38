//! Configuration file schema (YAML v1)

use serde::{Deserialize, Deserializer, Serialize};

use crate::features::canonical_form::TraversalKind;
use crate::features::dataset::Decomposition;
use crate::shared::models::VertexOrder;

pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset, `balanced` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<AnalysisOverrides>,
}

/// Values replacing the preset's
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_component_size: Option<usize>,

    /// Absent keeps the preset's cap, `null` removes it
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub measure_limit: Option<Option<usize>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertex_order: Option<VertexOrder>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traversal: Option<TraversalKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decomposition: Option<Decomposition>,
}

fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
