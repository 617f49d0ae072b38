//! Analysis report types
//!
//! Everything here is plain serializable data. Maps keyed by signatures
//! are flattened into lists so the JSON form has string keys only.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::AnalysisConfig;
use crate::errors::Result;
use crate::features::canonical_form::CanonicalFormDocument;
use crate::features::component_features::{
    ComponentDocument, DegreeStats, Measurement, ShapeFamily, ShapeFlags, VertexDegree,
};
use crate::features::similarity::SkippedComponent;
use crate::shared::models::{SignatureDelta, SignatureHistogram, VertexId};

#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetSummary {
    pub vertices: usize,
    pub edges: usize,
    pub classified_vertices: usize,
    pub distinct_classes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentSummary {
    /// Position in the report's component list (ascending vertex count)
    pub index: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub family: ShapeFamily,
    pub flags: ShapeFlags,
    pub diameter: Measurement<usize>,
    pub diameter_path: Measurement<Option<Vec<VertexId>>>,
    pub chromatic_number: Measurement<usize>,
    pub strongly_connected_sets: usize,
    pub biconnected_sets: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_stats: Option<DegreeStats>,
    pub top_in_degrees: Vec<VertexDegree>,
    pub top_out_degrees: Vec<VertexDegree>,
    pub signatures: SignatureHistogram,
    /// Canonical form fingerprint
    pub shape_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bag: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberReport {
    pub component: usize,
    pub deltas: Vec<SignatureDelta>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BagReport {
    pub index: usize,
    pub founder: usize,
    pub members: Vec<MemberReport>,
    /// Latest recorded count difference per signature
    pub deltas: Vec<SignatureDelta>,
    pub founder_form: CanonicalFormDocument,
    pub signature_form: CanonicalFormDocument,
    pub member_documents: Vec<ComponentDocument>,
}

/// Wall-clock time per pipeline stage
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisStats {
    pub stage_millis: BTreeMap<String, u64>,
}

impl AnalysisStats {
    pub fn record_stage(&mut self, stage: &str, elapsed: std::time::Duration) {
        let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.stage_millis.insert(stage.to_string(), millis);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub config: AnalysisConfig,
    pub dataset: DatasetSummary,
    pub components: Vec<ComponentSummary>,
    /// Component count per shape family
    pub families: BTreeMap<String, usize>,
    pub bags: Vec<BagReport>,
    pub skipped: Vec<SkippedComponent>,
    pub stats: AnalysisStats,
}

impl AnalysisReport {
    pub fn family_count(&self, family: ShapeFamily) -> usize {
        self.families.get(family.as_str()).copied().unwrap_or(0)
    }

    pub fn component(&self, index: usize) -> Option<&ComponentSummary> {
        self.components.get(index)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }
}

pub(crate) fn family_histogram<'a>(
    families: impl IntoIterator<Item = &'a ShapeFamily>,
) -> BTreeMap<String, usize> {
    let mut histogram = BTreeMap::new();
    for family in families {
        *histogram.entry(family.as_str().to_string()).or_insert(0) += 1;
    }
    histogram
}
