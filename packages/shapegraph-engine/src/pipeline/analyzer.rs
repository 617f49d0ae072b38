//! End-to-end shape analysis
//!
//! ```text
//! N-Triples ─▶ DatasetGraph ─▶ decompose ─▶ ComponentFeatures*
//!                                              │
//!                     ┌────────────────────────┼──────────────────────┐
//!                     ▼                        ▼                      ▼
//!              flags + family         canonical form         similarity bags
//!                     └────────────────────────┴──────────────────────┘
//!                                              ▼
//!                                        AnalysisReport
//! ```
//!
//! Component summaries are computed in parallel with the `parallel`
//! feature. Grouping always runs sequentially in component order.

use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::report::{
    family_histogram, AnalysisReport, AnalysisStats, BagReport, ComponentSummary, DatasetSummary,
    MemberReport,
};
use crate::config::{AnalysisConfig, Validatable};
use crate::errors::Result;
use crate::features::canonical_form::{CanonicalForm, CanonicalFormBuilder};
use crate::features::component_features::{ComponentFeatures, DegreeKind};
use crate::features::dataset::{DatasetGraph, NTriplesReader};
use crate::features::similarity::{GroupingOutcome, SimilarityGrouper};
use crate::shared::models::SignatureDelta;

#[derive(Debug, Clone)]
pub struct ShapeAnalyzer {
    config: AnalysisConfig,
    reader: NTriplesReader,
    builder: CanonicalFormBuilder,
    grouper: SimilarityGrouper,
}

impl ShapeAnalyzer {
    /// Fails when `config` does not validate
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader: NTriplesReader::new(),
            builder: CanonicalFormBuilder::new(config.traversal),
            grouper: SimilarityGrouper::new(config.max_component_size)
                .with_traversal(config.traversal),
            config,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<DatasetGraph> {
        self.reader.read_file(path)
    }

    pub fn load_str(&self, input: &str) -> Result<DatasetGraph> {
        self.reader.read_str(input)
    }

    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let mut stats = AnalysisStats::default();
        let start = Instant::now();
        let graph = self.load_file(path)?;
        stats.record_stage("load", start.elapsed());
        Ok(self.analyze_graph_with(&graph, stats))
    }

    pub fn analyze_str(&self, input: &str) -> Result<AnalysisReport> {
        let graph = self.load_str(input)?;
        Ok(self.analyze_graph(&graph))
    }

    /// Components of `graph` under the configured decomposition, ascending
    /// by vertex count
    pub fn components(&self, graph: &DatasetGraph) -> Vec<ComponentFeatures> {
        graph.decompose(self.config.decomposition, self.config.vertex_order)
    }

    pub fn canonical_form(&self, features: &ComponentFeatures) -> CanonicalForm {
        self.builder.build(features)
    }

    pub fn analyze_graph(&self, graph: &DatasetGraph) -> AnalysisReport {
        self.analyze_graph_with(graph, AnalysisStats::default())
    }

    /// Analysis that keeps stages already recorded in `stats`
    pub fn analyze_graph_with(&self, graph: &DatasetGraph, mut stats: AnalysisStats) -> AnalysisReport {
        let start = Instant::now();
        let components = self.components(graph);
        stats.record_stage("decompose", start.elapsed());
        if components.is_empty() {
            warn!("dataset has no vertices");
        }

        let start = Instant::now();
        let mut summaries = self.summarize_all(&components);
        stats.record_stage("summarize", start.elapsed());

        let start = Instant::now();
        let outcome = self.grouper.group(&components);
        for bag in &outcome.bags {
            for member in bag.member_indices() {
                summaries[member].bag = Some(bag.index());
            }
        }
        let bags = self.bag_reports(&outcome, &components);
        stats.record_stage("group", start.elapsed());

        let catalog = graph.catalog();
        let report = AnalysisReport {
            config: self.config.clone(),
            dataset: DatasetSummary {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                classified_vertices: catalog.classified_count(),
                distinct_classes: catalog.distinct_classes(),
            },
            families: family_histogram(summaries.iter().map(|summary| &summary.family)),
            components: summaries,
            bags,
            skipped: outcome.skipped,
            stats,
        };

        info!(
            components = report.components.len(),
            bags = report.bags.len(),
            skipped = report.skipped.len(),
            "analysis complete"
        );
        report
    }

    #[cfg(feature = "parallel")]
    fn summarize_all(&self, components: &[ComponentFeatures]) -> Vec<ComponentSummary> {
        components
            .par_iter()
            .enumerate()
            .map(|(index, features)| self.summarize(index, features))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn summarize_all(&self, components: &[ComponentFeatures]) -> Vec<ComponentSummary> {
        components
            .iter()
            .enumerate()
            .map(|(index, features)| self.summarize(index, features))
            .collect()
    }

    pub fn summarize(&self, index: usize, features: &ComponentFeatures) -> ComponentSummary {
        let limit = self.config.measure_limit;
        let top_k = self.config.top_k;
        let flags = features.shape_flags();

        let summary = ComponentSummary {
            index,
            vertex_count: features.vertex_count(),
            edge_count: features.edge_count(),
            family: flags.family(),
            flags,
            diameter: features.measure(limit, ComponentFeatures::diameter),
            diameter_path: features.measure(limit, ComponentFeatures::diameter_path),
            chromatic_number: features.measure(limit, ComponentFeatures::chromatic_number),
            strongly_connected_sets: features.strongly_connected_sets().len(),
            biconnected_sets: features.biconnected_sets().len(),
            degree_stats: features.degree_stats(DegreeKind::Total),
            top_in_degrees: features.top_degrees(DegreeKind::In, top_k),
            top_out_degrees: features.top_degrees(DegreeKind::Out, top_k),
            signatures: features.signature_histogram().clone(),
            shape_key: self.canonical_form(features).shape_key(),
            bag: None,
        };
        debug!(index, family = %summary.family, vertices = summary.vertex_count, "component summarized");
        summary
    }

    fn bag_reports(&self, outcome: &GroupingOutcome, components: &[ComponentFeatures]) -> Vec<BagReport> {
        outcome
            .bags
            .iter()
            .map(|bag| {
                let rendering = self.grouper.render(bag, components);
                BagReport {
                    index: bag.index(),
                    founder: bag.founder(),
                    members: bag
                        .members()
                        .iter()
                        .map(|member| MemberReport {
                            component: member.component,
                            deltas: SignatureDelta::from_map(&member.deltas),
                        })
                        .collect(),
                    deltas: bag.delta_list(),
                    founder_form: rendering.founder_form.to_document(),
                    signature_form: rendering.signature_form.to_document(),
                    member_documents: rendering.member_documents,
                }
            })
            .collect()
    }
}
