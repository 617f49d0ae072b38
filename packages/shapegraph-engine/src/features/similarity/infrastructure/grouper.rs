//! First-fit signature-set grouping
//!
//! Components are visited in input order. Each one joins the first bag
//! whose founder has exactly the same set of edge signatures, or founds a
//! new bag. The grouping is approximate and order-dependent: two
//! components with equal signature sets land together even when their
//! topologies differ.

use tracing::{debug, info};

use crate::features::canonical_form::{CanonicalForm, CanonicalFormBuilder, TraversalKind};
use crate::features::component_features::{ComponentDocument, ComponentFeatures};
use crate::features::similarity::domain::{
    GroupingOutcome, SimilarityBag, SkipReason, SkippedComponent,
};

/// Components above this many vertices are skipped unless configured
pub const DEFAULT_MAX_VERTICES: usize = 200;

#[derive(Debug, Clone, Copy)]
pub struct SimilarityGrouper {
    max_vertices: usize,
    builder: CanonicalFormBuilder,
}

impl Default for SimilarityGrouper {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VERTICES)
    }
}

/// Everything rendered for one bag
#[derive(Debug, Clone)]
pub struct BagRendering {
    pub founder_form: CanonicalForm,
    /// One edge per distinct founder signature, each between two fresh
    /// vertices carrying the source and target class
    pub signature_form: CanonicalForm,
    pub member_documents: Vec<ComponentDocument>,
}

impl SimilarityGrouper {
    pub fn new(max_vertices: usize) -> Self {
        Self {
            max_vertices,
            builder: CanonicalFormBuilder::default(),
        }
    }

    pub fn with_traversal(mut self, kind: TraversalKind) -> Self {
        self.builder = CanonicalFormBuilder::new(kind);
        self
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    pub fn traversal(&self) -> TraversalKind {
        self.builder.kind()
    }

    fn skip_reason(&self, features: &ComponentFeatures) -> Option<SkipReason> {
        let vertices = features.vertex_count();
        if vertices > self.max_vertices {
            Some(SkipReason::TooLarge {
                vertices,
                limit: self.max_vertices,
            })
        } else if vertices <= 1 {
            Some(SkipReason::Singleton)
        } else {
            None
        }
    }

    /// Bucket `components` into similarity bags.
    ///
    /// Bag members and skipped entries refer to positions in `components`.
    pub fn group(&self, components: &[ComponentFeatures]) -> GroupingOutcome {
        let mut outcome = GroupingOutcome::default();

        for (position, features) in components.iter().enumerate() {
            if let Some(reason) = self.skip_reason(features) {
                debug!(component = position, ?reason, "component skipped");
                outcome.skipped.push(SkippedComponent {
                    component: position,
                    reason,
                });
                continue;
            }

            let signatures = features.signature_histogram();
            match outcome.bags.iter_mut().find(|bag| bag.accepts(signatures)) {
                Some(bag) => bag.admit(position, signatures),
                None => {
                    let index = outcome.bags.len();
                    outcome
                        .bags
                        .push(SimilarityBag::found(index, position, signatures.clone()));
                }
            }
        }

        info!(
            components = components.len(),
            bags = outcome.bags.len(),
            skipped = outcome.skipped.len(),
            "similarity grouping complete"
        );
        outcome
    }

    /// Render the founder's canonical form, the signature form and one
    /// document per member of `bag`.
    ///
    /// `components` must be the slice `bag` was grouped from.
    pub fn render(&self, bag: &SimilarityBag, components: &[ComponentFeatures]) -> BagRendering {
        debug_assert!(bag.founder() < components.len());
        let founder = &components[bag.founder()];

        BagRendering {
            founder_form: self.builder.build(founder),
            signature_form: signature_form(bag),
            member_documents: bag
                .member_indices()
                .into_iter()
                .map(|member| components[member].to_document())
                .collect(),
        }
    }
}

fn signature_form(bag: &SimilarityBag) -> CanonicalForm {
    let mut form = CanonicalForm::new();
    for signature in bag.founder_signatures().signatures() {
        let source = form.add_vertex(signature.source.clone(), None);
        let target = form.add_vertex(signature.target.clone(), None);
        form.add_edge(source, target);
    }
    form
}
