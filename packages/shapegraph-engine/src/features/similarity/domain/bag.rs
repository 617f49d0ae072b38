//! Similarity bags
//!
//! A bag collects components whose edge-signature *sets* equal the set of
//! its founding member. Counts may differ; the differences are kept as
//! deltas relative to the founder.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::shared::models::{EdgeSignature, SignatureDelta, SignatureHistogram};

/// Why a component was left out of grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Single vertex, nothing to compare
    Singleton,
    /// Skipped: too large
    TooLarge { vertices: usize, limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedComponent {
    /// Position of the component in the grouper's input
    pub component: usize,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// One member of a bag and how its counts differ from the founder's
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BagMember {
    /// Position of the component in the grouper's input
    pub component: usize,
    pub deltas: BTreeMap<EdgeSignature, usize>,
}

#[derive(Debug, Clone)]
pub struct SimilarityBag {
    index: usize,
    founder_signatures: SignatureHistogram,
    members: Vec<BagMember>,
    deltas: BTreeMap<EdgeSignature, usize>,
}

impl SimilarityBag {
    /// Open a bag with `component` as founder
    pub fn found(index: usize, component: usize, signatures: SignatureHistogram) -> Self {
        Self {
            index,
            founder_signatures: signatures,
            members: vec![BagMember {
                component,
                deltas: BTreeMap::new(),
            }],
            deltas: BTreeMap::new(),
        }
    }

    /// True when `signatures` has exactly the founder's signature set
    pub fn accepts(&self, signatures: &SignatureHistogram) -> bool {
        self.founder_signatures.same_keys(signatures)
    }

    /// Add a member, recording `|count - founder count|` for every
    /// signature whose counts differ. A later member overwrites the
    /// bag-level delta of a signature; each member keeps its own.
    pub fn admit(&mut self, component: usize, signatures: &SignatureHistogram) {
        let deltas = signatures.count_deltas(&self.founder_signatures);
        for (signature, delta) in &deltas {
            self.deltas.insert(signature.clone(), *delta);
        }
        self.members.push(BagMember { component, deltas });
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn founder(&self) -> usize {
        self.members[0].component
    }

    pub fn founder_signatures(&self) -> &SignatureHistogram {
        &self.founder_signatures
    }

    pub fn members(&self) -> &[BagMember] {
        &self.members
    }

    /// Input positions of every member, founder first
    pub fn member_indices(&self) -> Vec<usize> {
        self.members.iter().map(|member| member.component).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn deltas(&self) -> &BTreeMap<EdgeSignature, usize> {
        &self.deltas
    }

    pub fn delta_list(&self) -> Vec<SignatureDelta> {
        SignatureDelta::from_map(&self.deltas)
    }
}

/// Result of one grouping run
#[derive(Debug, Clone, Default)]
pub struct GroupingOutcome {
    pub bags: Vec<SimilarityBag>,
    pub skipped: Vec<SkippedComponent>,
}

impl GroupingOutcome {
    /// Bag holding the component at input position `component`
    pub fn bag_of(&self, component: usize) -> Option<&SimilarityBag> {
        self.bags
            .iter()
            .find(|bag| bag.members.iter().any(|member| member.component == component))
    }

    pub fn grouped_count(&self) -> usize {
        self.bags.iter().map(SimilarityBag::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::ClassLabel;

    fn histogram(pairs: &[(&str, &str)]) -> SignatureHistogram {
        SignatureHistogram::from_signatures(
            pairs
                .iter()
                .map(|(s, t)| EdgeSignature::new(ClassLabel::known(*s), ClassLabel::known(*t))),
        )
    }

    #[test]
    fn test_admit_records_deltas() {
        let mut bag = SimilarityBag::found(0, 3, histogram(&[("A", "B")]));
        bag.admit(5, &histogram(&[("A", "B"), ("A", "B"), ("A", "B")]));
        bag.admit(7, &histogram(&[("A", "B"), ("A", "B")]));

        let sig = EdgeSignature::new(ClassLabel::known("A"), ClassLabel::known("B"));
        assert_eq!(bag.member_indices(), vec![3, 5, 7]);
        assert_eq!(bag.members()[1].deltas.get(&sig), Some(&2));
        // bag-level delta holds the latest difference
        assert_eq!(bag.deltas().get(&sig), Some(&1));
        assert_eq!(bag.founder(), 3);
    }

    #[test]
    fn test_equal_counts_record_nothing() {
        let mut bag = SimilarityBag::found(0, 0, histogram(&[("A", "B")]));
        bag.admit(1, &histogram(&[("A", "B")]));
        assert!(bag.deltas().is_empty());
        assert!(bag.members()[1].deltas.is_empty());
    }

    #[test]
    fn test_skip_reason_json() {
        let skipped = SkippedComponent {
            component: 4,
            reason: SkipReason::TooLarge {
                vertices: 300,
                limit: 200,
            },
        };
        let json = serde_json::to_value(&skipped).unwrap();
        assert_eq!(json["component"], 4);
        assert_eq!(json["reason"], "too_large");
        assert_eq!(json["vertices"], 300);
    }
}
