//! Edge signatures and signature histograms
//!
//! An edge signature summarises an edge by the classes of its endpoints,
//! ignoring the relation itself. Histograms of signatures are the keys the
//! similarity grouper buckets components by.

use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};

use super::ClassLabel;

/// Ordered (source class, target class) pair.
///
/// Equality is order-sensitive: `(A, B) != (B, A)` unless `A == B`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeSignature {
    pub source: ClassLabel,
    pub target: ClassLabel,
}

impl EdgeSignature {
    pub fn new(source: ClassLabel, target: ClassLabel) -> Self {
        Self { source, target }
    }
}

/// Absolute count difference for one signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureDelta {
    pub source: ClassLabel,
    pub target: ClassLabel,
    pub delta: usize,
}

impl SignatureDelta {
    /// Flatten a signature-keyed delta map into a serializable list
    pub fn from_map(map: &BTreeMap<EdgeSignature, usize>) -> Vec<Self> {
        map.iter()
            .map(|(signature, &delta)| Self {
                source: signature.source.clone(),
                target: signature.target.clone(),
                delta,
            })
            .collect()
    }
}

/// Occurrence count per edge signature.
///
/// Backed by a `BTreeMap` so iteration follows signature order and every
/// rendering built from a histogram is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureHistogram {
    counts: BTreeMap<EdgeSignature, usize>,
}

impl SignatureHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every signature yielded by `signatures`
    pub fn from_signatures<I>(signatures: I) -> Self
    where
        I: IntoIterator<Item = EdgeSignature>,
    {
        let mut histogram = Self::new();
        for signature in signatures {
            histogram.record(signature);
        }
        histogram
    }

    pub fn record(&mut self, signature: EdgeSignature) {
        *self.counts.entry(signature).or_insert(0) += 1;
    }

    /// Occurrences of `signature` (0 when absent)
    pub fn count(&self, signature: &EdgeSignature) -> usize {
        self.counts.get(signature).copied().unwrap_or(0)
    }

    /// Number of distinct signatures
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (the number of scanned edges)
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EdgeSignature, usize)> {
        self.counts.iter().map(|(signature, &count)| (signature, count))
    }

    pub fn signatures(&self) -> impl Iterator<Item = &EdgeSignature> {
        self.counts.keys()
    }

    pub fn key_set(&self) -> BTreeSet<&EdgeSignature> {
        self.counts.keys().collect()
    }

    /// True when both histograms contain exactly the same signatures,
    /// whatever their counts (empty symmetric difference).
    pub fn same_keys(&self, other: &Self) -> bool {
        self.counts.len() == other.counts.len()
            && self.counts.keys().all(|signature| other.counts.contains_key(signature))
    }

    /// `|self[s] - other[s]|` for every signature of `self` whose counts differ
    pub fn count_deltas(&self, other: &Self) -> BTreeMap<EdgeSignature, usize> {
        self.counts
            .iter()
            .filter_map(|(signature, &count)| {
                let theirs = other.count(signature);
                (count != theirs).then(|| (signature.clone(), count.abs_diff(theirs)))
            })
            .collect()
    }
}

#[derive(Serialize)]
struct HistogramEntry<'a> {
    source: &'a ClassLabel,
    target: &'a ClassLabel,
    count: usize,
}

// JSON objects need string keys, so histograms serialize as entry lists.
impl Serialize for SignatureHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.counts.iter().map(|(signature, &count)| HistogramEntry {
            source: &signature.source,
            target: &signature.target,
            count,
        }))
    }
}
