// Topic assignment over a document/label similarity matrix.
//
// Both modes share the same joint vector space and similarity computation
// and differ only in their claim policy:
//
// - ExclusiveAssigner: greedy and order-sensitive. Each label can be claimed
//   by at most one document; once every plausible label is taken, remaining
//   documents fall back to the sentinel. Permuting the input order can change
//   which document wins a contested label — that is the algorithm, not a bug.
// - NearestAssigner: independent per-row argmax, labels reusable, no ordering
//   dependency across rows.

use serde::{Deserialize, Serialize};

use super::similarity::similarity_matrix;
use super::traits::TopicAssigner;
use super::vectorize::VectorSpace;

/// Fallback assigned when no eligible label remains for a document.
pub const UNLABELED: &str = "Unlabeled";

/// A fixed, human-readable topic plus the text that places it in the shared
/// vector space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicLabel {
    pub name: String,
    /// Descriptive text vectorized for similarity. Labels built from a bare
    /// name reuse the name itself.
    pub description: String,
}

impl TopicLabel {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// A label whose description is its own name.
    pub fn plain(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
        }
    }
}

/// Fit the joint space and compute the document-by-label similarity matrix.
fn label_similarities(documents: &[String], labels: &[TopicLabel]) -> Vec<Vec<f64>> {
    let texts: Vec<String> = labels.iter().map(|l| l.description.clone()).collect();
    let space = VectorSpace::fit_joint(documents, &texts);
    similarity_matrix(&space.documents, &space.references)
}

/// Greedy, exclusivity-constrained assignment in input-row order.
pub struct ExclusiveAssigner;

impl TopicAssigner for ExclusiveAssigner {
    fn assign(&self, documents: &[String], labels: &[TopicLabel]) -> Vec<String> {
        if documents.is_empty() {
            return Vec::new();
        }

        let sim = label_similarities(documents, labels);
        // Call-local; discarded when the pass ends
        let mut consumed = vec![false; labels.len()];
        let mut assigned = Vec::with_capacity(documents.len());

        for row in &sim {
            // Candidates need positive similarity: a document with no lexical
            // overlap never claims a label. Stable sort keeps the earlier
            // label ahead on ties.
            let mut ranked: Vec<usize> = (0..labels.len()).filter(|&j| row[j] > 0.0).collect();
            ranked.sort_by(|&a, &b| {
                row[b]
                    .partial_cmp(&row[a])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            match ranked.iter().find(|&&j| !consumed[j]) {
                Some(&j) => {
                    consumed[j] = true;
                    assigned.push(labels[j].name.clone());
                }
                None => assigned.push(UNLABELED.to_string()),
            }
        }

        assigned
    }
}

/// Non-exclusive nearest-label assignment; every row is independent.
pub struct NearestAssigner;

impl TopicAssigner for NearestAssigner {
    fn assign(&self, documents: &[String], labels: &[TopicLabel]) -> Vec<String> {
        if documents.is_empty() {
            return Vec::new();
        }

        let sim = label_similarities(documents, labels);
        sim.iter()
            .map(|row| {
                // Strict comparison keeps the smallest index on ties
                let mut best: Option<usize> = None;
                for (j, &s) in row.iter().enumerate() {
                    if s > 0.0 && best.map_or(true, |b| s > row[b]) {
                        best = Some(j);
                    }
                }
                match best {
                    Some(j) => labels[j].name.clone(),
                    None => UNLABELED.to_string(),
                }
            })
            .collect()
    }
}
