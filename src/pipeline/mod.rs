// Table-level pipelines — the two operations the surrounding orchestration
// calls. Each reads CSV input, runs one assignment pass, appends exactly one
// column, writes CSV output, and reports what happened through its return
// value (never by leaving marker files around for later existence checks).

pub mod summarize;
pub mod titles;

use std::collections::HashMap;

use crate::topics::assign::UNLABELED;

/// Outcome of one assignment run, for logging and terminal display.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub rows: usize,
    pub labeled: usize,
    pub unlabeled: usize,
    /// (topic name, row count), most frequent first, name as tiebreak.
    pub topic_counts: Vec<(String, usize)>,
}

impl RunReport {
    pub fn from_assignments(assigned: &[String]) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut unlabeled = 0;
        for name in assigned {
            if name == UNLABELED {
                unlabeled += 1;
            } else {
                *counts.entry(name.as_str()).or_insert(0) += 1;
            }
        }

        let mut topic_counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        topic_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            rows: assigned.len(),
            labeled: assigned.len() - unlabeled,
            unlabeled,
            topic_counts,
        }
    }
}
