// Nearest-topic pipeline for metadata titles.
//
// A topics table (one row per summary topic, with its keyword string) acts
// as the label set; every metadata title is tagged with its nearest topic,
// reuse allowed. Appends the 'Assigned Topic' column to the metadata table.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::summarize::{KEYWORDS_COLUMN, SUMMARY_TOPIC_COLUMN};
use super::RunReport;
use crate::table::Table;
use crate::topics::assign::{NearestAssigner, TopicLabel};
use crate::topics::normalize::collapse_whitespace;
use crate::topics::traits::TopicAssigner;

pub const TITLE_COLUMN: &str = "Title";
pub const ASSIGNED_TOPIC_COLUMN: &str = "Assigned Topic";

/// Tag every row of `metadata` with the nearest topic from `topics` and
/// write the augmented metadata table to `output`.
pub fn run(metadata: &Path, topics: &Path, output: &Path) -> Result<RunReport> {
    let mut metadata_table = Table::read_csv(metadata)?;
    let topics_table = Table::read_csv(topics)?;

    // Validate every required column before touching any row
    let title_idx = metadata_table.require_column(TITLE_COLUMN)?;
    let name_idx = topics_table.require_column(SUMMARY_TOPIC_COLUMN)?;
    let keywords_idx = topics_table.require_column(KEYWORDS_COLUMN)?;

    let titles: Vec<String> = metadata_table
        .column(title_idx)
        .iter()
        .map(|title| collapse_whitespace(title))
        .collect();

    let labels: Vec<TopicLabel> = topics_table
        .column(name_idx)
        .into_iter()
        .zip(topics_table.column(keywords_idx))
        .map(|(name, keywords)| {
            TopicLabel::new(name.trim(), collapse_whitespace(&keywords))
        })
        .collect();

    let assigned = NearestAssigner.assign(&titles, &labels);
    let report = RunReport::from_assignments(&assigned);

    metadata_table.append_column(ASSIGNED_TOPIC_COLUMN, assigned)?;
    metadata_table.write_csv(output)?;

    info!(
        rows = report.rows,
        topics = labels.len(),
        labeled = report.labeled,
        unlabeled = report.unlabeled,
        "Nearest topics assigned"
    );
    Ok(report)
}
