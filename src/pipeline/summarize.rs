// Exclusive summary-topic pipeline.
//
// Clean each row's keyword cell, assign summary topics greedily so every
// topic names at most one row until the list is exhausted, and append the
// result as the 'Summary topic' column.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::RunReport;
use crate::lexicon::Lexicon;
use crate::table::Table;
use crate::topics::assign::{ExclusiveAssigner, TopicLabel};
use crate::topics::normalize::clean_keywords;
use crate::topics::traits::TopicAssigner;

pub const KEYWORDS_COLUMN: &str = "Keywords";
pub const SUMMARY_TOPIC_COLUMN: &str = "Summary topic";

/// Run the exclusive assignment over `input` and write the augmented table
/// to `output`. Row order is the assignment order.
pub fn run(
    input: &Path,
    output: &Path,
    lexicon: &Lexicon,
    labels: &[TopicLabel],
) -> Result<RunReport> {
    let mut table = Table::read_csv(input)?;
    let keywords_idx = table.require_column(KEYWORDS_COLUMN)?;

    let cleaned: Vec<String> = table
        .column(keywords_idx)
        .iter()
        .map(|raw| clean_keywords(raw, lexicon))
        .collect();

    let assigned = ExclusiveAssigner.assign(&cleaned, labels);
    let report = RunReport::from_assignments(&assigned);

    table.append_column(SUMMARY_TOPIC_COLUMN, assigned)?;
    table.write_csv(output)?;

    info!(
        rows = report.rows,
        labeled = report.labeled,
        unlabeled = report.unlabeled,
        "Summary topics assigned"
    );
    Ok(report)
}
