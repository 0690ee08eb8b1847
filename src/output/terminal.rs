// Colored terminal output for assignment run reports.
//
// This module owns all terminal-specific formatting; main.rs delegates here
// after a pipeline returns its report.

use colored::Colorize;

use crate::pipeline::RunReport;
use crate::topics::assign::UNLABELED;

/// How many topics to list before folding the rest into one line.
const MAX_LISTED_TOPICS: usize = 15;

/// Display a run report: totals plus a tally of assigned topics.
pub fn display_report(title: &str, report: &RunReport) {
    println!(
        "\n{}",
        format!("=== {title} ({} rows) ===", report.rows).bold()
    );
    println!();
    println!(
        "  {} labeled, {} unlabeled",
        report.labeled.to_string().bright_green(),
        if report.unlabeled > 0 {
            report.unlabeled.to_string().bright_yellow()
        } else {
            report.unlabeled.to_string().normal()
        }
    );
    println!();

    for (name, count) in report.topic_counts.iter().take(MAX_LISTED_TOPICS) {
        println!("  {:>4}  {}", count, name);
    }
    let remaining = report.topic_counts.len().saturating_sub(MAX_LISTED_TOPICS);
    if remaining > 0 {
        println!("  {}", format!("... and {remaining} more topics").dimmed());
    }
    if report.unlabeled > 0 {
        println!("  {:>4}  {}", report.unlabeled, UNLABELED.dimmed());
    }
    println!();
}
