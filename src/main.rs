use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use rubric::config::Config;
use rubric::output::terminal;
use rubric::pipeline;
use rubric::topics::canonical::canonicalize;

/// Rubric: keyword normalization and topic assignment for literature reviews.
///
/// Cleans semicolon-separated keyword lists, places documents and topic
/// labels in a shared TF-IDF space, and tags every row of a review table
/// with a topic.
#[derive(Parser)]
#[command(name = "rubric", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign exclusive summary topics from the 'Keywords' column
    Summarize {
        /// Input CSV with a 'Keywords' column
        input: PathBuf,

        /// Output CSV (default: '<input>_with_topics.csv')
        #[arg(long)]
        output: Option<PathBuf>,

        /// JSON lexicon override (filler words + expansions)
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// JSON topic-list override (names, or {name, description} objects)
        #[arg(long)]
        topics: Option<PathBuf>,
    },

    /// Tag metadata titles with the nearest topic from a topics table
    MatchTitles {
        /// Metadata CSV with a 'Title' column
        metadata: PathBuf,

        /// Topics CSV with 'Summary topic' and 'Keywords' columns
        topics: PathBuf,

        /// Output CSV (default: '<metadata>_with_assigned_topics.csv')
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Canonicalize a single keyword against the fixed vocabulary
    Canonicalize {
        /// The free-text keyword to canonicalize
        keyword: String,

        /// JSON vocabulary override (array of phrases)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Emit the result as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rubric=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Summarize {
            input,
            output,
            lexicon,
            topics,
        } => {
            let lexicon = config.lexicon(lexicon.as_deref())?;
            let labels = config.topic_labels(topics.as_deref())?;
            let output = output.unwrap_or_else(|| suffixed_output(&input, "_with_topics"));

            info!(input = %input.display(), labels = labels.len(), "Running summary-topic assignment");
            let report = pipeline::summarize::run(&input, &output, &lexicon, &labels)?;

            terminal::display_report("Summary Topics", &report);
            println!("Saved to: {}", output.display().to_string().bold());
        }

        Commands::MatchTitles {
            metadata,
            topics,
            output,
        } => {
            let output =
                output.unwrap_or_else(|| suffixed_output(&metadata, "_with_assigned_topics"));

            info!(metadata = %metadata.display(), topics = %topics.display(), "Running nearest-topic matching");
            let report = pipeline::titles::run(&metadata, &topics, &output)?;

            terminal::display_report("Assigned Topics", &report);
            println!("Saved to: {}", output.display().to_string().bold());
        }

        Commands::Canonicalize {
            keyword,
            vocabulary,
            json,
        } => {
            let vocabulary = config.vocabulary(vocabulary.as_deref())?;
            let canonical = canonicalize(&keyword, &vocabulary);

            if json {
                println!(
                    "{}",
                    serde_json::json!({ "keyword": keyword, "canonical": canonical })
                );
            } else if canonical.is_empty() {
                println!("{}", "(empty keyword)".dimmed());
            } else {
                println!("{canonical}");
            }
        }
    }

    Ok(())
}

/// Derive the default output path: 'review.csv' -> 'review<suffix>.csv',
/// next to the input.
fn suffixed_output(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}{suffix}.csv"))
}
