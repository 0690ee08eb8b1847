use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::lexicon::{self, Lexicon};
use crate::topics::assign::TopicLabel;

/// Central configuration loaded from environment variables.
///
/// Each RUBRIC_* variable points at a JSON override file; unset means the
/// built-in defaults. A CLI flag always wins over the environment. The .env
/// file is loaded automatically at startup via dotenvy.
pub struct Config {
    pub lexicon_path: Option<PathBuf>,
    pub topics_path: Option<PathBuf>,
    pub vocabulary_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            lexicon_path: env::var("RUBRIC_LEXICON").ok().map(PathBuf::from),
            topics_path: env::var("RUBRIC_TOPICS").ok().map(PathBuf::from),
            vocabulary_path: env::var("RUBRIC_VOCABULARY").ok().map(PathBuf::from),
        }
    }

    /// Resolve the lexicon: CLI flag, then environment, then defaults.
    /// File-loaded lexicons are validated; the defaults are valid by
    /// construction.
    pub fn lexicon(&self, cli: Option<&Path>) -> Result<Lexicon> {
        match cli.or(self.lexicon_path.as_deref()) {
            Some(path) => Lexicon::from_file(path),
            None => Ok(Lexicon::default()),
        }
    }

    /// Resolve the summary-topic label list.
    pub fn topic_labels(&self, cli: Option<&Path>) -> Result<Vec<TopicLabel>> {
        match cli.or(self.topics_path.as_deref()) {
            Some(path) => lexicon::topic_labels_from_file(path),
            None => Ok(lexicon::default_topic_labels()),
        }
    }

    /// Resolve the canonical keyword vocabulary.
    pub fn vocabulary(&self, cli: Option<&Path>) -> Result<Vec<String>> {
        match cli.or(self.vocabulary_path.as_deref()) {
            Some(path) => lexicon::vocabulary_from_file(path),
            None => Ok(lexicon::default_vocabulary()),
        }
    }
}
