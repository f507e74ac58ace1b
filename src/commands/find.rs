//! Madison search command
//!
//! Loads a vocabulary, finds every madison word in it and summarises the result.

use super::statistics::{MadisonEntry, MadisonStatistics, sample_entries};
use crate::core::{MadisonWords, Vocabulary};
use crate::corpus::loader::write_words;
use crate::corpus::{CorpusError, load_listing, load_text};
use crate::decomposer::aggregate_with;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Where a vocabulary comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VocabularySource {
    /// Free text, tokenised and filtered
    #[default]
    Text,
    /// One word per line, taken as-is
    Listing,
}

/// Load a vocabulary from `path` according to `source`
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_vocabulary(path: &Path, source: VocabularySource) -> Result<Vocabulary, CorpusError> {
    match source {
        VocabularySource::Text => load_text(path),
        VocabularySource::Listing => load_listing(path),
    }
}

/// Configuration for a madison search
#[derive(Debug, Clone)]
pub struct FindConfig {
    pub path: PathBuf,
    pub source: VocabularySource,
    /// Write qualifying words here, one per line
    pub output: Option<PathBuf>,
    /// Number of random madison words to include for display
    pub sample: usize,
    pub show_progress: bool,
}

impl FindConfig {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source: VocabularySource::Text,
            output: None,
            sample: 0,
            show_progress: false,
        }
    }
}

/// Result of a madison search
#[derive(Debug)]
pub struct FindResult {
    pub madison: MadisonWords,
    pub statistics: MadisonStatistics,
    pub sample: Vec<MadisonEntry>,
    pub duration: Duration,
}

/// Run a madison search as described by `config`
///
/// # Errors
///
/// Returns an error if the vocabulary cannot be loaded or the output cannot be written.
///
/// # Panics
///
/// Will not panic - the progress bar template is a fixed, valid string.
pub fn find_madison_words(config: &FindConfig) -> Result<FindResult, CorpusError> {
    let vocabulary = load_vocabulary(&config.path, config.source)?;
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(vocabulary.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message("decomposing");

    let madison = aggregate_with(&vocabulary, |_| pb.inc(1));
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    info!(
        vocabulary = vocabulary.len(),
        madison = madison.len(),
        seconds = duration.as_secs_f64(),
        "madison search finished"
    );

    if let Some(output) = &config.output {
        write_words(madison.words(), output)?;
        info!(path = %output.display(), "wrote madison words");
    }

    let statistics = MadisonStatistics::compute(&madison, &vocabulary);
    let sample = sample_entries(&madison, config.sample);

    Ok(FindResult {
        madison,
        statistics,
        sample,
        duration,
    })
}
