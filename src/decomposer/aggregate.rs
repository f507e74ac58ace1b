//! Madison search over a whole vocabulary
//!
//! Decomposes every vocabulary word (each against its own length) and keeps the
//! ones that qualify.

use super::engine::decompose;
use crate::core::{MadisonWords, Vocabulary};
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Find every madison word in `vocabulary`
///
/// # Examples
/// ```
/// use madison_words::core::Vocabulary;
/// use madison_words::decomposer::aggregate;
///
/// let vocabulary: Vocabulary = ["in", "to", "into", "onto", "on"].into_iter().collect();
/// let madison = aggregate(&vocabulary);
///
/// assert_eq!(madison.words().collect::<Vec<_>>(), vec!["into", "onto"]);
/// ```
#[must_use]
pub fn aggregate(vocabulary: &Vocabulary) -> MadisonWords {
    aggregate_with(vocabulary, |_| {})
}

/// Find every madison word, calling `on_word` once per word examined
///
/// Words are decomposed in parallel; `on_word` may run on any worker thread.
/// The returned set is ordered by word, so its content does not depend on
/// scheduling.
pub fn aggregate_with<F>(vocabulary: &Vocabulary, on_word: F) -> MadisonWords
where
    F: Fn(&str) + Sync,
{
    let start = Instant::now();
    let words: Vec<&str> = vocabulary.words().collect();

    let madison: MadisonWords = words
        .par_iter()
        .map(|&word| {
            let decomposition = decompose(word, vocabulary);
            on_word(word);
            (word, decomposition)
        })
        .filter(|(_, decomposition)| decomposition.is_madison())
        .collect::<Vec<_>>()
        .into_iter()
        .collect();

    debug!(
        examined = words.len(),
        found = madison.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "madison search complete"
    );

    madison
}
