//! Summary statistics for a madison search

use crate::core::{Decomposition, MadisonWords, Vocabulary};
use rand::seq::IndexedRandom;

/// A madison word together with its decomposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MadisonEntry {
    pub word: String,
    pub decomposition: Decomposition,
}

impl MadisonEntry {
    fn new(word: &str, decomposition: &Decomposition) -> Self {
        Self {
            word: word.to_string(),
            decomposition: decomposition.clone(),
        }
    }
}

/// Statistics over a madison result set and its vocabulary
#[derive(Debug, Clone, PartialEq)]
pub struct MadisonStatistics {
    pub total_words: usize,
    pub madison_words: usize,
    pub shortest: Option<MadisonEntry>,
    pub longest: Option<MadisonEntry>,
    /// Word with the most pieces in its witness
    pub densest: Option<MadisonEntry>,
    /// Madison word seen most often in the corpus, with its count
    pub most_frequent: Option<(MadisonEntry, usize)>,
    pub ratio: f64,
}

impl MadisonStatistics {
    /// Compute statistics for `madison`, found in `vocabulary`
    ///
    /// Ties are broken by alphabetical order: the first word for shortest and
    /// most frequent, the last for longest. Density ties go to the greater
    /// witness in lexicographic order.
    #[must_use]
    pub fn compute(madison: &MadisonWords, vocabulary: &Vocabulary) -> Self {
        // Iteration is alphabetical, so min_by_key keeps the first and
        // max_by_key keeps the last of equal keys
        let shortest = madison
            .iter()
            .min_by_key(|(word, _)| word.chars().count())
            .map(|(word, d)| MadisonEntry::new(word, d));

        let longest = madison
            .iter()
            .max_by_key(|(word, _)| word.chars().count())
            .map(|(word, d)| MadisonEntry::new(word, d));

        let densest = madison
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.word_count()
                    .cmp(&b.word_count())
                    .then_with(|| a.witness().cmp(b.witness()))
            })
            .map(|(word, d)| MadisonEntry::new(word, d));

        let most_frequent = madison
            .iter()
            .map(|(word, d)| (word, d, vocabulary.count(word)))
            .max_by(|(wa, _, ca), (wb, _, cb)| ca.cmp(cb).then_with(|| wb.cmp(wa)))
            .map(|(word, d, count)| (MadisonEntry::new(word, d), count));

        Self {
            total_words: vocabulary.len(),
            madison_words: madison.len(),
            shortest,
            longest,
            densest,
            most_frequent,
            ratio: madison_ratio(madison.len(), vocabulary.len()),
        }
    }
}

/// Fraction of vocabulary words that are madison, rounded to 3 decimal places
///
/// Returns 0.0 for an empty vocabulary.
///
/// # Examples
/// ```
/// use madison_words::commands::madison_ratio;
///
/// assert!((madison_ratio(3, 10) - 0.3).abs() < f64::EPSILON);
/// assert!((madison_ratio(1, 3) - 0.333).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn madison_ratio(madison: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = madison as f64 / total as f64;
    (ratio * 1000.0).round() / 1000.0
}

/// Pick up to `count` random madison words for display, sorted by word
#[must_use]
pub fn sample_entries(madison: &MadisonWords, count: usize) -> Vec<MadisonEntry> {
    let entries: Vec<(&str, &Decomposition)> = madison.iter().collect();
    let mut rng = rand::rng();

    let mut sample: Vec<MadisonEntry> = entries
        .choose_multiple(&mut rng, count)
        .map(|(word, d)| MadisonEntry::new(word, d))
        .collect();
    sample.sort_by(|a, b| a.word.cmp(&b.word));
    sample
}
