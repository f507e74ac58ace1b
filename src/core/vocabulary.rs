//! Vocabulary representation
//!
//! A Vocabulary is the set of dictionary words a decomposition is tested against,
//! together with how often each word was seen in the source corpus.

use rustc_hash::FxHashMap;

/// A set of distinct lowercase words with occurrence counts
///
/// Read-only once built; the decomposer only ever asks for membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    counts: FxHashMap<String, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`
    ///
    /// Duplicates collapse into a single entry with an incremented count.
    pub fn insert(&mut self, word: impl Into<String>) {
        *self.counts.entry(word.into()).or_insert(0) += 1;
    }

    /// Record `word` as present with a count of exactly 1
    ///
    /// Listings carry no frequencies, so repeats do not accumulate.
    pub fn insert_listed(&mut self, word: impl Into<String>) {
        self.counts.insert(word.into(), 1);
    }

    /// Check whether `word` is a member
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of times `word` was recorded (0 if absent)
    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over the distinct words in unspecified order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// All distinct words, sorted
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words().collect();
        words.sort_unstable();
        words
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Self::new();
        for word in iter {
            vocabulary.insert(word);
        }
        vocabulary
    }
}
