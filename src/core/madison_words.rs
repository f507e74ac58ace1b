//! Madison result set
//!
//! Maps each qualifying vocabulary word to its witnessing decomposition.

use super::Decomposition;
use std::collections::BTreeMap;

/// Qualifying words keyed and ordered by word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MadisonWords {
    entries: BTreeMap<String, Decomposition>,
}

impl MadisonWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word if its decomposition qualifies
    ///
    /// Non-madison results are ignored so the set never holds empty witnesses.
    pub fn insert(&mut self, word: impl Into<String>, decomposition: Decomposition) {
        if decomposition.is_madison() {
            self.entries.insert(word.into(), decomposition);
        }
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Decomposition> {
        self.entries.get(word)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Decomposition)> {
        self.entries.iter().map(|(word, d)| (word.as_str(), d))
    }

    /// Qualifying words in alphabetical order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, Decomposition)> for MadisonWords {
    fn from_iter<I: IntoIterator<Item = (S, Decomposition)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (word, decomposition) in iter {
            set.insert(word, decomposition);
        }
        set
    }
}
