//! Decomposition result
//!
//! The outcome of testing one word for the madison property.

use std::fmt;

/// Result of decomposing a word into shorter vocabulary words
///
/// A madison word carries a witness: the vocabulary words whose concatenation
/// is the original word. A non-madison word has an empty witness and a word
/// count of zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Decomposition {
    witness: Vec<String>,
}

impl Decomposition {
    /// Build a successful decomposition from its witness pieces
    ///
    /// The witness must hold at least one piece; an empty one would read back
    /// as not madison.
    #[must_use]
    pub fn madison(witness: Vec<String>) -> Self {
        debug_assert!(!witness.is_empty(), "madison witness must not be empty");
        Self { witness }
    }

    /// The result for a word with no decomposition
    #[must_use]
    pub const fn not_madison() -> Self {
        Self {
            witness: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_madison(&self) -> bool {
        !self.witness.is_empty()
    }

    /// Number of pieces in the witness (the word's density)
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.witness.len()
    }

    /// Vocabulary words that concatenate to the decomposed word
    #[inline]
    #[must_use]
    pub fn witness(&self) -> &[String] {
        &self.witness
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_madison() {
            write!(f, "{}", self.witness.join(" + "))
        } else {
            write!(f, "(none)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_madison_is_empty() {
        let result = Decomposition::not_madison();
        assert!(!result.is_madison());
        assert_eq!(result.word_count(), 0);
        assert!(result.witness().is_empty());
    }

    #[test]
    fn madison_counts_pieces() {
        let result = Decomposition::madison(vec!["base".into(), "ball".into()]);
        assert!(result.is_madison());
        assert_eq!(result.word_count(), 2);
        assert_eq!(result.witness(), ["base", "ball"]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "madison witness must not be empty")]
    fn madison_rejects_empty_witness() {
        let _ = Decomposition::madison(Vec::new());
    }

    #[test]
    fn display_joins_witness() {
        let result = Decomposition::madison(vec!["sun".into(), "flower".into()]);
        assert_eq!(format!("{result}"), "sun + flower");
        assert_eq!(format!("{}", Decomposition::not_madison()), "(none)");
    }
}
