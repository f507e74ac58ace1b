//! Madison decomposition of a single word
//!
//! A word of length `L` is madison if it can be cut into contiguous pieces,
//! each either a vocabulary word shorter than `L` or itself decomposable under
//! the same bound. Every substring is judged against the *original* word's
//! length, so the word itself never counts as a piece of its own decomposition.
//!
//! The search is evaluated bottom-up: every substring is resolved after all of
//! its shorter substrings, so no call stack grows with the word length. For each
//! substring the first rule that applies wins:
//!
//! 1. shorter than `L` and in the vocabulary: taken whole
//! 2. a single character shorter than `L`: no decomposition
//! 3. the first split point `i` (by increasing left length) whose left and
//!    right parts both decompose
//!
//! This is the same answer a recursive first-success search produces, including
//! the reported witness.

use crate::core::{Decomposition, Vocabulary};

/// How a substring decomposes, if at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Unresolved,
    Whole,
    /// Left part is this many characters long
    Split(usize),
    Fails,
}

/// Resolution table over all substrings of one word
///
/// Indexed by (start, length) in characters.
struct SplitTable<'w> {
    word: &'w str,
    /// Byte offset of every character boundary, including the end
    boundaries: Vec<usize>,
    cells: Vec<Resolution>,
}

impl<'w> SplitTable<'w> {
    fn new(word: &'w str) -> Self {
        let boundaries: Vec<usize> = word
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(word.len()))
            .collect();
        let n = boundaries.len() - 1;

        Self {
            word,
            boundaries,
            cells: vec![Resolution::Unresolved; n * (n + 1)],
        }
    }

    /// Word length in characters
    fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    #[inline]
    fn index(&self, start: usize, length: usize) -> usize {
        start * (self.len() + 1) + length
    }

    #[inline]
    fn get(&self, start: usize, length: usize) -> Resolution {
        self.cells[self.index(start, length)]
    }

    #[inline]
    fn set(&mut self, start: usize, length: usize, resolution: Resolution) {
        let index = self.index(start, length);
        self.cells[index] = resolution;
    }

    #[inline]
    fn succeeds(&self, start: usize, length: usize) -> bool {
        matches!(self.get(start, length), Resolution::Whole | Resolution::Split(_))
    }

    fn slice(&self, start: usize, length: usize) -> &'w str {
        &self.word[self.boundaries[start]..self.boundaries[start + length]]
    }

    /// Resolve every substring, shortest first
    fn fill(&mut self, vocabulary: &Vocabulary) {
        let bound = self.len();
        for length in 1..=bound {
            for start in 0..=bound - length {
                let resolution = self.resolve(start, length, bound, vocabulary);
                self.set(start, length, resolution);
            }
        }
    }

    fn resolve(
        &self,
        start: usize,
        length: usize,
        bound: usize,
        vocabulary: &Vocabulary,
    ) -> Resolution {
        if length < bound && vocabulary.contains(self.slice(start, length)) {
            return Resolution::Whole;
        }
        if length == 1 && length < bound {
            return Resolution::Fails;
        }

        (1..length)
            .find(|&left| self.succeeds(start, left) && self.succeeds(start + left, length - left))
            .map_or(Resolution::Fails, Resolution::Split)
    }

    /// Collect the witness pieces of a resolved substring, left to right
    fn witness(&self, start: usize, length: usize) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut stack = vec![(start, length)];

        while let Some((start, length)) = stack.pop() {
            match self.get(start, length) {
                Resolution::Whole => pieces.push(self.slice(start, length).to_owned()),
                Resolution::Split(left) => {
                    // Right pushed first so the left side is emitted first
                    stack.push((start + left, length - left));
                    stack.push((start, left));
                }
                Resolution::Unresolved | Resolution::Fails => {
                    unreachable!("witness requested for an unresolved substring")
                }
            }
        }

        pieces
    }
}

/// Decompose `word` into strictly shorter vocabulary words
///
/// Returns the first decomposition found by increasing split position, or a
/// non-madison result. Single-character words are never madison, whatever the
/// vocabulary holds. The empty word is never madison either.
///
/// # Examples
/// ```
/// use madison_words::core::Vocabulary;
/// use madison_words::decomposer::decompose;
///
/// let vocabulary: Vocabulary = ["a", "base", "ball", "baseball"].into_iter().collect();
///
/// let result = decompose("baseball", &vocabulary);
/// assert!(result.is_madison());
/// assert_eq!(result.word_count(), 2);
/// assert_eq!(result.witness(), ["base", "ball"]);
/// ```
#[must_use]
pub fn decompose(word: &str, vocabulary: &Vocabulary) -> Decomposition {
    let mut table = SplitTable::new(word);
    let n = table.len();
    if n == 0 {
        return Decomposition::not_madison();
    }

    table.fill(vocabulary);

    if table.succeeds(0, n) {
        Decomposition::madison(table.witness(0, n))
    } else {
        Decomposition::not_madison()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(words: &[&str]) -> Vocabulary {
        words.iter().copied().collect()
    }

    #[test]
    fn baseball_scenario() {
        let vocabulary = vocab(&["a", "base", "ball", "baseball"]);
        let result = decompose("baseball", &vocabulary);

        assert!(result.is_madison());
        assert_eq!(result.word_count(), 2);
        assert_eq!(result.witness(), ["base", "ball"]);
    }

    #[test]
    fn hi_is_not_madison() {
        let vocabulary = vocab(&["a", "i"]);
        let result = decompose("hi", &vocabulary);

        assert!(!result.is_madison());
        assert_eq!(result.word_count(), 0);
        assert!(result.witness().is_empty());
    }

    #[test]
    fn single_letters_never_madison() {
        let vocabulary = vocab(&["a", "i", "x", "aa"]);
        for word in ["a", "i", "x", "z"] {
            assert!(
                !decompose(word, &vocabulary).is_madison(),
                "'{word}' must not be madison"
            );
        }
    }

    #[test]
    fn word_is_not_its_own_witness() {
        // "cat" is in the vocabulary but has no shorter pieces
        let vocabulary = vocab(&["cat"]);
        assert!(!decompose("cat", &vocabulary).is_madison());
    }

    #[test]
    fn leftmost_split_wins() {
        // Both i=2 ("ab" + "cd") and i=3 ("abc" + "d") work
        let vocabulary = vocab(&["ab", "cd", "abc", "d"]);
        let result = decompose("abcd", &vocabulary);
        assert_eq!(result.witness(), ["ab", "cd"]);

        // i=1 ("a" + "bcd") comes before i=2 ("ab" + "cd")
        let vocabulary = vocab(&["a", "bcd", "ab", "cd"]);
        let result = decompose("abcd", &vocabulary);
        assert_eq!(result.witness(), ["a", "bcd"]);
    }

    #[test]
    fn first_split_wins_over_fewer_pieces() {
        let vocabulary = vocab(&["sun", "flower", "sunflower", "seeds"]);
        let result = decompose("sunflowerseeds", &vocabulary);

        // "sun" closes at i=3, long before "sunflower" at i=9
        assert_eq!(result.witness(), ["sun", "flower", "seeds"]);
        assert_eq!(result.word_count(), 3);
    }

    #[test]
    fn shorter_member_taken_whole() {
        let vocabulary = vocab(&["big", "sun", "flower", "sunflower"]);
        let result = decompose("bigsunflower", &vocabulary);

        // "sunflower" is decomposable but is accepted as a single piece
        assert_eq!(result.witness(), ["big", "sunflower"]);
        assert_eq!(result.word_count(), 2);
    }

    #[test]
    fn nested_decomposition() {
        // "nothing" is not in the vocabulary, but "no" + "thing" are
        let vocabulary = vocab(&["no", "thing", "ness"]);
        let result = decompose("nothingness", &vocabulary);

        assert!(result.is_madison());
        assert_eq!(result.witness(), ["no", "thing", "ness"]);
        assert_eq!(result.word_count(), 3);
    }

    #[test]
    fn witness_concatenates_to_word() {
        let vocabulary = vocab(&["a", "i", "an", "to", "in", "into", "on", "one"]);
        for word in ["anyone", "onto", "into", "ionian", "aaa"] {
            let result = decompose(word, &vocabulary);
            if result.is_madison() {
                assert_eq!(result.witness().concat(), word);
                assert_eq!(result.word_count(), result.witness().len());
            }
        }
    }

    #[test]
    fn repeated_letters_use_single_letter_words() {
        let vocabulary = vocab(&["a"]);
        let result = decompose("aaa", &vocabulary);
        assert_eq!(result.witness(), ["a", "a", "a"]);

        // "a" alone is not shorter than itself
        assert!(!decompose("a", &vocabulary).is_madison());
    }

    #[test]
    fn empty_vocabulary_never_matches() {
        let vocabulary = Vocabulary::new();
        for word in ["baseball", "a", "hi", "nothing"] {
            assert!(!decompose(word, &vocabulary).is_madison());
        }
    }

    #[test]
    fn empty_word_is_not_madison() {
        let vocabulary = vocab(&["a"]);
        assert!(!decompose("", &vocabulary).is_madison());
    }

    #[test]
    fn non_ascii_words_split_on_characters() {
        let vocabulary = vocab(&["café", "au", "lait"]);
        let result = decompose("caféaulait", &vocabulary);
        assert_eq!(result.witness(), ["café", "au", "lait"]);
    }

    #[test]
    fn deterministic_results() {
        let vocabulary = vocab(&["a", "i", "in", "to", "into", "no", "on", "ton"]);
        let first = decompose("intonation", &vocabulary);
        for _ in 0..5 {
            assert_eq!(decompose("intonation", &vocabulary), first);
        }
    }

    #[test]
    fn long_word_does_not_overflow_stack() {
        let vocabulary = vocab(&["ab"]);
        let word = "ab".repeat(200);
        let result = decompose(&word, &vocabulary);
        assert_eq!(result.word_count(), 200);
    }
}
