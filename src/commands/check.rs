//! Single word check command

use super::find::{VocabularySource, load_vocabulary};
use crate::core::{Decomposition, Vocabulary};
use crate::corpus::CorpusError;
use crate::decomposer::decompose;
use std::path::Path;

/// Result of checking one word
#[derive(Debug)]
pub struct CheckResult {
    pub word: String,
    pub in_vocabulary: bool,
    pub vocabulary_size: usize,
    pub decomposition: Decomposition,
}

/// Decompose `word` against an in-memory vocabulary
///
/// The word is lowercased and trimmed first, matching how vocabularies are built.
#[must_use]
pub fn check_word(word: &str, vocabulary: &Vocabulary) -> CheckResult {
    let word = word.trim().to_lowercase();
    let decomposition = decompose(&word, vocabulary);

    CheckResult {
        in_vocabulary: vocabulary.contains(&word),
        vocabulary_size: vocabulary.len(),
        decomposition,
        word,
    }
}

/// Load the vocabulary at `path` and decompose `word` against it
///
/// # Errors
///
/// Returns an error if the vocabulary file cannot be read.
pub fn check_word_in(
    word: &str,
    path: &Path,
    source: VocabularySource,
) -> Result<CheckResult, CorpusError> {
    let vocabulary = load_vocabulary(path, source)?;
    Ok(check_word(word, &vocabulary))
}
