//! Corpus conversion command
//!
//! Turns a plain text file into a sorted one-word-per-line listing.

use crate::corpus::{CorpusError, load_text, write_listing};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Result of converting a text file to a listing
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub unique_words: usize,
    pub total_tokens: usize,
    pub duration: Duration,
}

/// Read `input`, extract its vocabulary and write it to `output`
///
/// # Errors
///
/// Returns an error if `input` cannot be read or `output` cannot be written.
pub fn convert_corpus(input: &Path, output: &Path) -> Result<ConvertResult, CorpusError> {
    let start = Instant::now();

    let vocabulary = load_text(input)?;
    write_listing(&vocabulary, output)?;

    let total_tokens = vocabulary.words().map(|word| vocabulary.count(word)).sum();

    Ok(ConvertResult {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        unique_words: vocabulary.len(),
        total_tokens,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn converts_text_to_sorted_listing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("story.txt");
        let output = dir.path().join("corpus.txt");
        fs::write(&input, "The Queen said: \"Off with\n her head!\" The end.\n").unwrap();

        let result = convert_corpus(&input, &output).unwrap();

        assert_eq!(result.unique_words, 8);
        assert_eq!(result.total_tokens, 9);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "end\nhead\nher\noff\nqueen\nsaid\nthe\nwith\n"
        );
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = convert_corpus(&dir.path().join("nope.txt"), &dir.path().join("out.txt"));
        assert!(matches!(result, Err(CorpusError::Read { .. })));
    }
}
