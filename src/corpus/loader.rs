//! Vocabulary loading utilities
//!
//! Builds a [`Vocabulary`] from free text or from a previously written
//! one-word-per-line listing, and writes such listings.

use super::CorpusError;
use super::tokenizer::tokens;
use crate::core::Vocabulary;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Build a vocabulary from raw text lines
///
/// Empty input yields an empty vocabulary.
///
/// # Examples
/// ```
/// use madison_words::corpus::loader::from_lines;
///
/// let vocabulary = from_lines(["Down the Rabbit-Hole", "down, down, down."]);
/// assert_eq!(vocabulary.len(), 4);
/// assert_eq!(vocabulary.count("down"), 4);
/// ```
pub fn from_lines<I, S>(lines: I) -> Vocabulary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .flat_map(|line| tokens(line.as_ref()))
        .collect()
}

/// Build a vocabulary from listing lines, one word per line
///
/// Lines are trimmed and lowercased but otherwise taken as-is. Blank lines are
/// skipped. Every listed word gets a count of 1, however often it repeats.
pub fn from_listing_lines<I, S>(lines: I) -> Vocabulary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut vocabulary = Vocabulary::new();
    for line in lines {
        let word = line.as_ref().trim().to_lowercase();
        if !word.is_empty() {
            vocabulary.insert_listed(word);
        }
    }
    vocabulary
}

/// Load a vocabulary from a plain text file
///
/// # Errors
///
/// Returns [`CorpusError::Read`] if the file cannot be opened or is not valid UTF-8.
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<Vocabulary, CorpusError> {
    let path = path.as_ref();
    let content = read(path)?;
    let vocabulary = from_lines(content.lines());

    info!(path = %path.display(), words = vocabulary.len(), "loaded text corpus");
    Ok(vocabulary)
}

/// Load a vocabulary from a one-word-per-line listing
///
/// # Errors
///
/// Returns [`CorpusError::Read`] if the file cannot be opened or is not valid UTF-8.
pub fn load_listing<P: AsRef<Path>>(path: P) -> Result<Vocabulary, CorpusError> {
    let path = path.as_ref();
    let content = read(path)?;
    let vocabulary = from_listing_lines(content.lines());

    info!(path = %path.display(), words = vocabulary.len(), "loaded word listing");
    Ok(vocabulary)
}

/// Write the vocabulary's words to `path`, sorted, one per line
///
/// # Errors
///
/// Returns [`CorpusError::Write`] if the file cannot be created or written.
pub fn write_listing<P: AsRef<Path>>(vocabulary: &Vocabulary, path: P) -> Result<(), CorpusError> {
    write_words(vocabulary.sorted_words(), path)
}

/// Write words to `path` in the given order, one per line
///
/// # Errors
///
/// Returns [`CorpusError::Write`] if the file cannot be created or written.
pub fn write_words<'a, I, P>(words: I, path: P) -> Result<(), CorpusError>
where
    I: IntoIterator<Item = &'a str>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let write_error = |source| CorpusError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(write_error)?;
    let mut out = BufWriter::new(file);
    let mut written = 0usize;
    for word in words {
        writeln!(out, "{word}").map_err(write_error)?;
        written += 1;
    }
    out.flush().map_err(write_error)?;

    debug!(path = %path.display(), written, "wrote word listing");
    Ok(())
}

fn read(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })
}
