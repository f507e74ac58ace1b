//! Corpus handling
//!
//! Turns free text into a vocabulary and moves vocabularies to and from
//! one-word-per-line listings.

pub mod loader;
pub mod tokenizer;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing corpus files
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub use loader::{from_lines, from_listing_lines, load_listing, load_text, write_listing};
