//! Core domain types for madison word search
//!
//! Plain data types shared by the loader, the decomposer and the reporting layer.

mod decomposition;
mod madison_words;
mod vocabulary;

pub use decomposition::Decomposition;
pub use madison_words::MadisonWords;
pub use vocabulary::Vocabulary;
