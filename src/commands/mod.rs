//! Command implementations

pub mod check;
pub mod convert;
pub mod find;
pub mod statistics;

pub use check::{CheckResult, check_word, check_word_in};
pub use convert::{ConvertResult, convert_corpus};
pub use find::{FindConfig, FindResult, VocabularySource, find_madison_words, load_vocabulary};
pub use statistics::{MadisonEntry, MadisonStatistics, madison_ratio, sample_entries};
