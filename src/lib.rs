//! Madison Words
//!
//! Finds words that split into strictly shorter dictionary words, such as
//! "baseball" = "base" + "ball", across the vocabulary of a text corpus.
//!
//! # Quick Start
//!
//! ```rust
//! use madison_words::corpus::from_lines;
//! use madison_words::decomposer::{aggregate, decompose};
//!
//! let vocabulary = from_lines(["A base ball hit the baseball into the sea."]);
//!
//! let result = decompose("baseball", &vocabulary);
//! assert_eq!(result.witness(), ["base", "ball"]);
//!
//! let madison = aggregate(&vocabulary);
//! assert!(madison.contains("baseball"));
//! ```

// Core domain types
pub mod core;

// Vocabulary loading
pub mod corpus;

// Decomposition algorithm
pub mod decomposer;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
