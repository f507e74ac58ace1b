//! Madison decomposition
//!
//! Single-word decomposition and the parallel search over a vocabulary.

mod aggregate;
mod engine;

pub use aggregate::{aggregate, aggregate_with};
pub use engine::decompose;
