//! Word-level n-gram text generation library.
//!
//! This crate provides a small n-gram pipeline:
//! - Tokenizing raw lines and tagging them with `<start>` / `<end>` sentinels
//! - Collecting the vocabulary of a corpus
//! - Indexing the continuations observed after every word, for each n
//! - Random-walk generation with degradation to shorter n-grams
//!
//! Randomness is injected through [`model::random::RandomSource`] so callers
//! can swap the thread RNG for a seeded or scripted source.

/// Core n-gram models and generation logic.
pub mod model;

/// Error types for corpus loading and generation.
pub mod error;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;
