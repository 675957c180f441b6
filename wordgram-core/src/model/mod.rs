//! Top-level module for the word n-gram pipeline.
//!
//! - Tokenizing and boundary tagging (`tokenizer`)
//! - Tagged corpora loaded from files or lines (`Corpus`)
//! - Vocabulary collection (`Vocabulary`)
//! - Per-word continuation index (`WordIndex`)
//! - Injectable randomness (`RandomSource`)
//! - Generation parameters (`GenerationInput`)
//! - The random walk itself (`Generator`, `generate`)

/// Whitespace tokenizer and `<start>` / `<end>` sentinels.
pub mod tokenizer;

/// Tokenized, boundary-tagged corpus.
pub mod corpus;

/// Set of distinct tokens of a corpus.
pub mod vocabulary;

/// Word → n → continuations index, rebuilt one order at a time.
pub mod word_index;

/// Randomness sources used by the generator.
///
/// Thread RNG for normal use, seeded RNG for reproducible runs.
pub mod random;

/// Generation parameters: order, seed, end cue, degradation, step limit.
pub mod generation_input;

/// High-level generator and the random walk.
pub mod generator;
