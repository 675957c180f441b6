use std::path::Path;

use log::debug;

use super::tokenizer::{tag_boundaries, tokenize, Sequence};
use super::vocabulary::Vocabulary;
use crate::error::CorpusError;
use crate::io::read_lines;

/// A tokenized, boundary-tagged body of text.
///
/// Every sequence starts with `<start>` and ends with `<end>`. The corpus is
/// built once and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
	sequences: Vec<Sequence>,
}

impl Corpus {
	/// Loads a corpus from a newline-delimited text file.
	///
	/// # Errors
	/// Returns `CorpusError::InputUnavailable` if the file cannot be read.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, CorpusError> {
		let lines = read_lines(&filepath)?;
		debug!("read {} lines from {}", lines.len(), filepath.as_ref().display());
		Ok(Self::from_lines(&lines))
	}

	/// Tokenizes and tags in-memory lines.
	///
	/// Lines are expected to be stripped of their line ending already.
	pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
		Self { sequences: tag_boundaries(tokenize(lines)) }
	}

	pub fn sequences(&self) -> &[Sequence] {
		&self.sequences
	}

	/// Distinct tokens across all sequences.
	pub fn vocabulary(&self) -> Vocabulary {
		Vocabulary::from_sequences(&self.sequences)
	}
}
