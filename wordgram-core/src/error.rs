use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
	/// The input file is missing or unreadable.
	#[error("cannot read input file {path}: {source}")]
	InputUnavailable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Outcomes of a generation call that did not produce text.
///
/// None of these are fatal: the caller may retry with other parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
	/// The seed has no recorded continuation at the requested n.
	#[error("Cannot generate with starting seed {0}.")]
	SeedHasNoContinuations(String),

	/// A word was looked up that the index has never seen.
	#[error("Word {0} is not in the vocabulary")]
	UnknownWord(String),

	/// No continuation was found for `word` at any tried n.
	#[error("Error: generation stalled after {word}")]
	GenerationStalled { word: String },

	/// The walk appended more continuations than allowed.
	#[error("Error: step limit of {0} exceeded")]
	StepLimitExceeded(usize),
}
