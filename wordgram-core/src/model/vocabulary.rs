use std::collections::HashSet;

use super::tokenizer::Sequence;

/// Set of distinct tokens appearing across a corpus, sentinels included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
	words: HashSet<String>,
}

impl Vocabulary {
	/// Collects every token of every sequence.
	pub fn from_sequences(sequences: &[Sequence]) -> Self {
		let words = sequences.iter().flatten().cloned().collect();
		Self { words }
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}
}
