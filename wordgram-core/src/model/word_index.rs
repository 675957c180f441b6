use std::collections::HashMap;

use log::debug;

use super::corpus::Corpus;
use super::tokenizer::Sequence;
use super::vocabulary::Vocabulary;
use crate::error::GenerateError;

/// The n-1 tokens that followed a word in an observed n-gram.
pub type Continuation = Vec<String>;

/// Maps every word to the continuations observed after it, per n.
///
/// # Responsibilities
/// - Hold one entry per vocabulary word, even if it never has a continuation
/// - Rebuild the continuations of a given n from the tagged sequences
/// - Answer lookups for the generator
///
/// # Invariants
/// - Every word of every indexed sequence has an entry
/// - Continuations stored under `n` have exactly `n - 1` tokens
/// - Continuations are kept in insertion order and never deduplicated,
///   so uniform sampling over the list is frequency-weighted
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordIndex {
	entries: HashMap<String, HashMap<usize, Vec<Continuation>>>,
}

impl WordIndex {
	/// Creates an index with an empty entry for every vocabulary word.
	pub fn new(vocabulary: &Vocabulary) -> Self {
		let entries = vocabulary.iter().map(|word| (word.to_owned(), HashMap::new())).collect();
		Self { entries }
	}

	/// Seeds the index from the corpus vocabulary and indexes every n from
	/// `max_n` down to 2.
	pub fn build(corpus: &Corpus, max_n: usize) -> Self {
		let mut index = Self::new(&corpus.vocabulary());
		for n in (2..=max_n).rev() {
			index.index(corpus.sequences(), n);
		}
		index
	}

	/// Rebuilds the continuations of order `n` from `sequences`.
	///
	/// # Behavior
	/// - `n < 2` is a no-op.
	/// - Every known word has its `n` entry reset first, so calling this twice
	///   with the same input leaves the same contents.
	/// - Sequences shorter than `n` contribute nothing.
	///
	/// Returns the index so calls can be chained for decreasing `n`.
	pub fn index(&mut self, sequences: &[Sequence], n: usize) -> &mut Self {
		if n < 2 {
			return self;
		}

		for orders in self.entries.values_mut() {
			orders.insert(n, Vec::new());
		}

		let mut recorded = 0;
		for tokens in sequences {
			// Each window of n tokens: the first is the word, the rest its continuation
			for window in tokens.windows(n) {
				let continuations = self
					.entries
					.entry(window[0].clone())
					.or_default()
					.entry(n)
					.or_default();
				continuations.push(window[1..].to_vec());
				recorded += 1;
			}
		}

		debug!("indexed {recorded} continuations for n = {n}");
		self
	}

	/// Returns the continuations recorded after `word` for order `n`.
	///
	/// An order that was never indexed reads as empty.
	///
	/// # Errors
	/// Returns `GenerateError::UnknownWord` if `word` has no entry.
	pub fn continuations(&self, word: &str, n: usize) -> Result<&[Continuation], GenerateError> {
		let orders = self
			.entries
			.get(word)
			.ok_or_else(|| GenerateError::UnknownWord(word.to_owned()))?;
		Ok(orders.get(&n).map(Vec::as_slice).unwrap_or_default())
	}

	pub fn contains(&self, word: &str) -> bool {
		self.entries.contains_key(word)
	}

	/// Number of words with an entry.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn sample_corpus() -> Corpus {
		Corpus::from_lines(&["the cat sat", "the dog ran"])
	}

	#[test]
	fn records_continuations_in_insertion_order() {
		let index = WordIndex::build(&sample_corpus(), 2);
		assert_eq!(index.continuations("the", 2).unwrap(), &[vec!["cat"], vec!["dog"]]);
		assert_eq!(index.continuations("<start>", 2).unwrap(), &[vec!["the"], vec!["the"]]);
		assert!(index.continuations("<end>", 2).unwrap().is_empty());
	}

	#[test]
	fn higher_orders_record_longer_continuations() {
		let index = WordIndex::build(&sample_corpus(), 3);
		assert_eq!(
			index.continuations("<start>", 3).unwrap(),
			&[vec!["the", "cat"], vec!["the", "dog"]]
		);
		assert!(index.continuations("ran", 3).unwrap().is_empty());
		assert_eq!(index.continuations("ran", 2).unwrap(), &[vec!["<end>"]]);
	}

	#[test]
	fn sequences_shorter_than_n_contribute_nothing() {
		let corpus = Corpus::from_lines(&["hi"]);
		let index = WordIndex::build(&corpus, 4);
		for word in ["<start>", "hi", "<end>"] {
			assert!(index.continuations(word, 4).unwrap().is_empty());
		}
		assert_eq!(index.continuations("<start>", 3).unwrap(), &[vec!["hi", "<end>"]]);
	}

	#[test]
	fn order_below_two_is_a_noop() {
		let corpus = sample_corpus();
		let mut index = WordIndex::new(&corpus.vocabulary());
		let before = index.clone();
		index.index(corpus.sequences(), 1).index(corpus.sequences(), 0);
		assert_eq!(index, before);
	}

	#[test]
	fn every_word_is_addressable() {
		let corpus = sample_corpus();
		let index = WordIndex::build(&corpus, 6);
		for word in corpus.vocabulary().iter() {
			assert!(index.contains(word));
			assert!(index.continuations(word, 6).unwrap().is_empty());
		}
		assert_eq!(index.len(), corpus.vocabulary().len());
	}

	#[test]
	fn unknown_word_is_an_error() {
		let index = WordIndex::build(&sample_corpus(), 2);
		assert_eq!(
			index.continuations("bird", 2),
			Err(GenerateError::UnknownWord("bird".to_owned()))
		);
	}

	#[test]
	fn unseeded_words_are_inserted() {
		let corpus = sample_corpus();
		let mut index = WordIndex::default();
		index.index(corpus.sequences(), 2);
		assert_eq!(index.continuations("the", 2).unwrap(), &[vec!["cat"], vec!["dog"]]);
		assert!(!index.contains("<end>"));
	}

	fn corpus_lines() -> impl Strategy<Value = Vec<String>> {
		prop::collection::vec(
			prop::collection::vec("[a-d]", 0..8).prop_map(|words| words.join(" ")),
			0..6,
		)
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(64))]

		#[test]
		fn continuations_follow_their_word(lines in corpus_lines(), n in 2usize..6) {
			let corpus = Corpus::from_lines(&lines);
			let index = WordIndex::build(&corpus, n);

			for word in corpus.vocabulary().iter() {
				for continuation in index.continuations(word, n).unwrap() {
					prop_assert_eq!(continuation.len(), n - 1);
					let observed = corpus.sequences().iter().any(|tokens| {
						tokens.windows(n).any(|w| w[0] == word && w[1..] == continuation[..])
					});
					prop_assert!(observed, "{} -> {:?} never observed", word, continuation);
				}
			}
		}

		#[test]
		fn reindexing_is_idempotent(lines in corpus_lines(), n in 2usize..6) {
			let corpus = Corpus::from_lines(&lines);
			let mut index = WordIndex::build(&corpus, n);
			let once = index.clone();
			index.index(corpus.sequences(), n);
			prop_assert_eq!(index, once);
		}
	}
}
