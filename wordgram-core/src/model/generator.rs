use std::path::Path;

use log::{debug, trace, warn};

use super::corpus::Corpus;
use super::generation_input::{Degradation, GenerationInput};
use super::random::RandomSource;
use super::tokenizer::{END_TOKEN, START_TOKEN};
use super::word_index::{Continuation, WordIndex};
use crate::error::{CorpusError, GenerateError};

/// High-level generator owning a fully built `WordIndex`.
///
/// # Responsibilities
/// - Build the index from a corpus file or in-memory corpus, for n = 2..=max_n
/// - Hand out `GenerationInput`s preset to `max_n`
/// - Run random walks over the index
#[derive(Debug)]
pub struct Generator {
	index: WordIndex,
	max_n: usize,
}

impl Generator {
	/// Reads `filepath` and indexes it up to `max_n`.
	///
	/// # Errors
	/// Returns `CorpusError::InputUnavailable` if the file cannot be read.
	pub fn new<P: AsRef<Path>>(filepath: P, max_n: usize) -> Result<Self, CorpusError> {
		let corpus = Corpus::from_file(filepath)?;
		Ok(Self::from_corpus(&corpus, max_n))
	}

	pub fn from_corpus(corpus: &Corpus, max_n: usize) -> Self {
		let index = WordIndex::build(corpus, max_n);
		debug!(
			"built index over {} sequences, {} words, max n = {max_n}",
			corpus.sequences().len(),
			index.len()
		);
		Self { index, max_n }
	}

	pub fn index(&self) -> &WordIndex {
		&self.index
	}

	pub fn max_n(&self) -> usize {
		self.max_n
	}

	/// Creates a `GenerationInput` starting at `max_n`, from `<start>` to `<end>`.
	pub fn make_generation_input(&self) -> GenerationInput {
		GenerationInput::new(self.max_n)
	}

	/// Runs one walk over the owned index. See [`generate`].
	pub fn generate<R: RandomSource + ?Sized>(
		&self,
		input: &GenerationInput,
		rng: &mut R,
	) -> Result<String, GenerateError> {
		generate(&self.index, input, rng)
	}
}

/// Generates text by walking the continuations of `index`.
///
/// # Behavior
/// - Refuses immediately, without touching `rng`, when the seed has no
///   continuation at `input.n`.
/// - Each step looks up the last generated word at `input.n`, degrading per
///   `input.degradation` on empty lookups, and appends a uniformly chosen
///   continuation.
/// - Stops once the last token is the end cue.
/// - A `<start>` seed and an `<end>` cue are stripped from the result; the
///   remaining tokens are joined with single spaces.
///
/// # Errors
/// - `UnknownWord` if the seed (or a walked word) has no index entry
/// - `SeedHasNoContinuations` if the seed cannot start a walk at `input.n`
/// - `GenerationStalled` if no continuation exists at any tried n
/// - `StepLimitExceeded` if `input.max_steps()` is reached before the end cue
///
/// # Notes
/// Without a step limit the walk only ends when the end cue is sampled.
pub fn generate<R: RandomSource + ?Sized>(
	index: &WordIndex,
	input: &GenerationInput,
	rng: &mut R,
) -> Result<String, GenerateError> {
	let seed = input.seed();
	let end_cue = input.end_cue();

	if index.continuations(seed, input.n)?.is_empty() {
		warn!("seed {seed} has no continuation at n = {}", input.n);
		return Err(GenerateError::SeedHasNoContinuations(seed.to_owned()));
	}

	let mut generated = vec![seed.to_owned()];
	let mut steps = 0;

	while let Some(current) = generated.last().filter(|word| *word != end_cue) {
		let options = lookup(index, current, input.n, input.degradation)?;
		if options.is_empty() {
			warn!("no continuation after {current} from n = {}", input.n);
			return Err(GenerateError::GenerationStalled { word: current.clone() });
		}

		if let Some(limit) = input.max_steps() {
			if steps >= limit {
				return Err(GenerateError::StepLimitExceeded(limit));
			}
		}

		let chosen = &options[rng.choose(options.len())];
		trace!("{current} -> {}", chosen.join(" "));
		generated.extend(chosen.iter().cloned());
		steps += 1;
	}

	if seed == START_TOKEN && !generated.is_empty() {
		generated.remove(0);
	}
	if end_cue == END_TOKEN {
		generated.pop();
	}

	Ok(generated.join(" "))
}

/// Looks up the continuations of `word`, falling back to shorter orders
/// while the result is empty.
fn lookup<'a>(
	index: &'a WordIndex,
	word: &str,
	n: usize,
	degradation: Degradation,
) -> Result<&'a [Continuation], GenerateError> {
	let mut options = index.continuations(word, n)?;

	match degradation {
		Degradation::Countdown => {
			let mut lookup_n = n;
			while options.is_empty() && lookup_n > 2 {
				lookup_n -= 1;
				trace!("degrading {word} to n = {lookup_n}");
				options = index.continuations(word, lookup_n)?;
			}
		}
		Degradation::Legacy => {
			// A single retry at n - 1; going further would repeat the same lookup
			if options.is_empty() && n > 2 {
				trace!("degrading {word} to n = {}", n - 1);
				options = index.continuations(word, n - 1)?;
			}
		}
	}

	Ok(options)
}
