use super::tokenizer::{END_TOKEN, START_TOKEN};

/// How the walk falls back to shorter n-grams when a lookup comes back empty.
///
/// # Variants
/// - `Countdown`: retry at `n - 1`, `n - 2`, ... down to 2.
/// - `Legacy`: retry once at `n - 1` only. Deeper orders are never tried,
///   so data that only exists below `n - 1` stalls the walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Degradation {
	#[default]
	Countdown,
	Legacy,
}

/// Parameters of a single generation call.
///
/// # Invariants
/// - `seed` and `end_cue` are never empty
/// - `max_steps`, when set, is at least 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Order used for the first lookup of every step.
	pub n: usize,

	/// Fallback policy on empty lookups.
	pub degradation: Degradation,

	/// First token of the walk.
	seed: String,

	/// Token that ends the walk.
	end_cue: String,

	/// Maximum number of continuations appended before giving up.
	max_steps: Option<usize>,
}

impl GenerationInput {
	/// Starts at `<start>`, stops at `<end>`, no step limit.
	pub fn new(n: usize) -> Self {
		Self {
			n,
			degradation: Degradation::default(),
			seed: START_TOKEN.to_owned(),
			end_cue: END_TOKEN.to_owned(),
			max_steps: None,
		}
	}

	pub fn seed(&self) -> &str {
		&self.seed
	}

	pub fn end_cue(&self) -> &str {
		&self.end_cue
	}

	pub fn max_steps(&self) -> Option<usize> {
		self.max_steps
	}

	/// Sets the starting word.
	///
	/// # Errors
	/// Returns an error if `seed` is empty.
	pub fn set_seed(&mut self, seed: &str) -> Result<(), String> {
		if seed.is_empty() {
			return Err("Seed cannot be empty".to_owned());
		}
		self.seed = seed.to_owned();
		Ok(())
	}

	/// Sets the token that terminates the walk.
	///
	/// # Errors
	/// Returns an error if `end_cue` is empty.
	pub fn set_end_cue(&mut self, end_cue: &str) -> Result<(), String> {
		if end_cue.is_empty() {
			return Err("End cue cannot be empty".to_owned());
		}
		self.end_cue = end_cue.to_owned();
		Ok(())
	}

	/// Bounds the walk to `max_steps` appended continuations, or lifts the
	/// bound with `None`.
	///
	/// # Errors
	/// Returns an error for `Some(0)`.
	pub fn set_max_steps(&mut self, max_steps: Option<usize>) -> Result<(), String> {
		if max_steps == Some(0) {
			return Err("Step limit must be at least 1".to_owned());
		}
		self.max_steps = max_steps;
		Ok(())
	}
}
