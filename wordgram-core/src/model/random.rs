use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform choices made during generation.
///
/// Generation only ever needs "pick one of `len` options", which keeps
/// deterministic stubs trivial to write.
pub trait RandomSource {
	/// Returns an index in `0..len`. Never called with `len == 0`.
	fn choose(&mut self, len: usize) -> usize;
}

/// Uses the thread-local RNG (`rand::rng()`).
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
	fn choose(&mut self, len: usize) -> usize {
		rand::rng().random_range(0..len)
	}
}

/// Reproducible source backed by a seeded `StdRng`.
#[derive(Clone, Debug)]
pub struct SeededRandom {
	rng: StdRng,
}

impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}
}

impl RandomSource for SeededRandom {
	fn choose(&mut self, len: usize) -> usize {
		self.rng.random_range(0..len)
	}
}
