use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{info, warn};
use wordgram_core::model::generation_input::{Degradation, GenerationInput};
use wordgram_core::model::generator::Generator;
use wordgram_core::model::random::{RandomSource, SeededRandom, ThreadRandom};

/// Generate text from a word n-gram model built over a corpus.
#[derive(Parser, Debug)]
#[command(name = "wordgram")]
#[command(version)]
struct Cli {
	/// Text file with newline breaks between sections
	#[arg(short, long, alias = "input_file")]
	input_file: PathBuf,

	/// Maximum n-gram length, also the n generation starts from
	#[arg(short = 'n', long, alias = "ngram_length")]
	ngram_length: usize,

	/// Number of texts to generate
	#[arg(long, default_value_t = 1)]
	count: usize,

	/// Seed the random generator for reproducible output
	#[arg(long)]
	rng_seed: Option<u64>,

	/// Give up after this many appended continuations
	#[arg(long)]
	max_steps: Option<usize>,

	/// Fallback to shorter n-grams on empty lookups
	#[arg(long, value_enum, default_value_t = DegradationArg::Countdown)]
	degradation: DegradationArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DegradationArg {
	/// Retry at n-1, n-2, ... down to 2
	Countdown,
	/// Retry at n-1 only
	Legacy,
}

impl From<DegradationArg> for Degradation {
	fn from(arg: DegradationArg) -> Self {
		match arg {
			DegradationArg::Countdown => Degradation::Countdown,
			DegradationArg::Legacy => Degradation::Legacy,
		}
	}
}

impl Cli {
	fn generation_input(&self, generator: &Generator) -> Result<GenerationInput, String> {
		let mut input = generator.make_generation_input();
		input.degradation = self.degradation.into();
		input.set_max_steps(self.max_steps)?;
		Ok(input)
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let cli = Cli::parse();

	let generator = Generator::new(&cli.input_file, cli.ngram_length)?;
	info!(
		"loaded {} words from {}",
		generator.index().len(),
		cli.input_file.display()
	);

	let input = cli.generation_input(&generator)?;
	let mut rng: Box<dyn RandomSource> = match cli.rng_seed {
		Some(seed) => Box::new(SeededRandom::new(seed)),
		None => Box::new(ThreadRandom),
	};

	for _ in 0..cli.count {
		// Refusals and stalls are reported, not fatal
		match generator.generate(&input, rng.as_mut()) {
			Ok(text) => println!("{text}"),
			Err(e) => {
				warn!("generation failed: {e:?}");
				println!("{e}");
			}
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_required_options() {
		let cli = Cli::try_parse_from(["wordgram", "-i", "corpus.txt", "-n", "3"]).unwrap();
		assert_eq!(cli.input_file, PathBuf::from("corpus.txt"));
		assert_eq!(cli.ngram_length, 3);
		assert_eq!(cli.count, 1);
		assert!(cli.rng_seed.is_none());
		assert!(matches!(cli.degradation, DegradationArg::Countdown));
	}

	#[test]
	fn parses_long_options() {
		let cli = Cli::try_parse_from([
			"wordgram",
			"--input-file",
			"corpus.txt",
			"--ngram-length",
			"4",
			"--count",
			"5",
			"--rng-seed",
			"9",
			"--max-steps",
			"100",
			"--degradation",
			"legacy",
		])
		.unwrap();
		assert_eq!(cli.count, 5);
		assert_eq!(cli.rng_seed, Some(9));
		assert_eq!(cli.max_steps, Some(100));
		assert!(matches!(cli.degradation, DegradationArg::Legacy));
	}

	#[test]
	fn input_and_length_are_required() {
		assert!(Cli::try_parse_from(["wordgram", "-n", "2"]).is_err());
		assert!(Cli::try_parse_from(["wordgram", "-i", "corpus.txt"]).is_err());
	}

	#[test]
	fn zero_step_limit_is_rejected() {
		let cli = Cli::try_parse_from(["wordgram", "-i", "c.txt", "-n", "2", "--max-steps", "0"]).unwrap();
		let generator = Generator::from_corpus(
			&wordgram_core::model::corpus::Corpus::from_lines(&["a b"]),
			cli.ngram_length,
		);
		assert!(cli.generation_input(&generator).is_err());
	}
}
