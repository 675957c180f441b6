/// Sentinel prepended to every tagged sequence.
pub const START_TOKEN: &str = "<start>";

/// Sentinel appended to every tagged sequence.
pub const END_TOKEN: &str = "<end>";

/// One line of input as an ordered list of word tokens.
pub type Sequence = Vec<String>;

/// Splits each line on whitespace.
///
/// No quoting or escaping is applied. Empty lines yield empty sequences.
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Vec<Sequence> {
	lines
		.iter()
		.map(|line| line.as_ref().split_whitespace().map(str::to_owned).collect())
		.collect()
}

/// Wraps every sequence with `START_TOKEN` and `END_TOKEN`.
pub fn tag_boundaries(sequences: Vec<Sequence>) -> Vec<Sequence> {
	sequences
		.into_iter()
		.map(|tokens| {
			let mut tagged = Vec::with_capacity(tokens.len() + 2);
			tagged.push(START_TOKEN.to_owned());
			tagged.extend(tokens);
			tagged.push(END_TOKEN.to_owned());
			tagged
		})
		.collect()
}
