use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CorpusError;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Strips trailing whitespace from every line
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, CorpusError> {
	let path = filename.as_ref();
	let unavailable = |source: std::io::Error| CorpusError::InputUnavailable { path: path.to_path_buf(), source };

	let mut contents = String::new();
	File::open(path)
		.map_err(unavailable)?
		.read_to_string(&mut contents)
		.map_err(unavailable)?;

	Ok(contents.lines().map(|line| line.trim_end().to_owned()).collect())
}
