use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole corpus file into memory.
///
/// - Invalid UTF-8 sequences are replaced, so they never form a token
/// - Fails if the file cannot be opened or read
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let bytes = fs::read(filename)?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a whole corpus from any byte stream.
pub fn read_corpus_from<R: Read>(mut reader: R) -> io::Result<String> {
	let mut bytes = Vec::new();
	reader.read_to_end(&mut bytes)?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/big.txt"` → `"big"`
/// - `"big.txt"` → `"big"`
pub fn get_filename<P: AsRef<Path>>(path: P) -> io::Result<String> {
	path.as_ref()
		.file_stem()
		.map(|s| s.to_string_lossy().into_owned())
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))
}
