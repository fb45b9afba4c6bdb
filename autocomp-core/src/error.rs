use std::io;

/// Errors returned by model construction and prediction queries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The query could not be interpreted (empty line, negative limit).
	#[error("invalid input: {0}")]
	InvalidInput(String),

	/// The corpus could not be read.
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	pub(crate) fn invalid_input<S: Into<String>>(message: S) -> Self {
		Error::InvalidInput(message.into())
	}
}
