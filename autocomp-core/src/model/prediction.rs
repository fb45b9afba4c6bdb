use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A candidate completion and its observed frequency.
///
/// Depending on the query mode, `count` is either the whole-corpus
/// frequency of `word` or the number of times `word` followed the
/// previous word of the line.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prediction {
	pub word: String,
	pub count: usize,
}

impl Prediction {
	pub fn new(word: &str, count: usize) -> Self {
		Self { word: word.to_owned(), count }
	}
}

impl fmt::Display for Prediction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.word, self.count)
	}
}

/// A parsed prediction request.
///
/// # Variants
/// - `Word`: a single word, completed against whole-corpus frequencies.
/// - `NextWord`: the last two words of a line; `partial` is completed
///   against the words observed right after `prev`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
	Word { prefix: &'a str },
	NextWord { prev: &'a str, partial: &'a str },
}

impl<'a> Query<'a> {
	/// Parses an input line.
	///
	/// The line is split on whitespace and only its last two words are
	/// kept. Earlier words do not influence the prediction.
	///
	/// # Errors
	/// Returns `Error::InvalidInput` if the line holds no word.
	pub fn parse(line: &'a str) -> Result<Self> {
		let mut words = line.split_whitespace();
		let mut prev = None;
		let mut last = words.next().ok_or_else(|| Error::invalid_input("query line holds no word"))?;

		for word in words {
			prev = Some(last);
			last = word;
		}

		Ok(match prev {
			None => Query::Word { prefix: last },
			Some(prev) => Query::NextWord { prev, partial: last },
		})
	}
}

/// Converts a signed limit, as received from a user, into a result count.
///
/// # Errors
/// Returns `Error::InvalidInput` if `limit` is negative.
pub fn checked_limit(limit: i64) -> Result<usize> {
	usize::try_from(limit).map_err(|_| Error::invalid_input(format!("limit must not be negative, got {limit}")))
}
