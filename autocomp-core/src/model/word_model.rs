use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::counter::Counter;
use super::prediction::{Prediction, Query};
use crate::error::Result;
use crate::{io, tokenizer};

/// Represents an order-1 Markov chain over words.
///
/// The `WordModel` stores the corpus token sequence, the whole-corpus
/// frequency of every word and, for every word, the counts of the words
/// observed right after it.
///
/// # Responsibilities
/// - Build the unigram and bigram tables from a token sequence
/// - Complete a single prefix using whole-corpus frequencies
/// - Complete a partial word using the successors of the previous word
///
/// # Invariants
/// - `words_count.total()` equals the number of tokens
/// - A word has a `successors` entry only if it was followed at least once
/// - Nothing is mutated once the model is built
#[derive(Clone, Debug, Default)]
pub struct WordModel {
	/// Corpus name, when loaded from a file
	name: Option<String>,

	/// Tokens in corpus order
	words: Vec<String>,

	/// Whole-corpus occurrence counts
	words_count: Counter,

	/// Mapping from a word to the counts of its successors
	successors: HashMap<String, Counter>,
}

/// Summary of a trained model.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModelStats {
	pub name: Option<String>,
	/// Number of tokens in the corpus.
	pub tokens: usize,
	/// Number of distinct words.
	pub vocabulary: usize,
	/// Number of words followed by at least one other word.
	pub contexts: usize,
}

impl WordModel {
	/// Builds a model from a token sequence.
	///
	/// # Notes
	/// - Tokens are expected to be normalized already (see [`tokenizer`]).
	/// - With fewer than 2 tokens, no successor is recorded.
	pub fn build<I>(tokens: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		let words: Vec<String> = tokens.into_iter().map(Into::into).collect();
		let words_count: Counter = words.iter().collect();

		let mut successors: HashMap<String, Counter> = HashMap::new();
		for pair in words.windows(2) {
			let (first, second) = (&pair[0], &pair[1]);
			match successors.get_mut(first) {
				Some(counter) => counter.add(second),
				None => {
					let mut counter = Counter::new();
					counter.add(second);
					successors.insert(first.clone(), counter);
				}
			}
		}

		let model = Self { name: None, words, words_count, successors };
		info!(
			"Built word model: {} tokens, {} distinct words, {} contexts",
			model.words.len(),
			model.words_count.len(),
			model.successors.len()
		);
		model
	}

	/// Tokenizes `text` and builds a model from it.
	pub fn from_text(text: &str) -> Self {
		Self::build(tokenizer::tokens(text))
	}

	/// Reads a whole corpus from `reader` then builds a model from it.
	///
	/// # Errors
	/// Returns `Error::Io` if the stream cannot be read. No model is built
	/// from a partial read.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let text = io::read_corpus_from(reader)?;
		Ok(Self::from_text(&text))
	}

	/// Reads a corpus file then builds a model from it.
	///
	/// The model is named after the file (without directory and extension).
	///
	/// # Errors
	/// Returns `Error::Io` if the file cannot be opened or read.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let path = filepath.as_ref();
		let name = io::get_filename(path)?;
		info!("Loading corpus from {}", path.display());

		let text = io::read_corpus(path)?;
		let mut model = Self::from_text(&text);
		model.name = Some(name);
		Ok(model)
	}

	/// Predicts completions for an input line.
	///
	/// - A single word is completed against whole-corpus frequencies.
	/// - Otherwise, the last word is completed against the successors of
	///   the word before it. Earlier words are ignored.
	///
	/// Returns at most `limit` predictions, by descending count.
	///
	/// # Errors
	/// Returns `Error::InvalidInput` if the line holds no word.
	pub fn predict(&self, line: &str, limit: usize) -> Result<Vec<Prediction>> {
		let predictions = match Query::parse(line)? {
			Query::Word { prefix } => self.predict_word(prefix, limit),
			Query::NextWord { prev, partial } => self.predict_next_word(prev, partial, limit),
		};
		Ok(predictions)
	}

	/// Ranks the corpus words starting with `prefix`.
	pub fn predict_word(&self, prefix: &str, limit: usize) -> Vec<Prediction> {
		let predictions = self.words_count.rank(prefix, limit);
		debug!("Word query '{}': {} predictions", prefix, predictions.len());
		predictions
	}

	/// Ranks the words observed right after `prev` that start with `partial`.
	///
	/// Returns an empty list if `prev` was never followed by any word.
	pub fn predict_next_word(&self, prev: &str, partial: &str, limit: usize) -> Vec<Prediction> {
		let predictions = match self.successors.get(prev) {
			Some(counter) => counter.rank(partial, limit),
			None => Vec::new(),
		};
		debug!("Next word query '{}' '{}': {} predictions", prev, partial, predictions.len());
		predictions
	}

	/// Corpus name, if the model was loaded from a file.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Tokens in corpus order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Whole-corpus occurrence counts.
	pub fn unigrams(&self) -> &Counter {
		&self.words_count
	}

	/// Counts of the words observed right after `word`.
	pub fn successors(&self, word: &str) -> Option<&Counter> {
		self.successors.get(word)
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn stats(&self) -> ModelStats {
		ModelStats {
			name: self.name.clone(),
			tokens: self.words.len(),
			vocabulary: self.words_count.len(),
			contexts: self.successors.len(),
		}
	}
}
