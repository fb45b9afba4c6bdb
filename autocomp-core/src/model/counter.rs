use std::collections::HashMap;
use std::collections::hash_map::Iter;

use super::prediction::Prediction;

/// Occurrence counts of words.
///
/// A `Counter` is used both for whole-corpus unigram counts and for the
/// successors of a single word. Conceptually, for a successor counter,
/// this is a node of a Markov chain where outgoing edges are weighted by
/// their number of observations.
///
/// ## Invariants
/// - Each stored count is strictly positive
/// - Counts only grow while the owning model is being built
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counter {
	/// Example: { "short" => 2, "text" => 1 }
	counts: HashMap<String, usize>,
}

impl Counter {
	/// Creates an empty counter.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `word`.
	pub(crate) fn add(&mut self, word: &str) {
		match self.counts.get_mut(word) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(word.to_owned(), 1);
			}
		}
	}

	/// Number of occurrences of `word`, 0 if it was never seen.
	pub fn get(&self, word: &str) -> usize {
		self.counts.get(word).copied().unwrap_or(0)
	}

	pub fn contains(&self, word: &str) -> bool {
		self.counts.contains_key(word)
	}

	/// Sum of all occurrence counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	pub fn iter(&self) -> Iter<'_, String, usize> {
		self.counts.iter()
	}

	/// Ranks the words starting with `prefix`.
	///
	/// The match is a literal, case-sensitive prefix test, so callers should
	/// lowercase their prefix to match the stored tokens.
	///
	/// This method performs:
	/// - an O(n) scan over the words
	/// - a sort of the matches by descending count, ties ordered alphabetically
	/// - a truncation to at most `limit` results
	///
	/// Returns an empty list if `limit` is 0 or nothing matches.
	pub fn rank(&self, prefix: &str, limit: usize) -> Vec<Prediction> {
		if limit == 0 {
			return Vec::new();
		}

		let mut predictions: Vec<Prediction> = self
			.counts
			.iter()
			.filter(|(word, _)| word.starts_with(prefix))
			.map(|(word, count)| Prediction::new(word, *count))
			.collect();

		predictions.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
		predictions.truncate(limit);
		predictions
	}
}

impl<'a> IntoIterator for &'a Counter {
	type Item = (&'a String, &'a usize);
	type IntoIter = Iter<'a, String, usize>;

	fn into_iter(self) -> Self::IntoIter {
		self.counts.iter()
	}
}

/// Counts every word yielded by the iterator.
impl<S: AsRef<str>> FromIterator<S> for Counter {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut counter = Counter::new();
		for word in iter {
			counter.add(word.as_ref());
		}
		counter
	}
}
