//! Top-level module for the word prediction system.
//!
//! This module provides an order-1 word Markov chain, including:
//! - Frequency counters with prefix ranking (`Counter`)
//! - Ranked completions and query parsing (`Prediction`, `Query`)
//! - The trained unigram/bigram model (`WordModel`)

/// Word frequency counter.
///
/// Accumulates occurrences during construction and ranks the words
/// starting with a given prefix by descending count.
pub mod counter;

/// Prediction results and query line parsing.
///
/// Splits an input line into either a single prefix (whole-corpus mode)
/// or a previous word and a partial word (context-aware mode).
pub mod prediction;

/// Unigram/bigram word model.
///
/// Built once from a token sequence, then answers prediction queries
/// without further mutation.
pub mod word_model;
