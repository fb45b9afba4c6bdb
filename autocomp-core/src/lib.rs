//! Word prediction from a unigram/bigram model.
//!
//! This crate provides the building blocks of a word completion system:
//! - A tokenizer turning raw corpus text into lowercase word tokens
//! - A word model counting unigrams and bigram successors
//! - Prefix ranking, either on whole-corpus frequency or on the successors
//!   of the previous word
//! - Corpus loading helpers
//!
//! ```
//! use autocomp_core::model::word_model::WordModel;
//!
//! let model = WordModel::from_text("short text for short test for you");
//! let predictions = model.predict("sh", 5).unwrap();
//! assert_eq!(predictions[0].word, "short");
//! assert_eq!(predictions[0].count, 2);
//! ```

/// Word model construction and prediction queries.
pub mod model;

/// Corpus tokenization.
pub mod tokenizer;

/// Corpus I/O utilities (file loading, path helpers).
pub mod io;

/// Crate-wide error type.
pub mod error;

pub use error::{Error, Result};
