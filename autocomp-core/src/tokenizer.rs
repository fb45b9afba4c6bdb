use std::sync::LazyLock;

use regex::Regex;

/// Pattern of a single word: letters, apostrophes and hyphens, optionally
/// bounded by a single quote on either side.
pub const WORD_PATTERN: &str = r"'?[A-Za-z'-]+'?";

// Constant pattern, compiling it cannot fail
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(WORD_PATTERN).expect("valid word pattern"));

/// Splits raw corpus text into lowercase word tokens.
///
/// Every maximal match of [`WORD_PATTERN`] becomes one token. Anything else
/// (digits, punctuation, whitespace, non-ASCII letters) separates tokens and
/// is dropped. Tokens keep corpus order and duplicates are retained.
///
/// ```
/// use autocomp_core::tokenizer::tokenize;
///
/// assert_eq!(tokenize("Don't stop, 2 well-known words!"), ["don't", "stop", "well-known", "words"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
	tokens(text).collect()
}

/// Lazy variant of [`tokenize`].
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
	WORD_REGEX.find_iter(text).map(|m| m.as_str().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_input_has_no_tokens() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("  123 ... !? ").is_empty());
	}

	#[test]
	fn tokens_are_lowercased_in_order() {
		assert_eq!(tokenize("Short TEXT for short"), ["short", "text", "for", "short"]);
	}

	#[test]
	fn digits_and_punctuation_separate_words() {
		assert_eq!(tokenize("abc1def,ghi.jkl"), ["abc", "def", "ghi", "jkl"]);
	}

	#[test]
	fn apostrophes_and_hyphens_stay_inside_words() {
		assert_eq!(tokenize("it's a re-run"), ["it's", "a", "re-run"]);
	}

	#[test]
	fn surrounding_quotes_are_part_of_the_match() {
		assert_eq!(tokenize("say 'hello' now"), ["say", "'hello'", "now"]);
	}

	#[test]
	fn non_ascii_letters_are_separators() {
		assert_eq!(tokenize("café naïve"), ["caf", "na", "ve"]);
	}
}
