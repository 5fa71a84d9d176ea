// ---------------------------------------------------------------------------
// Embedder -- bag-of-words term-frequency vectors
// ---------------------------------------------------------------------------
//
// Stands in for a learned embedding: a text becomes a sparse map from
// normalized token to occurrence count.
// ---------------------------------------------------------------------------

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Sparse term-frequency vector. Absent keys count as zero.
pub type TermVector = HashMap<String, u32>;

/// Tokens of this many characters or fewer are dropped.
pub const SHORT_TOKEN_CHARS: usize = 2;

fn word_regex() -> &'static Regex {
	static WORD: OnceLock<Regex> = OnceLock::new();
	WORD.get_or_init(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"))
}

/// Split text into lowercased word-character runs longer than two chars.
///
/// `_` counts as a word character, so `book_overview` stays one token.
pub fn tokenize(text: &str) -> Vec<String> {
	let lower = text.to_lowercase();
	word_regex()
		.find_iter(&lower)
		.map(|m| m.as_str())
		.filter(|t| t.chars().count() > SHORT_TOKEN_CHARS)
		.map(|t| t.to_string())
		.collect()
}

/// Convert text into a term-frequency vector. Empty text yields an empty map.
pub fn embed(text: &str) -> TermVector {
	let mut vector = TermVector::new();
	for token in tokenize(text) {
		*vector.entry(token).or_insert(0) += 1;
	}
	vector
}
