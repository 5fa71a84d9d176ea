// ---------------------------------------------------------------------------
// Keyword tables and fixed responses
// ---------------------------------------------------------------------------
//
// Every trigger phrase the query pipeline reacts to lives here, next to the
// response it selects.
// ---------------------------------------------------------------------------

/// How a trigger phrase is compared against the lower-cased query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
	/// The phrase must appear as a whole word of the query.
	Word,
	/// The phrase may appear anywhere in the query.
	Substring,
}

/// Fixed answers that bypass retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortCircuit {
	Greeting,
	ChapterCount,
}

impl ShortCircuit {
	pub fn response(self) -> &'static str {
		match self {
			Self::Greeting => GREETING_RESPONSE,
			Self::ChapterCount => CHAPTER_COUNT_RESPONSE,
		}
	}
}

#[derive(Debug, Clone, Copy)]
pub struct ShortCircuitRule {
	pub kind: ShortCircuit,
	pub mode: MatchMode,
	pub phrases: &'static [&'static str],
}

/// Checked in order; the first matching rule answers the query.
pub const SHORT_CIRCUIT_RULES: &[ShortCircuitRule] = &[
	ShortCircuitRule {
		kind: ShortCircuit::Greeting,
		mode: MatchMode::Word,
		phrases: &["hello", "hi", "hey", "greetings"],
	},
	ShortCircuitRule {
		kind: ShortCircuit::ChapterCount,
		mode: MatchMode::Substring,
		phrases: &["how many chapters", "chapters", "number of chapters", "chapter count"],
	},
];

/// A meta-question about the book itself. When it matches, a curated answer
/// wins over passage extraction; `preferred_category` picks which one.
#[derive(Debug, Clone, Copy)]
pub struct MetaQuestionRule {
	pub phrases: &'static [&'static str],
	pub preferred_category: &'static str,
}

pub const META_QUESTION_RULES: &[MetaQuestionRule] = &[
	MetaQuestionRule {
		phrases: &["intro", "introduction"],
		preferred_category: "book_intro",
	},
	MetaQuestionRule {
		phrases: &["about this book", "what is this book"],
		preferred_category: "book_overview",
	},
	MetaQuestionRule {
		phrases: &["topics", "chapters"],
		preferred_category: "book_topics",
	},
];

/// Query words that mark a chapter-count question during passage extraction.
pub const CHAPTER_QUERY_CUES: &[&str] = &["chapters", "chapter", "how many"];

/// A paragraph answers a chapter-count question when it contains this word...
pub const CHAPTER_COUNT_WORD: &str = "six";
/// ...and one of these.
pub const CHAPTER_PARAGRAPH_CUES: &[&str] = &["chapter", "chapters", "six comprehensive"];

pub const GUIDANCE_RESPONSE: &str = "Please ask a question about the humanoid robotics book.";

pub const GREETING_RESPONSE: &str = "Hello! I'm a RAG chatbot specialized in the Humanoid Robotics Book. \
	Ask me about the book's content, chapters, or specific topics!";

pub const CHAPTER_COUNT_RESPONSE: &str = "The book is structured into six comprehensive chapters.";

/// Shortest query (in characters, after trimming) that is worth answering.
pub const MIN_QUERY_CHARS: usize = 2;

/// Answer for a query that matched nothing in the knowledge base.
pub fn no_match_response(query: &str) -> String {
	format!(
		"I don't have specific information about '{query}' in the book. The book covers topics like \
		 physical AI, robot foundations, human-inspired design, perception systems, AI & control, and \
		 locomotion. Try asking about these topics!"
	)
}

/// Answer when retrieval matched but nothing could be assembled.
pub fn no_information_response(query: &str) -> String {
	format!("I don't have specific information about '{query}' in the book.")
}

pub fn processing_error_response(query: &str, reason: &str) -> String {
	format!(
		"Error processing query '{query}': {reason}. Please try again with a different question \
		 about the humanoid robotics book."
	)
}

/// Whether `phrase` occurs in `query_lower` under `mode`. Word mode splits the
/// query on every non-alphanumeric character.
pub fn phrase_matches(query_lower: &str, phrase: &str, mode: MatchMode) -> bool {
	match mode {
		MatchMode::Substring => query_lower.contains(phrase),
		MatchMode::Word => query_lower
			.split(|c: char| !c.is_alphanumeric())
			.any(|word| word == phrase),
	}
}

/// First short-circuit rule matching the lower-cased query.
pub fn match_short_circuit(query_lower: &str) -> Option<ShortCircuit> {
	SHORT_CIRCUIT_RULES
		.iter()
		.find(|rule| rule.phrases.iter().any(|p| phrase_matches(query_lower, p, rule.mode)))
		.map(|rule| rule.kind)
}

/// First meta-question rule matching the lower-cased query.
pub fn match_meta_question(query_lower: &str) -> Option<&'static MetaQuestionRule> {
	META_QUESTION_RULES
		.iter()
		.find(|rule| rule.phrases.iter().any(|p| query_lower.contains(p)))
}

pub fn is_chapter_query(query_lower: &str) -> bool {
	CHAPTER_QUERY_CUES.iter().any(|cue| query_lower.contains(cue))
}

pub fn is_chapter_count_paragraph(paragraph_lower: &str) -> bool {
	paragraph_lower.contains(CHAPTER_COUNT_WORD)
		&& CHAPTER_PARAGRAPH_CUES.iter().any(|cue| paragraph_lower.contains(cue))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn greeting_needs_whole_word() {
		assert_eq!(match_short_circuit("hello"), Some(ShortCircuit::Greeting));
		assert_eq!(match_short_circuit("hi, bot!"), Some(ShortCircuit::Greeting));
		assert_eq!(match_short_circuit("what is this book about?"), None);
		assert_eq!(match_short_circuit("they walk"), None);
	}

	#[test]
	fn chapter_phrases_match_anywhere() {
		assert_eq!(match_short_circuit("how many chapters are there"), Some(ShortCircuit::ChapterCount));
		assert_eq!(match_short_circuit("list the chapters"), Some(ShortCircuit::ChapterCount));
		assert_eq!(match_short_circuit("what is in chapter 3"), None);
	}

	#[test]
	fn greeting_wins_over_chapter_count() {
		assert_eq!(match_short_circuit("hey, how many chapters?"), Some(ShortCircuit::Greeting));
	}

	#[test]
	fn meta_rules_pick_category() {
		assert_eq!(match_meta_question("what is the intro about this book?").unwrap().preferred_category, "book_intro");
		assert_eq!(match_meta_question("what is this book about?").unwrap().preferred_category, "book_overview");
		assert_eq!(match_meta_question("tell me about this book").unwrap().preferred_category, "book_overview");
		assert_eq!(match_meta_question("what topics does this book cover?").unwrap().preferred_category, "book_topics");
		assert!(match_meta_question("how do robots walk").is_none());
	}

	#[test]
	fn chapter_paragraph_needs_six_and_cue() {
		assert!(is_chapter_count_paragraph("the book has six chapters"));
		assert!(!is_chapter_count_paragraph("the book has many chapters"));
		assert!(!is_chapter_count_paragraph("six legs"));
	}

	#[test]
	fn templated_responses_embed_query() {
		assert!(no_match_response("xyz").contains("'xyz'"));
		assert!(no_information_response("xyz").starts_with("I don't have specific information about 'xyz'"));
		let err = processing_error_response("q", "boom");
		assert!(err.contains("'q'") && err.contains("boom"));
	}

	#[test]
	fn greeting_response_text() {
		assert_eq!(
			GREETING_RESPONSE,
			"Hello! I'm a RAG chatbot specialized in the Humanoid Robotics Book. Ask me about the book's content, chapters, or specific topics!"
		);
	}
}
