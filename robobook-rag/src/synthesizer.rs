// ---------------------------------------------------------------------------
// Response Synthesizer
// ---------------------------------------------------------------------------
//
// Turns ranked knowledge items into one answer string. Curated answers take
// priority for meta-questions; otherwise the best context contributes either
// its curated answer or one extracted paragraph.
// ---------------------------------------------------------------------------

use crate::rules;
use crate::types::{Document, KnowledgeItem};

/// Fallback excerpt length when no paragraph matches the query.
pub const EXCERPT_CHARS: usize = 300;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Build the final answer for `query` from ranked `contexts`.
pub fn synthesize(query: &str, contexts: &[&KnowledgeItem]) -> String {
	if contexts.is_empty() {
		return rules::no_match_response(query);
	}

	let query_lower = query.to_lowercase();

	if let Some(rule) = rules::match_meta_question(&query_lower) {
		let preferred = contexts
			.iter()
			.filter_map(|c| c.as_curated())
			.find(|c| c.category == rule.preferred_category);
		let first_curated = contexts.iter().find_map(|c| c.as_curated());
		if let Some(entry) = preferred.or(first_curated) {
			return entry.answer.clone();
		}
	}

	let responses: Vec<String> = contexts
		.iter()
		.map(|context| match context {
			KnowledgeItem::Curated(entry) => entry.answer.clone(),
			KnowledgeItem::Document(doc) => extract_passage(&query_lower, doc),
		})
		.collect();

	// Only the top context is answered with.
	match responses.into_iter().next() {
		Some(response) if !response.trim().is_empty() => response,
		_ => rules::no_information_response(query),
	}
}

/// Pick the paragraph of `doc` that best answers the query, or the opening
/// excerpt when none mention a query word.
pub fn extract_passage(query_lower: &str, doc: &Document) -> String {
	let query_words: Vec<&str> = query_lower.split_whitespace().collect();
	let chapter_query = rules::is_chapter_query(query_lower);

	let mut relevant: Vec<&str> = Vec::new();
	for paragraph in doc.text.split(PARAGRAPH_SEPARATOR) {
		let paragraph_lower = paragraph.to_lowercase();
		if !query_words.iter().any(|w| paragraph_lower.contains(w)) {
			continue;
		}
		if chapter_query {
			if rules::is_chapter_count_paragraph(&paragraph_lower) {
				relevant.push(paragraph.trim());
				break;
			}
		} else {
			relevant.push(paragraph.trim());
		}
	}

	match relevant.first() {
		Some(paragraph) => paragraph.to_string(),
		None => doc.text.chars().take(EXCERPT_CHARS).collect(),
	}
}
