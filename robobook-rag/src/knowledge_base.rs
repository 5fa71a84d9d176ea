// ---------------------------------------------------------------------------
// KnowledgeBase -- documents plus curated answers, embedded once
// ---------------------------------------------------------------------------
//
// Built a single time at startup and read-only afterwards. Every item gets
// exactly one IndexedEmbedding, computed during construction.
// ---------------------------------------------------------------------------

use std::path::Path;

use crate::corpus::load_documents;
use crate::embedder::embed;
use crate::types::{CuratedEntry, Document, IndexedEmbedding, KnowledgeItem};

/// Document text beyond this many characters is not embedded.
pub const EMBED_CONTENT_CHARS: usize = 500;

/// First id handed out to curated entries.
pub const CURATED_ID_BASE: u32 = 1000;

const INTRO_SOURCE: &str = "intro.md";
const INTRO_TITLE: &str = "# Welcome to the Humanoid Robotics Book";
const INTRO_ABOUT_HEADING: &str = "## About This Book";
const INTRO_FIRST_CHAPTER: &str = "1. **Introduction to Physical AI**";
const INTRO_SUMMARY_PARTS: usize = 4;

const ABOUT_SENTENCE: &str = "This book is a comprehensive guide on humanoid robotics that takes you on a journey through the fascinating world of physical artificial intelligence and humanoid robot development.";

const CHAPTER_OUTLINE: &[&str] = &[
	"The book is structured into six comprehensive chapters:",
	"- Introduction to Physical AI: Foundational concepts of AI integrated with physical systems",
	"- Foundations of Robotics: Core principles of robotics, systems, and mechanisms",
	"- Human-Inspired Design Principles: How human biology inspires robot design",
	"- Perception Systems: How robots sense and understand their environment",
	"- AI, Deep Learning & Control Systems: The brain and nervous system of robots",
	"- Humanoid Locomotion and Manipulation: How robots move and interact with the world",
];

const INTRO_EMPTY_SUMMARY: &str = "This book is an introduction to humanoid robotics and physical AI.";
const INTRO_MISSING_SUMMARY: &str = "This book is a comprehensive guide on humanoid robotics that covers the fundamentals of physical AI, robot design, perception systems, and control mechanisms.";

pub const BOOK_SUMMARY: &str = "This book is a comprehensive guide on humanoid robotics that takes you on a journey through the fascinating world of physical artificial intelligence and humanoid robot development. It covers topics from basic concepts to advanced applications in humanoid robotics.";

pub const BOOK_TOPICS: &str = "The book covers six main topics: 1) Introduction to Physical AI, 2) Foundations of Robotics, 3) Human-Inspired Design Principles, 4) Perception Systems, 5) AI, Deep Learning & Control Systems, and 6) Humanoid Locomotion and Manipulation.";

/// In-memory, immutable collection of knowledge items and their vectors.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
	items: Vec<KnowledgeItem>,
	embeddings: Vec<IndexedEmbedding>,
	document_count: usize,
}

impl KnowledgeBase {
	/// Load `file_names` from `corpus_dir` and build the knowledge base.
	pub fn load<S: AsRef<str>>(corpus_dir: &Path, file_names: &[S]) -> Self {
		Self::from_documents(load_documents(corpus_dir, file_names))
	}

	/// Build from already-loaded documents. Curated entries are derived from
	/// the documents and appended after them.
	pub fn from_documents(documents: Vec<Document>) -> Self {
		let curated = curated_entries(&documents);
		let document_count = documents.len();

		let mut items: Vec<KnowledgeItem> = documents.into_iter().map(KnowledgeItem::Document).collect();
		items.extend(curated.into_iter().map(KnowledgeItem::Curated));

		let embeddings = items
			.iter()
			.enumerate()
			.map(|(idx, item)| IndexedEmbedding {
				id: item.id(),
				vector: embed(&embedding_text(item)),
				item: idx,
			})
			.collect::<Vec<_>>();

		tracing::info!(
			documents = document_count,
			curated = items.len() - document_count,
			"Knowledge base built"
		);

		Self {
			items,
			embeddings,
			document_count,
		}
	}

	pub fn items(&self) -> &[KnowledgeItem] {
		&self.items
	}

	pub fn embeddings(&self) -> &[IndexedEmbedding] {
		&self.embeddings
	}

	/// The item an embedding was computed from.
	pub fn item_for(&self, embedding: &IndexedEmbedding) -> &KnowledgeItem {
		&self.items[embedding.item]
	}

	pub fn get(&self, id: u32) -> Option<&KnowledgeItem> {
		self.items.iter().find(|item| item.id() == id)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn document_count(&self) -> usize {
		self.document_count
	}

	pub fn curated_count(&self) -> usize {
		self.items.len() - self.document_count
	}
}

/// Text fed to the embedder for one item.
pub fn embedding_text(item: &KnowledgeItem) -> String {
	match item {
		KnowledgeItem::Curated(c) => format!("{} {} {}", c.question, c.answer, c.category),
		KnowledgeItem::Document(d) => {
			let head: String = d.text.chars().take(EMBED_CONTENT_CHARS).collect();
			format!("{} {} {}", d.source_name, head, d.category)
		}
	}
}

/// The fixed question/answer pairs about the book itself.
pub fn curated_entries(documents: &[Document]) -> Vec<CuratedEntry> {
	let intro = intro_summary(documents);
	let pairs = [
		("What is the intro about this book?", intro, "book_intro"),
		("What is this book about?", BOOK_SUMMARY.to_string(), "book_overview"),
		("Tell me about this book", BOOK_SUMMARY.to_string(), "book_overview"),
		("What topics does this book cover?", BOOK_TOPICS.to_string(), "book_topics"),
	];

	pairs
		.into_iter()
		.enumerate()
		.map(|(i, (question, answer, category))| CuratedEntry {
			id: CURATED_ID_BASE + i as u32,
			question: question.to_string(),
			answer,
			category: category.to_string(),
		})
		.collect()
}

/// Summarize the intro chapter: the "About This Book" section up to the
/// chapter list, with the list replaced by a fixed outline.
pub fn intro_summary(documents: &[Document]) -> String {
	let Some(intro) = documents.iter().find(|d| d.source_name.contains(INTRO_SOURCE)) else {
		return INTRO_MISSING_SUMMARY.to_string();
	};

	let mut parts: Vec<&str> = Vec::new();
	for line in intro.text.split('\n') {
		if line.starts_with(INTRO_TITLE) {
			continue;
		} else if line.starts_with(INTRO_ABOUT_HEADING) {
			parts.push(ABOUT_SENTENCE);
		} else if line.starts_with(INTRO_FIRST_CHAPTER) {
			parts.extend_from_slice(CHAPTER_OUTLINE);
			break;
		} else if !parts.is_empty() {
			parts.push(line);
		}
	}

	if parts.is_empty() {
		INTRO_EMPTY_SUMMARY.to_string()
	} else {
		parts.into_iter().take(INTRO_SUMMARY_PARTS).collect::<Vec<_>>().join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	fn intro_doc(text: &str) -> Document {
		Document::new(1, "intro.md", text)
	}

	#[test]
	fn curated_only_when_corpus_empty() {
		let kb = KnowledgeBase::from_documents(Vec::new());
		assert_eq!(kb.len(), 4);
		assert_eq!(kb.document_count(), 0);
		assert_eq!(kb.curated_count(), 4);
		let ids: Vec<u32> = kb.items().iter().map(|i| i.id()).collect();
		assert_eq!(ids, vec![1000, 1001, 1002, 1003]);
	}

	#[test]
	fn one_embedding_per_item_with_unique_ids() {
		let docs = vec![
			Document::new(1, "intro.md", "Welcome"),
			Document::new(2, "01-introduction-to-physical-ai.md", "Physical AI"),
		];
		let kb = KnowledgeBase::from_documents(docs);
		assert_eq!(kb.embeddings().len(), kb.len());
		for emb in kb.embeddings() {
			assert_eq!(kb.item_for(emb).id(), emb.id);
		}
		let ids: HashSet<u32> = kb.items().iter().map(|i| i.id()).collect();
		assert_eq!(ids.len(), kb.len());
	}

	#[test]
	fn documents_come_before_curated() {
		let kb = KnowledgeBase::from_documents(vec![Document::new(1, "a.md", "text")]);
		assert!(matches!(kb.items()[0], KnowledgeItem::Document(_)));
		assert!(matches!(kb.items()[1], KnowledgeItem::Curated(_)));
		assert!(kb.get(1).is_some());
		assert!(kb.get(1003).is_some());
		assert!(kb.get(7).is_none());
	}

	#[test]
	fn curated_embedding_text_joins_fields() {
		let item = KnowledgeItem::Curated(CuratedEntry {
			id: 1000,
			question: "Q?".into(),
			answer: "A.".into(),
			category: "cat".into(),
		});
		assert_eq!(embedding_text(&item), "Q? A. cat");
	}

	#[test]
	fn document_embedding_text_is_truncated() {
		let long = "é".repeat(800);
		let item = KnowledgeItem::Document(Document::new(1, "x.md", long));
		let text = embedding_text(&item);
		assert_eq!(text.chars().filter(|c| *c == 'é').count(), EMBED_CONTENT_CHARS);
		assert!(text.starts_with("x.md "));
		assert!(text.ends_with(" book_content"));
	}

	#[test]
	fn intro_summary_without_intro_doc() {
		assert_eq!(intro_summary(&[]), INTRO_MISSING_SUMMARY);
	}

	#[test]
	fn intro_summary_without_about_section() {
		let docs = vec![intro_doc("# Welcome to the Humanoid Robotics Book\n\nHello.")];
		assert_eq!(intro_summary(&docs), INTRO_EMPTY_SUMMARY);
	}

	#[test]
	fn intro_summary_takes_first_four_parts() {
		let text = "# Welcome to the Humanoid Robotics Book\n\
			\n\
			## About This Book\n\
			\n\
			Robots are everywhere.\n\
			More text.\n\
			1. **Introduction to Physical AI** - basics";
		let docs = vec![intro_doc(text)];
		assert_eq!(
			intro_summary(&docs),
			format!("{ABOUT_SENTENCE}  Robots are everywhere. More text.")
		);
	}

	#[test]
	fn intro_summary_adds_outline_at_chapter_list() {
		let text = "## About This Book\n1. **Introduction to Physical AI**";
		let docs = vec![intro_doc(text)];
		let summary = intro_summary(&docs);
		assert!(summary.starts_with(ABOUT_SENTENCE));
		assert!(summary.contains("six comprehensive chapters"));
		assert!(summary.contains("Introduction to Physical AI: Foundational concepts"));
		assert!(!summary.contains("Human-Inspired Design Principles"));
	}
}
