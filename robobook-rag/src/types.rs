use crate::embedder::TermVector;

/// Category tag carried by every loaded book chapter.
pub const BOOK_CONTENT_CATEGORY: &str = "book_content";

/// A chapter file loaded from the corpus directory, front-matter removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	pub id: u32,
	pub source_name: String,
	pub text: String,
	pub category: String,
}

impl Document {
	pub fn new(id: u32, source_name: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			id,
			source_name: source_name.into(),
			text: text.into(),
			category: BOOK_CONTENT_CATEGORY.to_string(),
		}
	}
}

/// A hand-written question/answer pair. Ids start at 1000 so they never
/// collide with document ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuratedEntry {
	pub id: u32,
	pub question: String,
	pub answer: String,
	pub category: String,
}

/// A unit of retrievable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeItem {
	Document(Document),
	Curated(CuratedEntry),
}

impl KnowledgeItem {
	pub fn id(&self) -> u32 {
		match self {
			Self::Document(d) => d.id,
			Self::Curated(c) => c.id,
		}
	}

	pub fn category(&self) -> &str {
		match self {
			Self::Document(d) => &d.category,
			Self::Curated(c) => &c.category,
		}
	}

	pub fn as_curated(&self) -> Option<&CuratedEntry> {
		match self {
			Self::Curated(c) => Some(c),
			Self::Document(_) => None,
		}
	}
}

/// Pre-computed term vector for one knowledge item. `item` indexes into the
/// owning knowledge base's item list.
#[derive(Debug, Clone)]
pub struct IndexedEmbedding {
	pub id: u32,
	pub vector: TermVector,
	pub item: usize,
}
