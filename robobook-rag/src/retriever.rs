use crate::cosine::cosine_similarity;
use crate::embedder::embed;
use crate::error::RagError;
use crate::knowledge_base::KnowledgeBase;
use crate::types::KnowledgeItem;

pub const DEFAULT_TOP_K: usize = 3;

/// Items must score strictly above this to be returned.
pub const SIMILARITY_THRESHOLD: f64 = 0.05;

/// A knowledge item with its similarity to the query.
#[derive(Debug, Clone, Copy)]
pub struct ScoredItem<'a> {
	pub score: f64,
	pub item: &'a KnowledgeItem,
}

/// Rank every item in `kb` against `query`.
///
/// Results are sorted by descending score; equal scores keep knowledge-base
/// order. At most `top_k` items are returned and none scoring at or below
/// [`SIMILARITY_THRESHOLD`]. An empty result means nothing matched.
pub fn retrieve_scored<'a>(
	kb: &'a KnowledgeBase,
	query: &str,
	top_k: usize,
) -> Result<Vec<ScoredItem<'a>>, RagError> {
	if top_k == 0 {
		return Err(RagError::InvalidTopK(top_k));
	}

	let query_vector = embed(query);
	let mut scored: Vec<ScoredItem<'a>> = kb
		.embeddings()
		.iter()
		.map(|emb| ScoredItem {
			score: cosine_similarity(&query_vector, &emb.vector),
			item: kb.item_for(emb),
		})
		.collect();

	// sort_by is stable, which gives the tie-break.
	scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

	let results: Vec<ScoredItem<'a>> = scored
		.into_iter()
		.take(top_k)
		.filter(|s| s.score > SIMILARITY_THRESHOLD)
		.collect();

	tracing::debug!(
		query,
		matches = results.len(),
		top_score = results.first().map(|s| s.score).unwrap_or(0.0),
		"Retrieval finished"
	);
	Ok(results)
}

/// Like [`retrieve_scored`], without the scores.
pub fn retrieve<'a>(
	kb: &'a KnowledgeBase,
	query: &str,
	top_k: usize,
) -> Result<Vec<&'a KnowledgeItem>, RagError> {
	Ok(retrieve_scored(kb, query, top_k)?
		.into_iter()
		.map(|s| s.item)
		.collect())
}
