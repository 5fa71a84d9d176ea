// ---------------------------------------------------------------------------
// QueryProcessor -- the single entry point used by the host layer
// ---------------------------------------------------------------------------
//
// Received -> Normalized -> (ShortCircuited | Retrieved) -> Answered.
// `answer` never fails: errors and panics from retrieval or synthesis are
// turned into an answer string.
// ---------------------------------------------------------------------------

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::RagError;
use crate::knowledge_base::KnowledgeBase;
use crate::retriever::{retrieve, DEFAULT_TOP_K};
use crate::rules;
use crate::synthesizer::synthesize;

/// Answers questions against a shared, read-only knowledge base.
#[derive(Debug, Clone)]
pub struct QueryProcessor {
	kb: Arc<KnowledgeBase>,
	top_k: usize,
}

impl QueryProcessor {
	pub fn new(kb: Arc<KnowledgeBase>) -> Self {
		Self {
			kb,
			top_k: DEFAULT_TOP_K,
		}
	}

	pub fn with_top_k(mut self, top_k: usize) -> Self {
		self.top_k = top_k;
		self
	}

	pub fn knowledge_base(&self) -> &KnowledgeBase {
		&self.kb
	}

	pub fn top_k(&self) -> usize {
		self.top_k
	}

	/// Answer `query`. Always returns a string.
	pub fn answer(&self, query: &str) -> String {
		let query = query.trim();
		if query.chars().count() < rules::MIN_QUERY_CHARS {
			return rules::GUIDANCE_RESPONSE.to_string();
		}

		let query_lower = query.to_lowercase();
		if let Some(kind) = rules::match_short_circuit(&query_lower) {
			tracing::debug!(query, ?kind, "Short-circuit answer");
			return kind.response().to_string();
		}

		let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.retrieve_and_synthesize(query)))
			.unwrap_or_else(|payload| Err(RagError::Internal(panic_message(payload.as_ref()))));

		match outcome {
			Ok(answer) => answer,
			Err(e) => {
				tracing::error!(query, code = e.code(), error = %e, "Query processing failed");
				rules::processing_error_response(query, &e.to_string())
			}
		}
	}

	fn retrieve_and_synthesize(&self, query: &str) -> Result<String, RagError> {
		let contexts = retrieve(&self.kb, query, self.top_k)?;
		Ok(synthesize(query, &contexts))
	}
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
	if let Some(s) = payload.downcast_ref::<&str>() {
		(*s).to_string()
	} else if let Some(s) = payload.downcast_ref::<String>() {
		s.clone()
	} else {
		"unknown panic".to_string()
	}
}
