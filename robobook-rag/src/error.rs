use thiserror::Error;

#[derive(Debug, Error)]
pub enum RagError {
	#[error("Invalid top_k: {0} (must be at least 1)")]
	InvalidTopK(usize),
	#[error("Invalid query: {0}")]
	InvalidQuery(String),
	#[error("Internal error: {0}")]
	Internal(String),
	#[error("Failed to bind {0}")]
	Bind(String),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl RagError {
	pub fn code(&self) -> &str {
		match self {
			Self::InvalidTopK(_) => "RAG_INVALID_TOP_K",
			Self::InvalidQuery(_) => "INVALID_QUERY",
			Self::Internal(_) => "RAG_INTERNAL",
			Self::Bind(_) => "RAG_BIND",
			Self::Io(_) => "RAG_IO",
		}
	}

	pub fn to_json(&self) -> serde_json::Value {
		serde_json::json!({
			"code": self.code(),
			"detail": self.to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_are_stable() {
		assert_eq!(RagError::InvalidTopK(0).code(), "RAG_INVALID_TOP_K");
		assert_eq!(RagError::InvalidQuery("x".into()).code(), "INVALID_QUERY");
	}

	#[test]
	fn json_carries_code_and_detail() {
		let v = RagError::InvalidQuery("query must not be empty".into()).to_json();
		assert_eq!(v["code"], "INVALID_QUERY");
		assert_eq!(v["detail"], "Invalid query: query must not be empty");
	}
}
