//! HTTP API over the query processor, using Axum.

use std::sync::Arc;

use axum::{
	extract::{Query, State},
	http::StatusCode,
	routing::get,
	Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::RagError;
use crate::processor::QueryProcessor;

pub const SERVICE_NAME: &str = "rag-chatbot-api";

/// Which path produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerSource {
	#[serde(rename = "RAG")]
	Rag,
	#[serde(rename = "fallback")]
	Fallback,
}

/// Shared state for the API. `processor` is `None` when the knowledge base
/// could not be built; chat then echoes the query.
#[derive(Clone, Default)]
pub struct AppState {
	pub processor: Option<Arc<QueryProcessor>>,
}

impl AppState {
	pub fn new(processor: QueryProcessor) -> Self {
		Self {
			processor: Some(Arc::new(processor)),
		}
	}

	pub fn fallback() -> Self {
		Self { processor: None }
	}

	pub fn rag_available(&self) -> bool {
		self.processor.is_some()
	}
}

#[derive(Debug, Deserialize)]
pub struct ChatParams {
	pub query: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
	pub answer: String,
	pub status: String,
	pub source: AnswerSource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootResponse {
	pub message: String,
	pub rag_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
	pub status: String,
	pub service: String,
	pub rag_available: bool,
}

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
	Json(RootResponse {
		message: "API is working".to_string(),
		rag_available: state.rag_available(),
	})
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "healthy".to_string(),
		service: SERVICE_NAME.to_string(),
		rag_available: state.rag_available(),
	})
}

async fn chat(
	State(state): State<AppState>,
	Query(params): Query<ChatParams>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<serde_json::Value>)> {
	let query = match params.query {
		Some(q) if !q.is_empty() => q,
		_ => {
			let err = RagError::InvalidQuery("query parameter is required and must not be empty".into());
			return Err((StatusCode::UNPROCESSABLE_ENTITY, Json(err.to_json())));
		}
	};

	let Some(processor) = state.processor else {
		return Ok(Json(ChatResponse {
			answer: format!("You asked: {query}"),
			status: "success".to_string(),
			source: AnswerSource::Fallback,
		}));
	};

	// Answering is pure CPU work over immutable data; keep it off the reactor.
	let answer = match tokio::task::spawn_blocking(move || processor.answer(&query)).await {
		Ok(answer) => answer,
		Err(e) => {
			tracing::error!(error = %e, "Answer task failed");
			let err = RagError::Internal(e.to_string());
			return Err((StatusCode::INTERNAL_SERVER_ERROR, Json(err.to_json())));
		}
	};

	Ok(Json(ChatResponse {
		answer,
		status: "success".to_string(),
		source: AnswerSource::Rag,
	}))
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
	let cors = CorsLayer::new()
		.allow_origin(Any)
		.allow_methods(Any)
		.allow_headers(Any);

	Router::new()
		.route("/", get(root))
		.route("/api/chat", get(chat))
		.route("/health", get(health))
		.layer(cors)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> Result<(), RagError> {
	let listener = tokio::net::TcpListener::bind(addr)
		.await
		.map_err(|e| RagError::Bind(format!("{addr}: {e}")))?;
	tracing::info!(addr, rag_available = state.rag_available(), "HTTP API listening");
	axum::serve(listener, build_router(state)).await?;
	Ok(())
}
