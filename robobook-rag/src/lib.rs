//! Retrieval chatbot for the Humanoid Robotics Book.
//!
//! A bag-of-words matcher over a small, fixed, in-memory corpus: chapters are
//! loaded once, embedded as term-frequency vectors, and ranked against each
//! query by cosine similarity. [`QueryProcessor::answer`] is the only entry
//! point the HTTP layer needs.

pub mod config;
pub mod corpus;
pub mod cosine;
pub mod embedder;
pub mod error;
pub mod knowledge_base;
pub mod processor;
pub mod retriever;
pub mod rules;
pub mod server;
pub mod synthesizer;
pub mod types;

pub use error::RagError;
pub use knowledge_base::KnowledgeBase;
pub use processor::QueryProcessor;
