use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use robobook_rag::config::{CliArgs, Command};
use robobook_rag::server::{self, AppState};
use robobook_rag::{KnowledgeBase, QueryProcessor};

#[tokio::main]
async fn main() -> Result<()> {
	let args = CliArgs::parse();

	// Logs go to stderr so `ask` output stays clean on stdout.
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
		)
		.init();

	tracing::info!(
		corpus_dir = %args.corpus_dir.display(),
		top_k = args.top_k,
		"Building knowledge base"
	);

	let corpus_dir = args.corpus_dir.clone();
	let files = args.corpus_files();
	let processor = match tokio::task::spawn_blocking(move || KnowledgeBase::load(&corpus_dir, &files)).await {
		Ok(kb) => Some(QueryProcessor::new(Arc::new(kb)).with_top_k(args.top_k)),
		Err(e) => {
			tracing::error!(error = %e, "Knowledge base build failed, answering in fallback mode");
			None
		}
	};

	match args.command() {
		Command::Serve => {
			let state = match processor {
				Some(p) => AppState::new(p),
				None => AppState::fallback(),
			};
			server::serve(&args.bind_address(), state).await?;
		}
		Command::Ask { queries } => {
			let Some(processor) = processor else {
				anyhow::bail!("knowledge base unavailable");
			};
			for query in queries {
				println!("\nQ: {query}");
				println!("A: {}", processor.answer(&query));
				println!("{}", "-".repeat(50));
			}
		}
	}

	Ok(())
}
