use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

use crate::corpus::DEFAULT_BOOK_FILES;
use crate::retriever::DEFAULT_TOP_K;

#[derive(Parser, Debug)]
#[command(
	name = "robobook-rag",
	version,
	about = "Question answering over the Humanoid Robotics Book"
)]
pub struct CliArgs {
	/// Directory holding the book's markdown chapters
	#[arg(long, global = true, default_value = "docs-site/docs", env = "ROBOBOOK_CORPUS_DIR")]
	pub corpus_dir: PathBuf,

	/// Chapter file to load (repeatable or comma-separated). Defaults to the
	/// book's chapter list.
	#[arg(long = "file", global = true, value_delimiter = ',', env = "ROBOBOOK_FILES")]
	pub files: Vec<String>,

	/// Maximum number of knowledge items considered per query
	#[arg(
		long,
		global = true,
		default_value_t = DEFAULT_TOP_K,
		env = "ROBOBOOK_TOP_K",
		value_parser = RangedU64ValueParser::<usize>::new().range(1..)
	)]
	pub top_k: usize,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, global = true, default_value = "info", env = "ROBOBOOK_LOG_LEVEL")]
	pub log_level: String,

	/// Address the HTTP API binds to
	#[arg(long, global = true, default_value = "0.0.0.0", env = "ROBOBOOK_HOST")]
	pub host: String,

	/// Port the HTTP API listens on
	#[arg(long, global = true, default_value_t = 8000, env = "ROBOBOOK_PORT")]
	pub port: u16,

	#[command(subcommand)]
	pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Serve the HTTP API (default)
	Serve,
	/// Answer the given questions on stdout and exit
	Ask {
		/// Questions to answer
		#[arg(required = true)]
		queries: Vec<String>,
	},
}

impl CliArgs {
	/// Chapter files to load, falling back to the book's default list.
	pub fn corpus_files(&self) -> Vec<String> {
		if self.files.is_empty() {
			DEFAULT_BOOK_FILES.iter().map(|f| f.to_string()).collect()
		} else {
			self.files.clone()
		}
	}

	/// `host:port` for the HTTP listener.
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}

	/// The subcommand to run; `serve` when none was given.
	pub fn command(&self) -> Command {
		self.command.clone().unwrap_or(Command::Serve)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_serve_with_book_files() {
		let args = CliArgs::try_parse_from(["robobook-rag"]).unwrap();
		assert_eq!(args.top_k, DEFAULT_TOP_K);
		assert_eq!(args.corpus_files().len(), DEFAULT_BOOK_FILES.len());
		assert_eq!(args.command(), Command::Serve);
		assert_eq!(args.bind_address(), "0.0.0.0:8000");
	}

	#[test]
	fn parses_serve_flags() {
		let args =
			CliArgs::try_parse_from(["robobook-rag", "serve", "--host", "127.0.0.1", "--port", "9001"]).unwrap();
		assert_eq!(args.command(), Command::Serve);
		assert_eq!(args.bind_address(), "127.0.0.1:9001");
	}

	#[test]
	fn parses_ask_with_global_flags() {
		let args = CliArgs::try_parse_from([
			"robobook-rag",
			"ask",
			"--corpus-dir",
			"/tmp/book",
			"--file",
			"intro.md,02-foundations-of-robotics.md",
			"hello",
			"What is this book about?",
		])
		.unwrap();
		assert_eq!(args.corpus_dir, PathBuf::from("/tmp/book"));
		assert_eq!(args.corpus_files(), vec!["intro.md", "02-foundations-of-robotics.md"]);
		match args.command() {
			Command::Ask { queries } => assert_eq!(queries, vec!["hello", "What is this book about?"]),
			other => panic!("expected ask, got {other:?}"),
		}
	}

	#[test]
	fn top_k_must_be_positive() {
		assert!(CliArgs::try_parse_from(["robobook-rag", "--top-k", "0"]).is_err());
		let args = CliArgs::try_parse_from(["robobook-rag", "--top-k", "5"]).unwrap();
		assert_eq!(args.top_k, 5);
	}

	#[test]
	fn ask_requires_a_query() {
		assert!(CliArgs::try_parse_from(["robobook-rag", "ask"]).is_err());
	}
}
