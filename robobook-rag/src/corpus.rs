// ---------------------------------------------------------------------------
// Corpus Loader
// ---------------------------------------------------------------------------
//
// Reads the book chapters from disk in a fixed order. Missing files are
// skipped silently, unreadable ones are logged and skipped; loading never
// fails as a whole.
// ---------------------------------------------------------------------------

use std::path::Path;

use crate::types::Document;

/// Chapter files of the Humanoid Robotics Book, in reading order.
pub const DEFAULT_BOOK_FILES: &[&str] = &[
	"intro.md",
	"01-introduction-to-physical-ai.md",
	"02-foundations-of-robotics.md",
	"03-human-inspired-design-principles.md",
	"04-perception-systems.md",
	"05-ai-deep-learning-and-control.md",
	"06-locomotion-and-manipulation.md",
];

const FRONT_MATTER_DELIMITER: &str = "---";

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
	text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Remove front-matter blocks from markdown text.
///
/// Every line that is exactly `---` (ignoring surrounding whitespace) toggles
/// the front-matter state and is dropped, as is every line inside a block.
pub fn strip_front_matter(text: &str) -> String {
	let mut in_front_matter = false;
	let mut kept: Vec<&str> = Vec::new();

	for line in text.split('\n') {
		if line.trim() == FRONT_MATTER_DELIMITER {
			in_front_matter = !in_front_matter;
			continue;
		}
		if !in_front_matter {
			kept.push(line);
		}
	}

	kept.join("\n")
}

/// Load the named files from `base_dir`. Ids are assigned sequentially from 1
/// over the files that were actually loaded.
pub fn load_documents<S: AsRef<str>>(base_dir: &Path, file_names: &[S]) -> Vec<Document> {
	let mut documents: Vec<Document> = Vec::new();

	for name in file_names {
		let name = name.as_ref();
		let path = base_dir.join(name);
		if !path.exists() {
			tracing::debug!(file = %path.display(), "Corpus file not found, skipping");
			continue;
		}

		match std::fs::read_to_string(&path) {
			Ok(raw) => {
				let id = documents.len() as u32 + 1;
				let text = strip_front_matter(&normalize_line_endings(&raw));
				documents.push(Document::new(id, name, text));
				tracing::debug!(file = name, id, "Loaded corpus document");
			}
			Err(e) => {
				tracing::warn!(file = %path.display(), error = %e, "Error reading corpus file, skipping");
			}
		}
	}

	tracing::info!(
		loaded = documents.len(),
		requested = file_names.len(),
		dir = %base_dir.display(),
		"Corpus loaded"
	);
	documents
}
