use crate::embedder::TermVector;

/// Compute cosine similarity between two sparse term vectors.
///
/// Keys missing from one side count as zero, so the dot product only needs
/// the shared keys. Returns 0.0 when either vector is empty or has zero
/// magnitude. Result clamped to [0.0, 1.0].
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
	if a.is_empty() || b.is_empty() {
		return 0.0;
	}

	let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
	let mut dot: f64 = 0.0;
	for (term, &count) in small {
		if let Some(&other) = large.get(term) {
			dot += count as f64 * other as f64;
		}
	}

	let denom = compute_magnitude(a) * compute_magnitude(b);
	if denom == 0.0 {
		return 0.0;
	}

	let result = dot / denom;
	if !result.is_finite() {
		return 0.0;
	}
	result.clamp(0.0, 1.0)
}

/// Compute the magnitude (L2 norm) of a term vector.
pub fn compute_magnitude(vector: &TermVector) -> f64 {
	let mut sum: f64 = 0.0;
	for &count in vector.values() {
		let c = count as f64;
		sum += c * c;
	}
	sum.sqrt()
}
