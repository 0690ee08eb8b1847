// Cosine similarity between document vectors and reference vectors.
//
// Pure numeric computation, no state. A document with no surviving terms is
// an all-zero vector; its similarity to everything is 0.0, never NaN.

/// Cosine similarity between two equal-length vectors.
///
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Dense n x m similarity matrix: rows = documents, columns = references.
pub fn similarity_matrix(documents: &[Vec<f64>], references: &[Vec<f64>]) -> Vec<Vec<f64>> {
    documents
        .iter()
        .map(|doc| references.iter().map(|r| cosine(doc, r)).collect())
        .collect()
}
