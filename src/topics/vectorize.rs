// Shared TF-IDF vector space over two corpora.
//
// Documents and references are always fit together, never fit-on-one and
// transform-the-other: keyword strings are a few words long while label
// descriptions can be whole sentences, and a term that appears on only one
// side must still get a defined weight in the shared space. After fitting,
// the matrix is split back so row i of `documents` is input document i and
// row j of `references` is reference text j.

use std::collections::{BTreeMap, HashSet};

/// A TF-IDF space fit jointly over two ordered text collections.
pub struct VectorSpace {
    /// One row per input document, in input order. Rows are L2-normalized;
    /// a document with no surviving terms stays all-zero.
    pub documents: Vec<Vec<f64>>,
    /// One row per reference text, in input order.
    pub references: Vec<Vec<f64>>,
}

impl VectorSpace {
    /// Fit over the concatenation documents-then-references, then split back.
    ///
    /// Weighting: tf = raw count, idf = ln((1 + N) / (1 + df)) + 1 with
    /// N = total texts, then L2 row normalization.
    pub fn fit_joint(documents: &[String], references: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .chain(references.iter())
            .map(|text| tokenize(text))
            .collect();

        // Term -> column index, in sorted term order so the layout is
        // deterministic across runs.
        let mut columns: BTreeMap<String, usize> = BTreeMap::new();
        for tokens in &tokenized {
            for token in tokens {
                if !columns.contains_key(token) {
                    columns.insert(token.clone(), 0);
                }
            }
        }
        for (index, slot) in columns.values_mut().enumerate() {
            *slot = index;
        }

        // Document frequency: each term counted once per text
        let mut doc_freq = vec![0usize; columns.len()];
        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for token in unique {
                doc_freq[columns[token]] += 1;
            }
        }

        let total = tokenized.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + total) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(tokenized.len());
        for tokens in &tokenized {
            let mut row = vec![0.0f64; columns.len()];
            for token in tokens {
                row[columns[token]] += 1.0;
            }
            for (j, value) in row.iter_mut().enumerate() {
                *value *= idf[j];
            }
            l2_normalize(&mut row);
            rows.push(row);
        }

        let reference_rows = rows.split_off(documents.len());
        Self {
            documents: rows,
            references: reference_rows,
        }
    }
}

/// Lowercased maximal runs of word characters (alphanumeric or '_'),
/// minimum length two — single letters carry no topical signal.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(String::from)
        .collect()
}

/// Scale a vector to unit length in place; all-zero rows stay all-zero.
fn l2_normalize(row: &mut [f64]) {
    let norm: f64 = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}
