// Canonicalization of free-text keywords against a fixed vocabulary.
//
// Chart preparation needs arbitrary author keywords bucketed into a bounded
// display set. Same joint-fit technique as assignment, scoped to a single
// query against the vocabulary list.

use super::similarity::similarity_matrix;
use super::vectorize::VectorSpace;

/// Map a free-text keyword onto its nearest vocabulary phrase.
///
/// Empty input maps to the empty string without fitting a space. Ties break
/// toward the earliest vocabulary entry; a keyword with no lexical overlap
/// resolves to the first entry (argmax over an all-zero row). The result is
/// always a vocabulary member or "".
pub fn canonicalize(keyword: &str, vocabulary: &[String]) -> String {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() || vocabulary.is_empty() {
        return String::new();
    }

    let space = VectorSpace::fit_joint(std::slice::from_ref(&keyword), vocabulary);
    let sims = &similarity_matrix(&space.documents, &space.references)[0];

    let mut best = 0;
    for (j, &s) in sims.iter().enumerate() {
        if s > sims[best] {
            best = j;
        }
    }
    vocabulary[best].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_exact_match_wins() {
        let vocab = vocabulary(&["food security", "crop yield", "irrigation"]);
        assert_eq!(canonicalize("irrigation", &vocab), "irrigation");
    }

    #[test]
    fn test_partial_overlap() {
        let vocab = vocabulary(&["food security", "water management", "crop yield"]);
        assert_eq!(canonicalize("water harvesting", &vocab), "water management");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let vocab = vocabulary(&["food security", "crop yield"]);
        assert_eq!(canonicalize("  CROP Yield ", &vocab), "crop yield");
    }

    #[test]
    fn test_empty_keyword_maps_to_empty() {
        let vocab = vocabulary(&["food security"]);
        assert_eq!(canonicalize("", &vocab), "");
        assert_eq!(canonicalize("   ", &vocab), "");
    }

    #[test]
    fn test_empty_vocabulary_maps_to_empty() {
        assert_eq!(canonicalize("irrigation", &[]), "");
    }

    #[test]
    fn test_no_overlap_resolves_to_first_entry() {
        let vocab = vocabulary(&["food security", "crop yield"]);
        assert_eq!(canonicalize("quantum entanglement", &vocab), "food security");
    }

    #[test]
    fn test_output_always_in_vocabulary() {
        let vocab = vocabulary(&["food security", "crop yield", "soil health"]);
        for keyword in ["soil", "yield of crops", "xyz", "food", ""] {
            let out = canonicalize(keyword, &vocab);
            assert!(
                out.is_empty() || vocab.contains(&out),
                "canonicalize({keyword:?}) produced {out:?}"
            );
        }
    }
}
