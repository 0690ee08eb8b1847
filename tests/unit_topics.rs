// Property tests for the topic engine.
//
// Pins the behaviors the pipelines depend on: cleaning idempotence, the
// exclusivity invariant and its order sensitivity, fallback saturation,
// determinism of the non-exclusive paths, and canonicalization closure.

use rubric::lexicon::Lexicon;
use rubric::topics::assign::{ExclusiveAssigner, NearestAssigner, TopicLabel, UNLABELED};
use rubric::topics::canonical::canonicalize;
use rubric::topics::normalize::clean_keywords;
use rubric::topics::traits::TopicAssigner;

fn strings(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

fn described_labels(entries: &[(&str, &str)]) -> Vec<TopicLabel> {
    entries
        .iter()
        .map(|(name, desc)| TopicLabel::new(*name, *desc))
        .collect()
}

// ============================================================
// Keyword cleaning — idempotence and boundaries
// ============================================================

#[test]
fn cleaning_is_idempotent_across_inputs() {
    let lexicon = Lexicon::default();
    let inputs = [
        "Irrig; yield; food_sec",
        "use; study; data",
        "Drought Tolerance;;  ; maiz",
        "genet; gene_express; obes",
        "soil_moistur; crop_prod; resilienc",
        "already cleaned words",
        "",
        "   ;   ",
    ];
    for raw in inputs {
        let once = clean_keywords(raw, &lexicon);
        assert_eq!(
            clean_keywords(&once, &lexicon),
            once,
            "second cleaning pass changed {raw:?}"
        );
    }
}

#[test]
fn all_filler_string_cleans_to_empty() {
    let lexicon = Lexicon::default();
    assert_eq!(clean_keywords("use; study; data", &lexicon), "");
}

// ============================================================
// Exclusive assignment — invariant, order sensitivity, saturation
// ============================================================

#[test]
fn exclusive_never_duplicates_a_label() {
    let labels = described_labels(&[
        ("irrigation", "irrigation water canal"),
        ("food security", "food security hunger water"),
        ("soil health", "soil health erosion water"),
    ]);
    let docs = strings(&[
        "water canal irrigation",
        "water hunger",
        "water erosion",
        "water",
        "water",
    ]);

    let assigned = ExclusiveAssigner.assign(&docs, &labels);
    assert_eq!(assigned.len(), docs.len());

    let mut seen = std::collections::HashSet::new();
    for name in assigned.iter().filter(|n| n.as_str() != UNLABELED) {
        assert!(seen.insert(name.clone()), "label {name:?} assigned twice");
    }
}

#[test]
fn exclusive_is_order_sensitive() {
    // Both documents prefer "irrigation"; only the first one processed
    // gets it, and reversing the input order swaps the winner.
    let labels = described_labels(&[
        ("irrigation", "irrigation water canal supply"),
        ("food security", "food security nutrition hunger"),
    ]);
    let forward = strings(&["water canal", "canal water supply"]);
    let reversed = strings(&["canal water supply", "water canal"]);

    let fwd = ExclusiveAssigner.assign(&forward, &labels);
    assert_eq!(fwd[0], "irrigation");
    // Second document's only positive-similarity label is consumed
    assert_eq!(fwd[1], UNLABELED);

    let rev = ExclusiveAssigner.assign(&reversed, &labels);
    assert_eq!(rev[0], "irrigation");
    assert_eq!(rev[1], UNLABELED);
}

#[test]
fn exclusive_falls_back_to_second_choice() {
    let labels = described_labels(&[
        ("irrigation", "irrigation water canal supply"),
        ("food security", "food security water access"),
    ]);
    let docs = strings(&["water canal irrigation", "canal water supply irrigation"]);

    let assigned = ExclusiveAssigner.assign(&docs, &labels);
    assert_eq!(assigned, vec!["irrigation", "food security"]);
}

#[test]
fn exclusive_saturation_yields_sentinels() {
    // n = 5 documents all most similar to the same label, m = 2 labels with
    // positive similarity to every document: exactly m distinct labels are
    // handed out, the remaining n - m rows get the sentinel.
    let labels = described_labels(&[
        ("crop yield", "crop yield harvest grain"),
        ("soil health", "soil health grain"),
    ]);
    let docs = strings(&[
        "grain harvest crop",
        "grain harvest crop",
        "grain harvest crop",
        "grain harvest crop",
        "grain harvest crop",
    ]);

    let assigned = ExclusiveAssigner.assign(&docs, &labels);
    assert_eq!(assigned[0], "crop yield");
    assert_eq!(assigned[1], "soil health");
    assert_eq!(&assigned[2..], &[UNLABELED, UNLABELED, UNLABELED]);

    let distinct: std::collections::HashSet<&String> = assigned
        .iter()
        .filter(|n| n.as_str() != UNLABELED)
        .collect();
    assert_eq!(distinct.len(), labels.len());
}

#[test]
fn exclusive_all_filler_document_is_unlabeled() {
    let lexicon = Lexicon::default();
    let cleaned = clean_keywords("use; study; data", &lexicon);
    assert_eq!(cleaned, "");

    let labels = described_labels(&[
        ("irrigation", "irrigation water canal"),
        ("food security", "food security hunger"),
    ]);
    let assigned = ExclusiveAssigner.assign(&[cleaned], &labels);
    // Labels remain unconsumed, yet a zero-similarity document never claims one
    assert_eq!(assigned, vec![UNLABELED]);
}

#[test]
fn exclusive_output_is_closed_over_label_set() {
    let labels = described_labels(&[
        ("irrigation", "irrigation water"),
        ("food security", "food security"),
    ]);
    let docs = strings(&["water", "food", "unrelated text", ""]);
    let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();

    for assigned in ExclusiveAssigner.assign(&docs, &labels) {
        assert!(
            assigned == UNLABELED || names.contains(&assigned.as_str()),
            "unexpected output {assigned:?}"
        );
    }
}

// ============================================================
// Nearest assignment — determinism and independence
// ============================================================

#[test]
fn nearest_is_deterministic_across_repeats() {
    let labels = described_labels(&[
        ("irrigation", "irrigation water canal"),
        ("food security", "food security hunger"),
    ]);
    let docs = strings(&["water canal", "hunger relief", "water hunger"]);

    let first = NearestAssigner.assign(&docs, &labels);
    for _ in 0..5 {
        assert_eq!(NearestAssigner.assign(&docs, &labels), first);
    }
}

#[test]
fn nearest_rows_are_independent_of_each_other() {
    let labels = described_labels(&[
        ("irrigation", "irrigation water canal"),
        ("food security", "food security hunger"),
    ]);
    let forward = strings(&["water canal", "hunger relief"]);
    let reversed = strings(&["hunger relief", "water canal"]);

    let fwd = NearestAssigner.assign(&forward, &labels);
    let rev = NearestAssigner.assign(&reversed, &labels);
    assert_eq!(fwd[0], rev[1]);
    assert_eq!(fwd[1], rev[0]);
}

#[test]
fn nearest_reuses_the_same_label() {
    let labels = described_labels(&[
        ("irrigation", "irrigation water canal"),
        ("food security", "food security hunger"),
    ]);
    let docs = strings(&["water canal", "canal irrigation", "irrigation water"]);

    let assigned = NearestAssigner.assign(&docs, &labels);
    assert!(assigned.iter().all(|n| n == "irrigation"));
}

// ============================================================
// Canonicalization — determinism and closure
// ============================================================

#[test]
fn canonicalize_is_deterministic() {
    let vocab = rubric::lexicon::default_vocabulary();
    let first = canonicalize("drip irrigation systems", &vocab);
    for _ in 0..5 {
        assert_eq!(canonicalize("drip irrigation systems", &vocab), first);
    }
}

#[test]
fn canonicalize_closure_over_default_vocabulary() {
    let vocab = rubric::lexicon::default_vocabulary();
    for keyword in [
        "irrigation",
        "soil fertility",
        "completely unrelated phrase",
        "climate",
        "",
        "   ",
    ] {
        let out = canonicalize(keyword, &vocab);
        assert!(
            out.is_empty() || vocab.contains(&out),
            "canonicalize({keyword:?}) produced {out:?} outside the vocabulary"
        );
    }
}

#[test]
fn canonicalize_prefers_lexical_overlap() {
    let vocab = strings(&["food security", "water management", "crop yield"]);
    assert_eq!(canonicalize("water use efficiency", &vocab), "water management");
    assert_eq!(canonicalize("yield gap in crops", &vocab), "crop yield");
}
