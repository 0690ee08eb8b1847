// Keyword cleaning — the first stage of every assignment pass.
//
// Raw keyword cells arrive as semicolon-separated free text pasted out of
// reference managers ("Irrig; soil_moistur; use"). Cleaning lowercases and
// trims each phrase, drops filler, expands stems into full terms, and rejoins
// with single spaces so the result is ready for vectorization.

use crate::lexicon::Lexicon;

/// Clean a raw semicolon-separated keyword string into a space-joined,
/// vectorizer-ready string.
///
/// Idempotent whenever the lexicon satisfies `Lexicon::validate`: a cleaned
/// string re-enters as a single `;`-free token that matches neither the
/// filler set nor the expansion keys.
pub fn clean_keywords(raw: &str, lexicon: &Lexicon) -> String {
    let mut expanded: Vec<String> = Vec::new();

    for token in raw.split(';') {
        let token = token.trim().to_lowercase();
        if token.is_empty() || lexicon.is_filler(&token) {
            continue;
        }
        match lexicon.expansion(&token) {
            // Mapped to "" means discard
            Some("") => {}
            Some(full) => expanded.push(full.to_string()),
            None => expanded.push(token),
        }
    }

    expanded.join(" ")
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
/// Used on title cells before nearest-topic matching.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
