/// Fraction of `keywords` present in `text`, in `[0, 1]`.
///
/// Containment is a case-insensitive substring check against the raw
/// (non-normalized) text. An empty keyword set scores 1.0 — a vacuous match
/// kept for compatibility with the catalogue format.
pub fn keyword_score(text: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 1.0;
    }

    let haystack = text.to_lowercase();
    let found = keywords
        .iter()
        .filter(|k| haystack.contains(&k.to_lowercase()))
        .count();

    found as f64 / keywords.len() as f64
}
