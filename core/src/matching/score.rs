use std::collections::HashSet;

/// Scores the similarity of two device strings
///
/// Comparison is case-insensitive. The rule:
/// - exact equality scores 1.0
/// - one string containing the other scores 0.9
/// - strings sharing whitespace-separated words score
///   `0.7 + 0.2 * (shared / max(words1, words2))`
/// - anything else scores 0.0
pub fn match_score(a: &str, b: &str) -> f64 {
    let a = a.to_uppercase();
    let b = b.to_uppercase();

    if a == b {
        return 1.0;
    }

    if a.contains(&b) || b.contains(&a) {
        return 0.9;
    }

    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();
    let shared = words_a.intersection(&words_b).count();
    if shared == 0 {
        return 0.0;
    }

    let max_words = words_a.len().max(words_b.len());
    0.7 + 0.2 * (shared as f64 / max_words as f64)
}
