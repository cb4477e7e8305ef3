//! Ingredient name normalization and fuzzy similarity.

/// Canonicalize an ingredient name for comparison.
///
/// Lowercases, drops everything that is not alphanumeric or whitespace, and
/// collapses runs of whitespace into single spaces.
pub fn normalize(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Edit-distance similarity in 0..=1, where 1 means identical.
///
/// Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - strsim::levenshtein(a, b) as f64 / max_len as f64
}

/// Whether one word sequence is a word-by-word prefix of the other.
///
/// "chicken" / "chicken breast" qualifies, "butter" / "peanut butter" does not.
pub fn is_word_prefix(a: &str, b: &str) -> bool {
    let a_words: Vec<&str> = a.split_whitespace().collect();
    let b_words: Vec<&str> = b.split_whitespace().collect();
    if a_words.is_empty() || b_words.is_empty() {
        return false;
    }
    let (shorter, longer) = if a_words.len() <= b_words.len() {
        (&a_words, &b_words)
    } else {
        (&b_words, &a_words)
    };
    longer.starts_with(shorter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  All-Purpose   Flour "), "allpurpose flour");
        assert_eq!(normalize("Chicken Breast (boneless)"), "chicken breast boneless");
        assert_eq!(normalize("Crème fraîche"), "crème fraîche");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("rice", "rice"), 1.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_similarity_typo() {
        // one substitution over eight characters
        let score = similarity("tomatoes", "tomatoez");
        assert!((score - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_word_prefix() {
        assert!(is_word_prefix("chicken", "chicken breast"));
        assert!(is_word_prefix("chicken breast", "chicken"));
        assert!(!is_word_prefix("butter", "peanut butter"));
        assert!(!is_word_prefix("chick", "chicken breast"));
        assert!(!is_word_prefix("", "rice"));
    }
}
