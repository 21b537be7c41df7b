//! Common utility functions shared across the codebase.

use std::collections::HashSet;

/// Checks if the text consists entirely of Unicode alphabetic characters.
///
/// Returns false for empty strings and for any text containing digits,
/// punctuation, or whitespace.
///
/// # Examples
///
/// ```
/// use wortschatz::utils::is_alphabetic_word;
///
/// assert!(is_alphabetic_word("Haus"));
/// assert!(is_alphabetic_word("zurückgehen"));
/// assert!(!is_alphabetic_word("geht's"));
/// assert!(!is_alphabetic_word("nach Hause"));
/// assert!(!is_alphabetic_word("123"));
/// assert!(!is_alphabetic_word(""));
/// ```
pub fn is_alphabetic_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_alphabetic())
}

/// Collapses consecutive whitespace to single spaces and trims the ends.
///
/// # Examples
///
/// ```
/// use wortschatz::utils::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  to   go \n back "), "to go back");
/// assert_eq!(collapse_whitespace("   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes duplicate strings, keeping the first occurrence of each.
pub fn dedup_preserving_first(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_is_alphabetic_word() {
        assert!(is_alphabetic_word("Hello"));
        assert!(is_alphabetic_word("Tür"));
        assert!(is_alphabetic_word("straße"));

        assert!(!is_alphabetic_word("123"));
        assert!(!is_alphabetic_word("ab-holen"));
        assert!(!is_alphabetic_word("hat's"));
        assert!(!is_alphabetic_word("  "));
        assert!(!is_alphabetic_word(""));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b"), "a b");
        assert_eq!(collapse_whitespace("\ta\n b\t"), "a b");
        assert_eq!(collapse_whitespace("already clean"), "already clean");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_dedup_preserving_first() {
        let items = vec![
            "macht".to_string(),
            "machen".to_string(),
            "macht".to_string(),
        ];
        assert_eq!(dedup_preserving_first(items), vec!["macht", "machen"]);
    }
}
