//! Tag extraction
//!
//! Derives a recipe's tags from its free-text fields: every word from the
//! name, description, ingredients, and steps is normalized (lowercased,
//! diacritics folded) and matched against the controlled vocabulary. Words
//! with a vocabulary hit become tags.

use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::services::vocabulary::Vocabulary;

/// Normalize a word for vocabulary comparison.
///
/// Lowercases, then strips diacritical marks via canonical decomposition,
/// mark removal, and canonical re-composition, so that "Limón" compares
/// equal to "limon". Idempotent.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

/// Extract tags from a recipe's text fields.
///
/// Words are deduplicated on their normalized form before matching, so a
/// word repeated across fields yields at most one tag. A matching word is
/// emitted with its original casing as it appeared in the text, not the
/// vocabulary spelling. Empty inputs produce an empty list; this function
/// never fails.
pub fn extract_tags(
    name: &str,
    description: &str,
    ingredients: &[String],
    steps: &[String],
    vocabulary: &Vocabulary,
) -> Vec<String> {
    let words = name
        .split_whitespace()
        .chain(description.split_whitespace())
        .chain(ingredients.iter().flat_map(|i| i.split_whitespace()))
        .chain(steps.iter().flat_map(|s| s.split_whitespace()));

    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for word in words {
        let normalized = normalize(word);
        if !seen.insert(normalized.clone()) {
            continue;
        }
        if vocabulary.contains(&normalized) {
            tags.push(word.to_string());
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> Vocabulary {
        Vocabulary::from_terms(terms.iter().copied())
    }

    #[test]
    fn test_normalize_folds_accents() {
        assert_eq!(normalize("Limón"), "limon");
        assert_eq!(normalize("limon"), "limon");
        assert_eq!(normalize("AZÚCAR"), "azucar");
        assert_eq!(normalize("crème"), "creme");
    }

    #[test]
    fn test_normalize_plain_ascii_unchanged() {
        assert_eq!(normalize("pollo"), "pollo");
        assert_eq!(normalize("Pollo"), "pollo");
    }

    #[test]
    fn test_tags_preserve_input_casing() {
        let v = vocab(&["sal", "pollo"]);
        let tags = extract_tags("Pollo Sal", "", &[], &[], &v);
        assert_eq!(tags, vec!["Pollo".to_string(), "Sal".to_string()]);
    }

    #[test]
    fn test_repeated_word_tagged_once() {
        let v = vocab(&["sal"]);
        let tags = extract_tags(
            "sal",
            "un poco de sal",
            &["sal marina".to_string()],
            &[],
            &v,
        );
        assert_eq!(tags, vec!["sal".to_string()]);
    }

    #[test]
    fn test_out_of_vocabulary_word_never_tagged() {
        let v = vocab(&["sal", "pollo"]);
        let tags = extract_tags(
            "Espaguetis carbonara",
            "receta italiana",
            &["espaguetis".to_string()],
            &[],
            &v,
        );
        assert!(tags.is_empty());
    }

    #[test]
    fn test_accented_input_matches_unaccented_vocabulary() {
        let v = vocab(&["limon", "azucar"]);
        let tags = extract_tags("Tarta de Limón", "con azúcar", &[], &[], &v);
        assert_eq!(tags, vec!["Limón".to_string(), "azúcar".to_string()]);
    }

    #[test]
    fn test_words_gathered_from_all_fields() {
        let v = vocab(&["sal", "pollo", "arroz", "horneado"]);
        let tags = extract_tags(
            "Pollo al horno",
            "plato de arroz",
            &["sal".to_string(), "aceite de oliva".to_string()],
            &["horneado a 200 grados".to_string()],
            &v,
        );
        assert_eq!(
            tags,
            vec![
                "Pollo".to_string(),
                "arroz".to_string(),
                "sal".to_string(),
                "horneado".to_string()
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        let v = vocab(&["sal"]);
        let tags = extract_tags("", "", &[], &[], &v);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_whitespace_runs_produce_no_tokens() {
        let v = vocab(&["sal"]);
        let tags = extract_tags("  sal   \t ", "   ", &["  ".to_string()], &[], &v);
        assert_eq!(tags, vec!["sal".to_string()]);
    }

    #[test]
    fn test_no_substring_matches() {
        let v = vocab(&["sal"]);
        // "salsa" contains "sal" but is a different word
        let tags = extract_tags("salsa", "", &[], &[], &v);
        assert!(tags.is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Normalization is idempotent for arbitrary strings.
            #[test]
            fn normalize_idempotent(word in "\\PC*") {
                let once = normalize(&word);
                let twice = normalize(&once);
                prop_assert_eq!(once, twice);
            }

            /// Normalized output never contains combining marks.
            #[test]
            fn normalize_strips_marks(word in "\\PC*") {
                let normalized = normalize(&word);
                prop_assert!(!normalized.chars().any(is_combining_mark));
            }

            /// Every extracted tag originates from the input text.
            #[test]
            fn tags_come_from_input(
                name in "[a-zA-Záéíóú ]{0,40}",
                description in "[a-zA-Záéíóú ]{0,40}",
            ) {
                let v = vocab(&["sal", "pollo", "limon", "azucar"]);
                let tags = extract_tags(&name, &description, &[], &[], &v);
                let words: Vec<&str> = name
                    .split_whitespace()
                    .chain(description.split_whitespace())
                    .collect();
                for tag in &tags {
                    prop_assert!(words.contains(&tag.as_str()));
                }
            }
        }
    }
}
