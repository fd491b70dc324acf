//! Word normalization for title tokens.
//!
//! Titles arrive as raw whitespace-split tokens with punctuation, mixed case,
//! and the occasional character outside the safe (ASCII) range. Normalization
//! reduces each token to a lowercase alphanumeric form suitable for counting;
//! offending characters are dropped individually, never the whole token.

/// Normalize a raw title token for frequency counting.
///
/// Drops characters outside the safe ASCII range, strips ASCII punctuation,
/// and lowercases the remainder. An empty result is valid and means the token
/// carried no countable content; callers treat it as non-informative.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii)
        .filter(|c| !c.is_ascii_punctuation())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(normalize("Hello,"), "hello");
        assert_eq!(normalize("World!"), "world");
        assert_eq!(normalize("don't"), "dont");
        assert_eq!(normalize("[TIL]"), "til");
    }

    #[test]
    fn punctuation_only_token_yields_empty() {
        assert_eq!(normalize("?!...--"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_ascii_characters_are_dropped_not_the_token() {
        assert_eq!(normalize("naïve"), "nave");
        assert_eq!(normalize("héllo"), "hllo");
        // A fully non-ASCII token degrades to empty, not an error.
        assert_eq!(normalize("日本語"), "");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(normalize("Top10!"), "top10");
    }

    proptest! {
        #[test]
        fn output_is_safe_lowercase(raw in ".*") {
            let cleaned = normalize(&raw);
            prop_assert!(cleaned.chars().all(
                |c| c.is_ascii() && !c.is_ascii_punctuation() && !c.is_ascii_uppercase()
            ));
        }

        #[test]
        fn normalization_is_idempotent(raw in ".*") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
