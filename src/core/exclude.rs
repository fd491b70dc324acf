//! Stopword exclusion for frequency counting.
//!
//! Skip entries are plain words or regex fragments. They are compiled once
//! into a single case-insensitive alternation anchored at the start of the
//! word, so a word is excluded when any entry matches it as a prefix. This
//! means a skip entry for `the` also excludes `theater`; the anchor-prefix
//! semantics are a documented sharp edge kept for compatibility with the
//! existing skip lists, and are pinned by test below.

use regex::Regex;

/// Compiled exclusion patterns, applied to normalized words.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    // None when the pattern set is empty; an empty set never excludes.
    alternation: Option<Regex>,
}

impl ExclusionFilter {
    /// Compile the configured skip entries into one anchored alternation.
    ///
    /// Entries may be regex fragments; an invalid fragment surfaces as a
    /// compile error attributable to the skip list as a whole.
    pub fn compile(patterns: &[String]) -> Result<Self, regex::Error> {
        if patterns.is_empty() {
            return Ok(Self { alternation: None });
        }
        let joined = patterns.join("|");
        let alternation = Regex::new(&format!("(?i)^(?:{joined})"))?;
        Ok(Self {
            alternation: Some(alternation),
        })
    }

    /// True when any skip entry prefix-matches the word.
    pub fn is_excluded(&self, word: &str) -> bool {
        match &self.alternation {
            Some(re) => re.is_match(word),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(patterns: &[&str]) -> ExclusionFilter {
        let owned: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        ExclusionFilter::compile(&owned).expect("patterns compile")
    }

    #[test]
    fn empty_pattern_set_never_excludes() {
        let f = filter(&[]);
        assert!(!f.is_excluded("anything"));
        assert!(!f.is_excluded(""));
    }

    #[test]
    fn exact_word_is_excluded() {
        let f = filter(&["the", "and"]);
        assert!(f.is_excluded("the"));
        assert!(f.is_excluded("and"));
        assert!(!f.is_excluded("banana"));
    }

    // Pins the anchor-prefix sharp edge: "the" also knocks out "theater".
    #[test]
    fn prefix_match_excludes_longer_words() {
        let f = filter(&["the"]);
        assert!(f.is_excluded("theater"));
        assert!(!f.is_excluded("lathe"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let f = filter(&["the"]);
        assert!(f.is_excluded("THE"));
        assert!(f.is_excluded("The"));
    }

    #[test]
    fn regex_fragments_are_honored() {
        let f = filter(&["[0-9]+"]);
        assert!(f.is_excluded("2024"));
        assert!(!f.is_excluded("year"));
    }

    #[test]
    fn invalid_fragment_is_a_compile_error() {
        let owned = vec!["(unclosed".to_string()];
        assert!(ExclusionFilter::compile(&owned).is_err());
    }
}
