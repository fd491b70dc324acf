//! Per-collection aggregation state.
//!
//! Each registered collection owns one [`CollectionAggregate`]: a
//! word-frequency map and a keyword-match map, both insertion-ordered so
//! reports and tie-breaks are deterministic across runs. Mutation happens
//! only from the single in-flight scan for the collection; trimming runs
//! strictly between scan passes, never interleaved with counting.

use indexmap::IndexMap;

/// Accumulated word counts and keyword matches for one named collection.
#[derive(Debug, Clone, Default)]
pub struct CollectionAggregate {
    name: String,
    word_counts: IndexMap<String, u64>,
    keyword_matches: IndexMap<String, Vec<String>>,
}

impl CollectionAggregate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            word_counts: IndexMap::new(),
            keyword_matches: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Count one occurrence of a normalized word.
    ///
    /// Words of one character or less carry no signal and are ignored.
    /// First occurrence lazily initializes the entry to 1.
    pub fn count_word(&mut self, word: &str) {
        if word.chars().count() <= 1 {
            return;
        }
        *self.word_counts.entry(word.to_string()).or_insert(0) += 1;
    }

    /// Record that `item_id`'s title matched `keyword`.
    ///
    /// Idempotent per (keyword, id) pair; the first occurrence of a keyword
    /// creates its (ordered) match list.
    pub fn add_keyword_match(&mut self, keyword: &str, item_id: &str) {
        let ids = self.keyword_matches.entry(keyword.to_string()).or_default();
        if !ids.iter().any(|id| id == item_id) {
            ids.push(item_id.to_string());
        }
    }

    /// Drop every word counted strictly fewer than `minimum` times.
    ///
    /// Must only run between scan passes; counting and trimming the same
    /// aggregate concurrently is not supported.
    pub fn trim(&mut self, minimum: u64) {
        self.word_counts.retain(|_, count| *count >= minimum);
    }

    /// Reset to a fresh empty aggregate, keeping only the name.
    pub fn clear(&mut self) {
        *self = Self::new(std::mem::take(&mut self.name));
    }

    /// Word-count entries sorted by count descending; equal counts keep
    /// their insertion order (stable sort over an insertion-ordered map).
    pub fn summary(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .word_counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Keywords with their ordered matched item identifiers.
    pub fn keyword_report(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.keyword_matches
            .iter()
            .map(|(keyword, ids)| (keyword.as_str(), ids.as_slice()))
    }

    pub fn count_of(&self, word: &str) -> u64 {
        self.word_counts.get(word).copied().unwrap_or(0)
    }

    pub fn distinct_words(&self) -> usize {
        self.word_counts.len()
    }

    pub fn matches_for(&self, keyword: &str) -> Option<&[String]> {
        self.keyword_matches.get(keyword).map(Vec::as_slice)
    }

    pub fn has_counts(&self) -> bool {
        !self.word_counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_not_counted() {
        let mut agg = CollectionAggregate::new("test");
        agg.count_word("");
        agg.count_word("a");
        agg.count_word("ok");
        assert_eq!(agg.count_of(""), 0);
        assert_eq!(agg.count_of("a"), 0);
        assert_eq!(agg.count_of("ok"), 1);
        assert_eq!(agg.distinct_words(), 1);
    }

    #[test]
    fn counts_initialize_lazily_and_increment() {
        let mut agg = CollectionAggregate::new("test");
        agg.count_word("rust");
        assert_eq!(agg.count_of("rust"), 1);
        agg.count_word("rust");
        agg.count_word("rust");
        assert_eq!(agg.count_of("rust"), 3);
    }

    #[test]
    fn trim_removes_strictly_below_floor_and_is_idempotent() {
        let mut agg = CollectionAggregate::new("test");
        for _ in 0..3 {
            agg.count_word("keep");
        }
        agg.count_word("drop");
        agg.count_word("edge");
        agg.count_word("edge");

        agg.trim(2);
        assert_eq!(agg.count_of("keep"), 3);
        assert_eq!(agg.count_of("edge"), 2);
        assert_eq!(agg.count_of("drop"), 0);

        let after_once: Vec<(String, u64)> = agg
            .summary()
            .iter()
            .map(|(w, c)| (w.to_string(), *c))
            .collect();
        agg.trim(2);
        let after_twice: Vec<(String, u64)> = agg
            .summary()
            .iter()
            .map(|(w, c)| (w.to_string(), *c))
            .collect();
        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn keyword_match_is_idempotent_per_pair() {
        let mut agg = CollectionAggregate::new("test");
        agg.add_keyword_match("rust", "abc123");
        agg.add_keyword_match("rust", "abc123");
        agg.add_keyword_match("rust", "def456");
        assert_eq!(
            agg.matches_for("rust"),
            Some(&["abc123".to_string(), "def456".to_string()][..])
        );
    }

    #[test]
    fn clear_resets_both_maps_but_keeps_the_name() {
        let mut agg = CollectionAggregate::new("test");
        agg.count_word("word");
        agg.add_keyword_match("key", "id1");
        agg.clear();
        assert_eq!(agg.name(), "test");
        assert_eq!(agg.distinct_words(), 0);
        assert!(agg.matches_for("key").is_none());
    }

    #[test]
    fn summary_sorts_by_count_desc_with_stable_ties() {
        let mut agg = CollectionAggregate::new("test");
        agg.count_word("first");
        agg.count_word("second");
        agg.count_word("popular");
        agg.count_word("popular");

        let summary = agg.summary();
        assert_eq!(summary.len(), agg.distinct_words());
        assert_eq!(summary[0], ("popular", 2));
        // Tied entries keep insertion order.
        assert_eq!(summary[1], ("first", 1));
        assert_eq!(summary[2], ("second", 1));
    }
}
