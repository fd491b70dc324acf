//! Scan orchestration over an injected feed.
//!
//! The engine drives one finite pass per registered collection: pull
//! (title, id) items, match keywords and/or count normalized words, then trim
//! rare words once the collection's pass completes. Phases are strictly
//! sequential; nothing here is safe to parallelize and nothing needs to be,
//! since the upstream enforces an inter-call delay anyway.

use aho_corasick::AhoCorasick;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::core::aggregate::CollectionAggregate;
use crate::core::exclude::ExclusionFilter;
use crate::core::normalize::normalize;
use crate::core::search::SearchConfig;
use crate::feed::{Feed, FeedItem, FeedOrder, FeedStream};

/// Words counted fewer than this many times are dropped after each
/// collection's frequency pass, unless overridden.
pub const DEFAULT_TRIM_FLOOR: u64 = 10;

/// The three supported scan modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Keyword substring matching over the "hot" ordering; no trimming.
    Keyword,
    /// Word-frequency counting over the "top" ordering, trimmed per collection.
    Graph,
    /// Both in one pass over "hot"; titles outside the safe character range
    /// are skipped whole.
    Combo,
}

/// What a scan pass touched, surfaced to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub collections: usize,
    pub titles: usize,
    /// Titles dropped whole because they fell outside the safe character
    /// range (combo mode only).
    pub skipped_titles: usize,
}

/// Orchestrates scans for every registered collection.
///
/// The feed is injected at construction so tests and embedders can
/// substitute [`crate::feed::MemoryFeed`] for the real collaborator.
pub struct AnalysisEngine<F: Feed> {
    feed: F,
    trim_floor: u64,
}

impl<F: Feed> AnalysisEngine<F> {
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            trim_floor: DEFAULT_TRIM_FLOOR,
        }
    }

    /// Override the per-collection trim floor (default 10).
    pub fn with_trim_floor(mut self, floor: u64) -> Self {
        self.trim_floor = floor;
        self
    }

    /// Dispatch on scan mode. `limit` caps items per collection; `None`
    /// exhausts each collection's feed.
    pub fn scan(
        &self,
        mode: ScanMode,
        search: &mut SearchConfig,
        limit: Option<usize>,
    ) -> Result<ScanReport> {
        match mode {
            ScanMode::Keyword => self.keyword_scan(search, limit),
            ScanMode::Graph => self.word_graph_scan(search, limit),
            ScanMode::Combo => self.combo_scan(search, limit),
        }
    }

    /// Record every configured keyword that appears as a case-sensitive
    /// literal substring of a title. Keyword matches are never trimmed.
    pub fn keyword_scan(
        &self,
        search: &mut SearchConfig,
        limit: Option<usize>,
    ) -> Result<ScanReport> {
        let SearchConfig {
            keywords,
            collections,
            ..
        } = search;
        let keywords: &[String] = keywords;
        let matcher = keyword_matcher(keywords)?;
        let total = collections.len();
        let mut report = ScanReport::default();

        for (idx, (name, agg)) in collections.iter_mut().enumerate() {
            info!(collection = %name, "keyword scan ({} of {total})", idx + 1);
            let stream = self
                .feed
                .fetch(name, FeedOrder::Hot)
                .with_context(|| format!("fetching 'hot' feed for collection '{name}'"))?;

            for item in limited(stream, limit) {
                let item = item.with_context(|| format!("scanning collection '{name}'"))?;
                report.titles += 1;
                match_keywords(&matcher, keywords, &item, agg);
            }
            report.collections += 1;
        }
        Ok(report)
    }

    /// Count normalized title words per collection, then trim rare ones.
    pub fn word_graph_scan(
        &self,
        search: &mut SearchConfig,
        limit: Option<usize>,
    ) -> Result<ScanReport> {
        let SearchConfig {
            exclusions,
            collections,
            ..
        } = search;
        let filter =
            ExclusionFilter::compile(exclusions).context("compiling exclusion patterns")?;
        let total = collections.len();
        let mut report = ScanReport::default();

        for (idx, (name, agg)) in collections.iter_mut().enumerate() {
            info!(collection = %name, "word graph scan ({} of {total})", idx + 1);
            let stream = self
                .feed
                .fetch(name, FeedOrder::Top)
                .with_context(|| format!("fetching 'top' feed for collection '{name}'"))?;

            for item in limited(stream, limit) {
                let item = item.with_context(|| format!("scanning collection '{name}'"))?;
                report.titles += 1;
                count_title_words(&filter, &item.title, agg);
            }

            // Trim only after the whole collection has been scanned.
            agg.trim(self.trim_floor);
            report.collections += 1;
        }
        Ok(report)
    }

    /// Keyword matching and frequency counting in a single "hot" pass.
    ///
    /// A title containing any character outside the safe range is skipped
    /// whole; the skip is counted in the report rather than failing the run.
    pub fn combo_scan(
        &self,
        search: &mut SearchConfig,
        limit: Option<usize>,
    ) -> Result<ScanReport> {
        let SearchConfig {
            keywords,
            exclusions,
            collections,
        } = search;
        let keywords: &[String] = keywords;
        let matcher = keyword_matcher(keywords)?;
        let filter =
            ExclusionFilter::compile(exclusions).context("compiling exclusion patterns")?;
        let total = collections.len();
        let mut report = ScanReport::default();

        for (idx, (name, agg)) in collections.iter_mut().enumerate() {
            info!(collection = %name, "combo scan ({} of {total})", idx + 1);
            let stream = self
                .feed
                .fetch(name, FeedOrder::Hot)
                .with_context(|| format!("fetching 'hot' feed for collection '{name}'"))?;

            for item in limited(stream, limit) {
                let item = item.with_context(|| format!("scanning collection '{name}'"))?;
                report.titles += 1;
                if !item.title.is_ascii() {
                    debug!(collection = %name, id = %item.id, "skipping unsafe title");
                    report.skipped_titles += 1;
                    continue;
                }
                match_keywords(&matcher, keywords, &item, agg);
                count_title_words(&filter, &item.title, agg);
            }

            agg.trim(self.trim_floor);
            report.collections += 1;
        }
        Ok(report)
    }
}

fn keyword_matcher(keywords: &[String]) -> Result<AhoCorasick> {
    AhoCorasick::new(keywords).context("building keyword matcher")
}

/// Record every keyword occurring in the raw title, once per title, in
/// keyword-list order. Overlapping keywords all count.
fn match_keywords(
    matcher: &AhoCorasick,
    keywords: &[String],
    item: &FeedItem,
    agg: &mut CollectionAggregate,
) {
    let matched: BTreeSet<usize> = matcher
        .find_overlapping_iter(&item.title)
        .map(|m| m.pattern().as_usize())
        .collect();
    for pattern in matched {
        agg.add_keyword_match(&keywords[pattern], &item.id);
    }
}

/// Split, normalize, exclude, count. Empty and one-character results fall
/// out inside `count_word`.
fn count_title_words(filter: &ExclusionFilter, title: &str, agg: &mut CollectionAggregate) {
    for token in title.split_whitespace() {
        let word = normalize(token);
        if !filter.is_excluded(&word) {
            agg.count_word(&word);
        }
    }
}

fn limited(stream: FeedStream, limit: Option<usize>) -> FeedStream {
    match limit {
        Some(n) => Box::new(stream.take(n)),
        None => stream,
    }
}
