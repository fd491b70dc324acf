//! Report artifact rendering and writing.
//!
//! One text file per run: for each collection a 60-dash banner, the sorted
//! `word: count` table, then the keyword-match section with permalink lines.
//! Rendering is split from I/O so the layout is unit-testable; downstream
//! tooling may parse this output, so changes to it are compatibility-relevant.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use itertools::Itertools;
use tracing::info;

use crate::core::aggregate::CollectionAggregate;
use crate::core::search::SearchConfig;

const BANNER_WIDTH: usize = 60;

/// Dash-framed section banner.
pub fn banner(title: &str) -> String {
    let dashes = "-".repeat(BANNER_WIDTH);
    format!("{dashes}\n{title}:\n{dashes}\n")
}

/// The sorted word-frequency table, or a no-matches line.
pub fn render_counts(agg: &CollectionAggregate) -> String {
    if !agg.has_counts() {
        return format!("collection '{}' had no matches.\n", agg.name());
    }
    let table = agg
        .summary()
        .iter()
        .map(|(word, count)| format!("{word}: {count}"))
        .join("\n");
    format!("{table}\n\n\n")
}

/// The keyword-match section: `keyword: N matches` with tab-indented
/// permalink lines underneath.
pub fn render_matches(agg: &CollectionAggregate, link_base: &str) -> String {
    let mut out = String::from("Keyword Matches:\n");
    for (keyword, ids) in agg.keyword_report() {
        out.push_str(&format!("{keyword}: {} matches\n", ids.len()));
        for id in ids {
            out.push_str(&format!("\t{link_base}{id}\n"));
        }
        out.push('\n');
    }
    out
}

/// Full report body: one banner-headed section per registered collection.
pub fn render_body(search: &SearchConfig, link_base: &str) -> String {
    let mut out = String::new();
    for agg in search.collections.values() {
        out.push_str(&banner(agg.name()));
        out.push_str(&render_counts(agg));
        out.push_str(&render_matches(agg, link_base));
    }
    out
}

/// Body plus a single generated-timestamp header line.
pub fn render_report(search: &SearchConfig, link_base: &str) -> String {
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        "titlegraph report (generated {stamp})\n\n{}",
        render_body(search, link_base)
    )
}

pub fn write_report(path: &Path, search: &SearchConfig, link_base: &str) -> Result<()> {
    let report = render_report(search, link_base);
    std::fs::write(path, report)
        .with_context(|| format!("writing report to {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_aggregate() -> CollectionAggregate {
        let mut agg = CollectionAggregate::new("rust");
        for _ in 0..3 {
            agg.count_word("borrow");
        }
        agg.count_word("lifetime");
        agg.add_keyword_match("async", "abc123");
        agg.add_keyword_match("async", "def456");
        agg
    }

    #[test]
    fn banner_frames_the_title_in_dashes() {
        let b = banner("rust");
        let lines: Vec<&str> = b.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "-".repeat(60));
        assert_eq!(lines[1], "rust:");
        assert_eq!(lines[2], "-".repeat(60));
    }

    #[test]
    fn counts_render_sorted_descending() {
        let rendered = render_counts(&sample_aggregate());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "borrow: 3");
        assert_eq!(lines[1], "lifetime: 1");
    }

    #[test]
    fn empty_counts_render_a_no_matches_line() {
        let agg = CollectionAggregate::new("quiet");
        assert_eq!(
            render_counts(&agg),
            "collection 'quiet' had no matches.\n"
        );
    }

    #[test]
    fn matches_render_permalinks_indented() {
        let rendered = render_matches(&sample_aggregate(), "https://redd.it/");
        assert!(rendered.starts_with("Keyword Matches:\n"));
        assert!(rendered.contains("async: 2 matches\n"));
        assert!(rendered.contains("\thttps://redd.it/abc123\n"));
        assert!(rendered.contains("\thttps://redd.it/def456\n"));
    }

    #[test]
    fn body_emits_one_section_per_collection() {
        let mut search = SearchConfig::default();
        search.add_collection("alpha").unwrap();
        search.add_collection("beta").unwrap();

        let body = render_body(&search, "https://redd.it/");
        let alpha = body.find("alpha:").expect("alpha banner");
        let beta = body.find("beta:").expect("beta banner");
        assert!(alpha < beta, "sections follow registration order");
    }
}
