//! One-shot `tg scan`: load term lists, run a scan mode over every
//! registered collection, write the report artifact.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;

use crate::cli::{AppContext, ScanArgs};
use crate::core::engine::AnalysisEngine;
use crate::core::search::SearchConfig;
use crate::feed::DirFeed;
use crate::infra::config::load_config;
use crate::infra::report::render_report;
use crate::infra::terms::load_terms;

pub fn run(args: ScanArgs, ctx: &AppContext) -> Result<()> {
    let config = load_config().unwrap_or_default();

    let keywords = load_terms(Path::new(&config.keywords_file))?;
    let exclusions = load_terms(Path::new(&config.exclusions_file))?;
    let collections = load_terms(Path::new(&config.collections_file))?;
    let mut search = SearchConfig::from_terms(keywords, exclusions, collections);

    if search.collections.is_empty() {
        anyhow::bail!(
            "no collections registered; add names to {} (one per line)",
            config.collections_file
        );
    }

    let feed_dir = args
        .feed_dir
        .unwrap_or_else(|| PathBuf::from(&config.feed_dir));
    let engine = AnalysisEngine::new(DirFeed::new(feed_dir)).with_trim_floor(config.scan.trim_floor);

    let limit = args.limit.or(config.scan.limit);
    let report = engine.scan(args.mode.into(), &mut search, limit)?;
    info!(
        collections = report.collections,
        titles = report.titles,
        skipped = report.skipped_titles,
        "scan complete"
    );

    let text = render_report(&search, &config.report.link_base);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.report.output_file));
    std::fs::write(&output, &text)
        .with_context(|| format!("writing report to {}", output.display()))?;

    if args.stdout {
        print!("{text}");
    }

    if !ctx.quiet {
        let summary = format!(
            "scanned {} collections, {} titles ({} skipped); report at {}",
            report.collections,
            report.titles,
            report.skipped_titles,
            output.display()
        );
        if ctx.no_color {
            println!("{summary}");
        } else {
            println!("{}", summary.green());
        }
    }
    Ok(())
}
