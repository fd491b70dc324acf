//! Interactive command shell.
//!
//! Two-letter commands mutate the search configuration, trigger scans, and
//! save the report. Invalid input and duplicate/missing term operations are
//! notices; only `ex` (or end of input) leaves the session. The loop is
//! generic over its reader and writer so scripted sessions drive it in tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cli::{AppContext, ShellArgs};
use crate::core::engine::{AnalysisEngine, ScanMode};
use crate::core::search::SearchConfig;
use crate::feed::{DirFeed, Feed};
use crate::infra::config::{Config, load_config};
use crate::infra::report::{render_counts, render_matches, write_report};
use crate::infra::terms::load_terms;

pub fn run(args: ShellArgs, ctx: &AppContext) -> Result<()> {
    let mut config = load_config().unwrap_or_default();
    if let Some(dir) = args.feed_dir {
        config.feed_dir = dir.display().to_string();
    }

    let keywords = load_terms(Path::new(&config.keywords_file))?;
    let exclusions = load_terms(Path::new(&config.exclusions_file))?;
    let collections = load_terms(Path::new(&config.collections_file))?;
    let search = SearchConfig::from_terms(keywords, exclusions, collections);

    let engine = AnalysisEngine::new(DirFeed::new(PathBuf::from(&config.feed_dir)))
        .with_trim_floor(config.scan.trim_floor);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(stdin.lock(), stdout.lock(), &engine, search, &config, ctx)
}

const MENU: &str = "\
as=add collection, ak=add keyword, aw=add skip word
ds=delete collection, dk=delete keyword, dw=delete skip word
ps=print collections, pk=print keywords, pw=print skip words
cs=clear collections, ck=clear keywords, cw=clear skip words
ks=keyword scan, wg=word graph, bs=combo scan
sf=save report, ex=exit
";

/// Drive one shell session to completion over arbitrary input/output.
pub fn run_session<R: BufRead, W: Write, F: Feed>(
    mut input: R,
    mut out: W,
    engine: &AnalysisEngine<F>,
    mut search: SearchConfig,
    config: &Config,
    ctx: &AppContext,
) -> Result<()> {
    writeln!(out, "{}", section("Main Menu", ctx))?;
    write!(out, "{MENU}")?;

    loop {
        write!(out, "enter command: ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break; // end of input closes the session like `ex`
        };
        let (cmd, inline_arg) = split_command(&line);

        match cmd {
            "" => continue,
            "as" => {
                let name = argument(&mut input, &mut out, inline_arg, "enter collection name: ")?;
                match search.add_collection(&name) {
                    Ok(()) => writeln!(out, "collection '{name}' added to the list.")?,
                    Err(notice) => writeln!(out, "{notice}")?,
                }
            }
            "ak" => {
                let keyword = argument(&mut input, &mut out, inline_arg, "enter keyword: ")?;
                match search.add_keyword(&keyword) {
                    Ok(()) => writeln!(out, "keyword '{keyword}' added to the list.")?,
                    Err(notice) => writeln!(out, "{notice}")?,
                }
            }
            "aw" => {
                let word = argument(&mut input, &mut out, inline_arg, "enter word or regex: ")?;
                match search.add_exclusion(&word) {
                    Ok(()) => writeln!(out, "skip word '{word}' added to the list.")?,
                    Err(notice) => writeln!(out, "{notice}")?,
                }
            }
            "ds" => {
                let name = argument(&mut input, &mut out, inline_arg, "enter collection name: ")?;
                match search.remove_collection(&name) {
                    Ok(()) => writeln!(out, "collection '{name}' deleted from the list.")?,
                    Err(notice) => writeln!(out, "{notice}")?,
                }
            }
            "dk" => {
                let keyword = argument(&mut input, &mut out, inline_arg, "enter keyword: ")?;
                match search.remove_keyword(&keyword) {
                    Ok(()) => writeln!(out, "keyword '{keyword}' removed from the list.")?,
                    Err(notice) => writeln!(out, "{notice}")?,
                }
            }
            "dw" => {
                let word = argument(&mut input, &mut out, inline_arg, "enter word or regex: ")?;
                match search.remove_exclusion(&word) {
                    Ok(()) => writeln!(out, "skip word '{word}' removed from the list.")?,
                    Err(notice) => writeln!(out, "{notice}")?,
                }
            }
            "ps" => {
                writeln!(out, "{}", section("Collections", ctx))?;
                for name in search.collections.keys() {
                    writeln!(out, "{name}")?;
                }
            }
            "pk" => {
                writeln!(out, "{}", section("Keywords", ctx))?;
                for keyword in &search.keywords {
                    writeln!(out, "{keyword}")?;
                }
            }
            "pw" => {
                writeln!(out, "{}", section("Skipped Words", ctx))?;
                for word in &search.exclusions {
                    writeln!(out, "{word}")?;
                }
            }
            "cs" => {
                search.clear_collections();
                writeln!(out, "collections cleared.")?;
            }
            "ck" => {
                search.clear_keywords();
                writeln!(out, "keywords cleared.")?;
            }
            "cw" => {
                search.clear_exclusions();
                writeln!(out, "skip words cleared.")?;
            }
            "ks" => run_scan(ScanMode::Keyword, engine, &mut search, config, &mut out)?,
            "wg" => run_scan(ScanMode::Graph, engine, &mut search, config, &mut out)?,
            "bs" => run_scan(ScanMode::Combo, engine, &mut search, config, &mut out)?,
            "sf" => {
                let path = PathBuf::from(&config.report.output_file);
                match write_report(&path, &search, &config.report.link_base) {
                    Ok(()) => writeln!(out, "report saved to {}", path.display())?,
                    Err(err) => writeln!(out, "could not save report: {err:#}")?,
                }
            }
            "ex" => {
                writeln!(out, "exit")?;
                break;
            }
            other => {
                debug!(command = other, "invalid shell command");
                writeln!(out, "invalid input")?;
            }
        }
    }
    Ok(())
}

/// Run one scan and print its per-collection results. A failed scan is a
/// notice; already-accumulated state stays usable and the session continues.
fn run_scan<W: Write, F: Feed>(
    mode: ScanMode,
    engine: &AnalysisEngine<F>,
    search: &mut SearchConfig,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    match engine.scan(mode, search, config.scan.limit) {
        Ok(report) => {
            writeln!(
                out,
                "scanned {} collections, {} titles ({} skipped)",
                report.collections, report.titles, report.skipped_titles
            )?;
            for agg in search.collections.values() {
                match mode {
                    ScanMode::Keyword => write!(out, "{}", render_matches(agg, &config.report.link_base))?,
                    ScanMode::Graph => write!(out, "{}", render_counts(agg))?,
                    ScanMode::Combo => {
                        write!(out, "{}", render_counts(agg))?;
                        write!(out, "{}", render_matches(agg, &config.report.link_base))?;
                    }
                }
            }
        }
        Err(err) => writeln!(out, "scan failed: {err:#}")?,
    }
    Ok(())
}

fn section(title: &str, ctx: &AppContext) -> String {
    let dashes = "-".repeat(60);
    let heading = if ctx.no_color {
        format!("{title}:")
    } else {
        format!("{}:", title.cyan())
    };
    format!("{dashes}\n{heading}\n{dashes}")
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    let read = input.read_line(&mut buf).context("reading command input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn split_command(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (line, None),
    }
}

/// Inline argument if given (`as rust`), otherwise prompt for one.
fn argument<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    inline: Option<&str>,
    prompt: &str,
) -> Result<String> {
    if let Some(arg) = inline {
        return Ok(arg.to_string());
    }
    write!(out, "{prompt}")?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}
