use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::engine::ScanMode;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
}

#[derive(Parser)]
#[command(name = "titlegraph")]
#[command(
    about = "A lightweight CLI for aggregating feed post titles into keyword indexes and word-frequency graphs"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one scan over every registered collection and write the report
    Scan(ScanArgs),

    /// Start the interactive command shell
    Shell(ShellArgs),

    /// Initialize a titlegraph.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliScanMode {
    /// Match keywords against titles (hot ordering, no trimming)
    Keyword,
    /// Count title words (top ordering, trimmed per collection)
    Graph,
    /// Keywords and word counts in one pass (hot ordering)
    Combo,
}

impl From<CliScanMode> for ScanMode {
    fn from(mode: CliScanMode) -> Self {
        match mode {
            CliScanMode::Keyword => ScanMode::Keyword,
            CliScanMode::Graph => ScanMode::Graph,
            CliScanMode::Combo => ScanMode::Combo,
        }
    }
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Scan mode
    #[arg(value_enum)]
    pub mode: CliScanMode,

    /// Cap items fetched per collection (default: exhaust the feed)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Feed directory override (default from config)
    #[arg(long)]
    pub feed_dir: Option<PathBuf>,

    /// Report output path override (default from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the report to stdout as well as writing it
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Parser)]
pub struct ShellArgs {
    /// Feed directory override (default from config)
    #[arg(long)]
    pub feed_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}
