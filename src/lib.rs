//! **titlegraph** - Aggregates feed post titles into keyword indexes and word-frequency graphs
//!
//! Scans named collections of titled items from an injected feed collaborator,
//! records which configured keywords appear in each title, counts normalized
//! title words with stopword exclusion, and trims rarely-used words before
//! reporting. Single-threaded by design; the upstream feed enforces its own
//! pacing and everything here runs scan-then-trim in strict sequence.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Core aggregation engine - normalization, exclusion, counting, scanning
pub mod core {
    /// Title-token normalization (punctuation stripping, case folding, safe-range filtering)
    pub mod normalize;
    pub use normalize::normalize;

    /// Stopword exclusion via a compiled anchored alternation
    pub mod exclude;
    pub use exclude::ExclusionFilter;

    /// Per-collection word-count and keyword-match state
    pub mod aggregate;
    pub use aggregate::CollectionAggregate;

    /// Keywords, skip words, and registered collections
    pub mod search;
    pub use search::{Notice, SearchConfig, TermKind};

    /// Scan orchestration over the feed collaborator
    pub mod engine;
    pub use engine::{AnalysisEngine, DEFAULT_TRIM_FLOOR, ScanMode, ScanReport};
}

/// Feed collaborator seam - trait plus directory-backed and in-memory feeds
pub mod feed;

/// Infrastructure - configuration, term lists, and report output
pub mod infra {
    /// Configuration management with TOML support
    pub mod config;
    pub use config::{Config, init as config_init, load_config};

    /// Flat term-list file loading
    pub mod terms;
    pub use terms::load_terms;

    /// Report artifact rendering and writing
    pub mod report;
    pub use report::{render_report, write_report};
}

/// One-shot scan command
pub mod scan;
pub use scan::run as scan_run;

/// Interactive command shell
pub mod shell;
pub use shell::run as shell_run;

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use core::{AnalysisEngine, CollectionAggregate, ScanMode, ScanReport, SearchConfig};
pub use feed::{DirFeed, Feed, FeedItem, FeedOrder, MemoryFeed};
pub use infra::{Config, load_config};
