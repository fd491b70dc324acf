use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};
use crate::core::engine::DEFAULT_TRIM_FLOOR;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Flat term-list file: one keyword per line
    pub keywords_file: String,

    /// Flat term-list file: one skip word or regex fragment per line
    pub exclusions_file: String,

    /// Flat term-list file: one collection name per line
    pub collections_file: String,

    /// Directory of per-collection feed data (`<name>/{hot,top}.jsonl`)
    pub feed_dir: String,

    /// Default scan settings
    pub scan: ScanConfig,

    /// Default report settings
    pub report: ReportConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Cap on items fetched per collection; absent means exhaust the feed
    pub limit: Option<usize>,

    /// Words counted fewer times than this are dropped after each pass
    pub trim_floor: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_file: String,

    /// Prefix joined with an item id to form a permalink line
    pub link_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords_file: "keywords.txt".to_string(),
            exclusions_file: "skippedwords.txt".to_string(),
            collections_file: "collections.txt".to_string(),
            feed_dir: "feeds".to_string(),
            scan: ScanConfig {
                limit: None,
                trim_floor: DEFAULT_TRIM_FLOOR,
            },
            report: ReportConfig {
                output_file: "output.txt".to_string(),
                link_base: "https://redd.it/".to_string(),
            },
        }
    }
}

pub fn load_config() -> Result<Config> {
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["titlegraph.toml", ".titlegraph.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // Add environment variables with TITLEGRAPH_ prefix
    builder = builder.add_source(config::Environment::with_prefix("TITLEGRAPH").separator("_"));

    let cfg = builder.build().context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(args: InitArgs, ctx: &AppContext) -> Result<()> {
    let config_path = args.path.join("titlegraph.toml");

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
