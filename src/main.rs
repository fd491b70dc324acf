use anyhow::Result;
use clap::Parser;
use titlegraph::cli::{AppContext, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG controls verbosity; default to warnings only on stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    match cli.command {
        Commands::Scan(args) => titlegraph::scan_run(args, &ctx),
        Commands::Shell(args) => titlegraph::shell_run(args, &ctx),
        Commands::Init(args) => titlegraph::infra::config::init(args, &ctx),
        Commands::Completions(args) => titlegraph::completion::run(args),
    }
}
