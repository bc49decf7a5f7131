//! Rivalry CLI - Command-line interface for the rivalry web.

use anyhow::Context;
use clap::Parser;
use rivalry_cli::commands;
use rivalry_cli::{Cli, Config, Formatter};
use rivalry_store::RivalryGraph;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, creating the default file on first run
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let path = Config::path()?;
            Config::load_or_init(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let data_path = config.data_file(cli.data)?;
    let mut graph = RivalryGraph::load(&data_path)
        .with_context(|| format!("Failed to load rivalry data from {}", data_path.display()))?;

    let output = commands::execute(
        cli.command,
        &mut graph,
        &data_path,
        &config.layout,
        &formatter,
    )?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
