use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::config::{AppConfig, ConfigSource};
use connect_four::logging::init_logging;
use connect_four::ui::{terminal, App};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (config, source) = AppConfig::read_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // CLI overrides go in before the single validation pass
    let config = config.with_board_overrides(cli.width, cli.height);
    config.validate().context("validating configuration")?;

    init_logging(&config.logging).context("initializing logging")?;
    if source == ConfigSource::Defaults {
        tracing::warn!(
            path = %cli.config.display(),
            "config file not found, using defaults"
        );
    }
    tracing::info!(
        width = config.board.width,
        height = config.board.height,
        "starting connect four"
    );

    run(&config).context("running terminal UI")
}

fn run(config: &AppConfig) -> io::Result<()> {
    // The guard restores the terminal on every exit path, panics included
    let (_guard, mut terminal) = terminal::init()?;

    let mut app = App::new(config);
    app.run(&mut terminal)
}
