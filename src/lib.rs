//! roadguard library root.
//! Exposes the CLI parser, the high-level run() function, and the modules
//! behind the latest-trip and trip-history screens.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;
use ui::messages::warning;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Latest => cli::commands::latest::handle(cfg).await,
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg).await,
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg).await,
    }
}

/// Config file values with command-line overrides applied on top.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    // test mode never reads the user's config file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        match Config::load() {
            Ok(cfg) => cfg,
            // init and config are how a broken file gets repaired
            Err(e) if cli.command.repairs_config() => {
                warning(format!("Ignoring invalid config file ({e}), using defaults"));
                Config::default()
            }
            Err(e) => return Err(e),
        }
    };

    if let Some(url) = &cli.base_url {
        cfg.base_url = url.clone();
    }
    if let Some(zone) = cli.display_zone() {
        cfg.time_zone = zone;
    }
    if cli.plain {
        cfg.color = false;
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Diagnostics to stderr. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "roadguard=debug",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = resolve_config(&cli)?;
    ui::messages::set_color(cfg.color);
    tracing::debug!(base_url = %cfg.base_url, zone = cfg.time_zone.as_str(), "Configuration resolved");

    dispatch(&cli, &cfg).await
}
