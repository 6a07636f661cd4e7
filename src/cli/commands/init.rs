use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes `~/.roadguard/roadguard.conf` with the given `--base-url`
/// (or the default one). In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing roadguard…");

    let cfg = Config::init_all(cli.base_url.clone(), cli.test)?;

    info(format!("API base URL : {}", cfg.base_url));
    info(format!("Time zone    : {}", cfg.time_zone.as_str()));
    success("roadguard initialization completed!");
    Ok(())
}
