use crate::api::{TripApi, TripSource};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scope::RequestScope;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use std::io;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        events,
        force,
    } = cmd
    {
        let api = TripApi::new(&cfg.base_url);
        let scope = RequestScope::new();
        let _interrupt = scope.teardown_on_interrupt();

        // Unlike the screens, an export has nothing to show on failure:
        // the error is reported as is.
        let trips = scope
            .run(api.list_trips())
            .await
            .ok_or(AppError::Cancelled)??;

        ExportLogic::export(&trips, format, file, *events, *force, &mut io::stdin().lock())?;
    }
    Ok(())
}
