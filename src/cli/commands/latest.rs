use crate::api::TripApi;
use crate::config::Config;
use crate::core::scope::RequestScope;
use crate::core::screen::{LatestTripScreen, LatestView};
use crate::errors::AppResult;
use crate::ui::Renderer;
use crate::utils::time::TimeFormatter;
use std::io::IsTerminal;

/// Handle the `latest` command: mount the latest-trip screen and print it.
pub async fn handle(cfg: &Config) -> AppResult<()> {
    let api = TripApi::new(&cfg.base_url);
    let fmt = TimeFormatter::new(cfg.time_zone);
    let renderer = Renderer::new(cfg.color);

    let scope = RequestScope::new();
    let _interrupt = scope.teardown_on_interrupt();

    let mut screen = LatestTripScreen::new();
    if std::io::stderr().is_terminal() {
        eprintln!("{}", renderer.loading());
    }

    screen.mount(&api, &scope).await?;

    match screen.view(&fmt) {
        LatestView::Summary(summary) => print!("{}", renderer.latest(&summary)),
        LatestView::Unavailable => print!("{}", renderer.unavailable()),
        LatestView::Loading => print!("{}", renderer.loading()),
    }
    Ok(())
}
