use crate::api::TripApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::scope::RequestScope;
use crate::core::screen::{HistoryScreen, HistoryView};
use crate::errors::AppResult;
use crate::ui::Renderer;
use crate::utils::time::TimeFormatter;
use std::io::{self, BufRead, IsTerminal, Write};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { trip, interactive } = cmd {
        let api = TripApi::new(&cfg.base_url);
        let fmt = TimeFormatter::new(cfg.time_zone);
        let renderer = Renderer::new(cfg.color);

        let scope = RequestScope::new();
        let _interrupt = scope.teardown_on_interrupt();

        let mut screen = HistoryScreen::new();
        if io::stderr().is_terminal() {
            eprintln!("{}", renderer.loading());
        }
        screen.mount(&api, &scope).await?;

        if let Some(id) = trip
            && screen.state().is_populated()
        {
            screen.select_trip(*id)?;
        }

        if *interactive && screen.state().is_populated() {
            let stdin = io::stdin();
            let stdout = io::stdout();
            browse(&mut screen, &fmt, &renderer, &mut stdin.lock(), &mut stdout.lock())?;
        } else {
            print!("{}", render_view(&screen, &fmt, &renderer));
        }
    }
    Ok(())
}

/// Render whatever the history screen currently shows.
pub fn render_view(screen: &HistoryScreen, fmt: &TimeFormatter, renderer: &Renderer) -> String {
    match screen.view() {
        HistoryView::Loading => renderer.loading(),
        HistoryView::Unavailable => renderer.unavailable(),
        HistoryView::List(trips) => renderer.history(&Core::build_trip_list(trips, fmt)),
        HistoryView::Detail(_) => screen
            .detail(fmt)
            .map(|summary| renderer.trip_detail(&summary))
            .unwrap_or_default(),
    }
}

/// Interactive list/detail loop driven by line commands on `input`.
///
/// A number opens that trip, `b`/`back` returns to the list and
/// `q`/`quit` (or end of input) leaves.
pub fn browse<R: BufRead, W: Write>(
    screen: &mut HistoryScreen,
    fmt: &TimeFormatter,
    renderer: &Renderer,
    input: &mut R,
    out: &mut W,
) -> AppResult<()> {
    let mut redraw = true;

    loop {
        if redraw {
            write!(out, "{}", render_view(screen, fmt, renderer))?;
        }
        redraw = true;

        let prompt = match screen.view() {
            HistoryView::Detail(_) => "\n[b] back  [q] quit > ".to_string(),
            HistoryView::List(trips) if !trips.is_empty() => {
                format!("\nSelect a trip [1-{}], [q] quit > ", trips.len())
            }
            _ => "\n[q] quit > ".to_string(),
        };
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" => break,
            "b" | "back" => screen.back(),
            "" => redraw = false,
            cmd => match cmd.parse::<usize>() {
                Ok(position) => {
                    if let Err(e) = screen.select_position(position) {
                        writeln!(out, "⚠️  {e}")?;
                        redraw = false;
                    }
                }
                Err(_) => {
                    writeln!(out, "⚠️  Unknown command: {cmd}")?;
                    redraw = false;
                }
            },
        }
    }
    Ok(())
}
