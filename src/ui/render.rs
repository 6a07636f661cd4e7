//! Text rendering of the trip screens.
//!
//! Every function returns the full screen as a `String`; the commands
//! decide where to print it.

use crate::core::calculator::timeline::TimelineEntry;
use crate::models::{Severity, TripListItem, TripSummary};
use crate::utils::colors::{ACCENT, Painter};
use crate::utils::formatting::count_label;
use crate::utils::table::Table;

pub const EMPTY_TITLE: &str = "No trips recorded yet";
pub const EMPTY_HINT: &str = "Complete a drive to see your summary";
pub const NO_EVENTS: &str = "No events this trip";
pub const BACK_HINT: &str = "← Back to History";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    painter: Painter,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self {
            painter: Painter::new(color),
        }
    }

    pub fn loading(&self) -> String {
        self.painter.muted("⏳ Fetching trip data...")
    }

    /// Shared by "request failed" and "nothing recorded": the user sees
    /// the same placeholder either way.
    pub fn unavailable(&self) -> String {
        format!(
            "🚗\n{}\n{}\n",
            self.painter.bold(EMPTY_TITLE),
            self.painter.muted(EMPTY_HINT)
        )
    }

    pub fn latest(&self, summary: &TripSummary) -> String {
        let mut out = self.heading("RoadGuard", Some("Latest Trip Summary"));
        out.push_str(&self.trip_cards(summary));
        out
    }

    pub fn trip_detail(&self, summary: &TripSummary) -> String {
        let mut out = format!("{}\n\n", self.painter.colour(BACK_HINT, ACCENT));
        out.push_str(&self.heading("Trip Detail", None));
        out.push_str(&self.trip_cards(summary));
        out
    }

    pub fn history(&self, items: &[TripListItem]) -> String {
        let mut out = self.heading("RoadGuard", Some("Trip History"));

        if items.is_empty() {
            out.push_str(&self.unavailable_without_hint());
            return out;
        }

        let mut table = Table::new(vec!["#", "Date", "Time", "Duration", "Events"]);
        for item in items {
            table.add_row(vec![
                item.position.to_string(),
                item.date.clone(),
                item.span.clone(),
                item.duration.clone(),
                item.badge.clone(),
            ]);
        }
        out.push_str(&table.render());
        out
    }

    // ---- private helpers ----

    fn unavailable_without_hint(&self) -> String {
        format!("🚗\n{}\n", self.painter.bold(EMPTY_TITLE))
    }

    fn heading(&self, title: &str, subtitle: Option<&str>) -> String {
        let mut out = format!("{}\n", self.painter.bold(title));
        if let Some(sub) = subtitle {
            out.push_str(&format!("{}\n", self.painter.muted(sub)));
        }
        out.push('\n');
        out
    }

    fn trip_cards(&self, s: &TripSummary) -> String {
        let mut out = String::new();

        // Trip info card
        out.push_str(&format!("📅  {}\n", s.date));
        let mut info = Table::new(vec!["Start", "End", "Duration"]).indent(2);
        info.add_row(vec![s.start.clone(), s.end.clone(), s.duration.clone()]);
        out.push_str(&info.render());
        out.push('\n');

        // Events summary card
        out.push_str("⚠️  Drowsiness Events\n");
        out.push_str(&format!("  {}\n", self.painter.bold(&s.total_events.to_string())));
        out.push_str(&format!("  {}\n\n", self.pills(s)));

        // Timeline
        out.push_str("🕐  Event Timeline\n");
        if s.timeline.is_empty() {
            out.push_str(&format!("  {}\n", self.painter.muted(NO_EVENTS)));
        }
        for entry in &s.timeline {
            out.push_str(&self.timeline_row(entry));
        }
        out
    }

    fn pills(&self, s: &TripSummary) -> String {
        let mut pills: Vec<String> = Severity::KNOWN
            .iter()
            .map(|sev| self.pill(&count_label(s.counts.get(sev), sev.label()), sev))
            .collect();

        if s.counts.unknown > 0 {
            let unknown = Severity::Unknown(String::new());
            pills.push(self.pill(&count_label(s.counts.unknown, unknown.label()), &unknown));
        }
        pills.join("  ")
    }

    fn pill(&self, text: &str, severity: &Severity) -> String {
        self.painter.severity(&format!("[{text}]"), severity)
    }

    fn timeline_row(&self, e: &TimelineEntry) -> String {
        format!(
            "  {} {}  {}  {}\n",
            self.painter.severity("●", &e.severity),
            self.painter.bold(&e.time),
            self.painter.muted(&e.description),
            self.pill(e.severity.label(), &e.severity)
        )
    }
}
