use crate::models::{Event, Severity};
use crate::utils::time::{TimeFormatter, parse_instant};
use serde::Serialize;

/// One row of the event timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub event_id: i64,
    pub time: String,
    pub description: String,
    pub severity: Severity,
}

/// Build timeline rows in the order the server sent the events.
///
/// Events are not re-sorted: server order is taken as chronological.
pub fn build_timeline(events: &[Event], fmt: &TimeFormatter) -> Vec<TimelineEntry> {
    events
        .iter()
        .map(|e| TimelineEntry {
            event_id: e.id,
            time: fmt.time(&e.timestamp),
            description: e.description(),
            severity: e.severity.clone(),
        })
        .collect()
}

/// Index pairs `(i, i + 1)` where event `i + 1` is strictly earlier than
/// event `i`. Unparseable timestamps are skipped.
pub fn out_of_order(events: &[Event]) -> Vec<(usize, usize)> {
    let instants: Vec<_> = events.iter().map(|e| parse_instant(&e.timestamp)).collect();

    instants
        .windows(2)
        .enumerate()
        .filter_map(|(i, w)| match (w[0], w[1]) {
            (Some(a), Some(b)) if b < a => Some((i, i + 1)),
            _ => None,
        })
        .collect()
}
