use crate::models::{Event, SeverityCounts};

/// Count events per severity bucket.
///
/// Every event lands in exactly one bucket, so the total of the returned
/// counts always equals `events.len()`.
pub fn aggregate_severities(events: &[Event]) -> SeverityCounts {
    events.iter().fold(SeverityCounts::default(), |mut acc, e| {
        acc.record(&e.severity);
        acc
    })
}
