use crate::core::calculator::severity::aggregate_severities;
use crate::models::Trip;
use serde::Serialize;

/// Flat per-trip row for CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TripExport {
    pub trip_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub events: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub unknown: usize,
}

/// Flat per-event row for CSV export (`--events`).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventExport {
    pub trip_id: i64,
    pub event_id: i64,
    pub timestamp: String,
    pub severity: String,
    pub duration: f64,
}

impl From<&Trip> for TripExport {
    fn from(t: &Trip) -> Self {
        let counts = aggregate_severities(&t.events);
        Self {
            trip_id: t.id,
            start_time: t.start_time.clone(),
            end_time: t.end_time.clone().unwrap_or_default(),
            duration: t.duration.clone(),
            events: t.events.len(),
            low: counts.low,
            medium: counts.medium,
            high: counts.high,
            unknown: counts.unknown,
        }
    }
}

pub(crate) fn trips_to_rows(trips: &[Trip]) -> Vec<TripExport> {
    trips.iter().map(TripExport::from).collect()
}

pub(crate) fn events_to_rows(trips: &[Trip]) -> Vec<EventExport> {
    trips
        .iter()
        .flat_map(|t| {
            t.events.iter().map(move |e| EventExport {
                trip_id: t.id,
                event_id: e.id,
                timestamp: e.timestamp.clone(),
                severity: e.severity.as_str().to_string(),
                duration: e.duration,
            })
        })
        .collect()
}
