use crate::core::calculator::timeline::TimelineEntry;
use crate::models::SeverityCounts;
use serde::Serialize;

/// Everything the trip detail / latest summary card shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub trip_id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub total_events: usize,
    pub counts: SeverityCounts,
    pub timeline: Vec<TimelineEntry>,
}

/// One row of the trip history list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripListItem {
    pub position: usize, // 1-based, as typed by the user
    pub trip_id: i64,
    pub date: String,
    pub span: String, // "HH:MM → HH:MM"
    pub duration: String,
    pub badge: String,
}
