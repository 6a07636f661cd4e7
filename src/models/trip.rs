use super::event::Event;
use serde::{Deserialize, Serialize};

/// A recorded driving session, as served by the trips API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub start_time: String,
    /// `None` while the trip is still in progress.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Pre-formatted by the server ("42 mins", "In progress"); shown verbatim.
    pub duration: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Trip {
    /// Badge text for the history list, e.g. "3 events".
    pub fn events_badge(&self) -> String {
        format!("{} events", self.events.len())
    }}
