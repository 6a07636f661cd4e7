use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// A single detected drowsiness occurrence within a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub timestamp: String, // ISO-8601, authoritative from the server
    pub severity: Severity,
    pub duration: f64, // seconds with eyes closed
}

impl Event {
    /// Eyes-closed duration as shown on the timeline: whole numbers
    /// without decimals (`4`), fractional values as sent (`2.5`).
    pub fn duration_label(&self) -> String {
        if self.duration.fract() == 0.0 && self.duration.is_finite() {
            format!("{}", self.duration as i64)
        } else {
            format!("{}", self.duration)
        }
    }

    /// Timeline description, e.g. "Eyes closed for 4s".
    pub fn description(&self) -> String {
        format!("Eyes closed for {}s", self.duration_label())
    }
}
