use super::severity::Severity;
use serde::Serialize;

/// Per-severity tallies for one trip.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub unknown: usize,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: &Severity) {
        match severity {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::Unknown(_) => self.unknown += 1,
        }
    }

    pub fn get(&self, severity: &Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Unknown(_) => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.unknown
    }
}
