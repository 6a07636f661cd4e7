//! Time utilities: parsing server ISO-8601 timestamps and formatting them
//! as time-of-day and dates for the trip screens.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Placeholder for a timestamp that cannot be shown as HH:MM.
pub const INVALID_TIME: &str = "--:--";
/// Placeholder for a timestamp that cannot be shown as a date.
pub const INVALID_DATE: &str = "Invalid date";

/// Offset-less layouts, interpreted in the display zone.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Zone used to present timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
}

impl DisplayZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayZone::Local => "local",
            DisplayZone::Utc => "utc",
        }
    }
}

/// Long form on the latest-trip card, short form on the history screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// "Saturday, 1 March 2025"
    Long,
    /// "Sat, 1 Mar 2025"
    Short,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Long => "%A, %-d %B %Y",
            DateStyle::Short => "%a, %-d %b %Y",
        }
    }
}

/// Pure timestamp formatter bound to a display zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeFormatter {
    zone: DisplayZone,
}

impl TimeFormatter {
    pub fn new(zone: DisplayZone) -> Self {
        Self { zone }
    }

    /// "HH:MM", 24-hour clock.
    pub fn time(&self, iso: &str) -> String {
        self.render(iso, "%H:%M")
            .unwrap_or_else(|| INVALID_TIME.to_string())
    }

    /// Like [`time`](Self::time) but for an optional end timestamp.
    pub fn time_opt(&self, iso: Option<&str>) -> String {
        iso.map(|s| self.time(s))
            .unwrap_or_else(|| INVALID_TIME.to_string())
    }

    pub fn date(&self, iso: &str, style: DateStyle) -> String {
        self.render(iso, style.pattern())
            .unwrap_or_else(|| INVALID_DATE.to_string())
    }

    fn render(&self, iso: &str, pattern: &str) -> Option<String> {
        match self.zone {
            DisplayZone::Local => format_in(iso, &Local, pattern),
            DisplayZone::Utc => format_in(iso, &Utc, pattern),
        }
    }
}

fn format_in<Tz>(iso: &str, tz: &Tz, pattern: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    parse_in(iso, tz).map(|dt| dt.format(pattern).to_string())
}

fn parse_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let iso = iso.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(tz));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(iso, fmt).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
}

/// Absolute instant of a timestamp, used for ordering checks.
/// Offset-less values are read as UTC.
pub fn parse_instant(iso: &str) -> Option<DateTime<Utc>> {
    parse_in(iso, &Utc)
}
