use serde::{Deserialize, Serialize};

/// Urgency of a drowsiness event: `low < medium < high`.
///
/// The wire format is a closed set of three lowercase strings. Anything
/// else the server sends is kept as `Unknown` so that aggregation stays
/// total instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Unknown(String),
}

impl Severity {
    /// Known severities, in increasing order of urgency.
    pub const KNOWN: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Convert wire string → enum (exact match, as sent by the server)
    pub fn from_wire(s: &str) -> Self {
        match s {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            other => Severity::Unknown(other.to_string()),
        }
    }

    /// Convert enum → wire string
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Unknown(raw) => raw,
        }
    }

    /// Capitalized label used on pills and timeline rows.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Unknown(_) => "Unknown",
        }
    }

    /// Ordinal rank; unknown values rank below `low`.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Unknown(_) => 0,
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        Severity::from_wire(&s)
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        s.as_str().to_string()
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.as_str().cmp(other.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_round_trip() {
        for s in ["low", "medium", "high"] {
            assert_eq!(Severity::from_wire(s).as_str(), s);
        }
    }

    #[test]
    fn unrecognized_value_is_kept_as_unknown() {
        let s: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(s, Severity::Unknown("critical".into()));
        assert_eq!(s.label(), "Unknown");
    }

    #[test]
    fn wire_match_is_case_sensitive() {
        assert_eq!(Severity::from_wire("High"), Severity::Unknown("High".into()));
    }

    #[test]
    fn ordered_by_urgency() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::Unknown("x".into()) < Severity::Low);
    }
}
