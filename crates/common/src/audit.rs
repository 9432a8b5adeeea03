//! Append-only audit trail.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Human-readable description of what happened.
    pub message: String,
}

impl std::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.recorded_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.message
        )
    }
}

/// Ordered log of progress messages for one payment.
///
/// Entries can only be appended. There is no API to remove, truncate or
/// reorder them, so the trail's length grows monotonically over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
}

impl AuditTrail {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message stamped with the current time.
    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.push(AuditEntry {
            recorded_at: Utc::now(),
            message: message.into(),
        });
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Returns the most recent entry.
    pub fn last(&self) -> Option<&AuditEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the bare messages, without timestamps.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    /// Renders every entry as `"<timestamp> - <message>"`.
    pub fn to_lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Returns true if any entry's message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages().any(|m| m.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trail_is_empty() {
        let trail = AuditTrail::new();
        assert!(trail.is_empty());
        assert!(trail.last().is_none());
    }

    #[test]
    fn test_record_preserves_order() {
        let mut trail = AuditTrail::new();
        trail.record("first");
        trail.record("second");
        trail.record("third");

        let messages: Vec<&str> = trail.messages().collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(trail.last().unwrap().message, "third");
    }

    #[test]
    fn test_timestamps_are_non_decreasing() {
        let mut trail = AuditTrail::new();
        for i in 0..10 {
            trail.record(format!("entry {i}"));
        }
        let stamps: Vec<_> = trail.entries().iter().map(|e| e.recorded_at).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_line_format() {
        let mut trail = AuditTrail::new();
        trail.record("Context created");
        let line = &trail.to_lines()[0];
        assert!(line.ends_with(" - Context created"));
        assert!(line.contains('T'));
    }

    #[test]
    fn test_contains() {
        let mut trail = AuditTrail::new();
        trail.record("Route selected for tx 1: RTP_EURO_CLEARING");
        assert!(trail.contains("RTP_EURO_CLEARING"));
        assert!(!trail.contains("RTP_DOMESTIC"));
    }
}
