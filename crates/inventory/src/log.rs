//! Operation log for item additions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How an add operation ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Rejected { reason: String },
}

/// Record of one add operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub identifier: String,
    pub quantity: i64,
    pub outcome: Outcome,
    pub recorded_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn success(identifier: impl Into<String>, quantity: i64) -> Self {
        Self {
            identifier: identifier.into(),
            quantity,
            outcome: Outcome::Success,
            recorded_at: Utc::now(),
        }
    }

    pub fn rejected(identifier: impl Into<String>, quantity: i64, reason: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            quantity,
            outcome: Outcome::Rejected {
                reason: reason.into(),
            },
            recorded_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.outcome {
            Outcome::Success => write!(
                f,
                "{}: Added {} of {}",
                self.recorded_at, self.quantity, self.identifier
            ),
            Outcome::Rejected { reason } => write!(
                f,
                "{}: Rejected {} of {} ({reason})",
                self.recorded_at, self.quantity, self.identifier
            ),
        }
    }
}

/// Ordered log of add operations, owned by whoever asked for the adds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationLog {
    entries: Vec<LogEntry>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }
}

impl IntoIterator for OperationLog {
    type Item = LogEntry;
    type IntoIter = std::vec::IntoIter<LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OperationLog {
    type Item = &'a LogEntry;
    type IntoIter = core::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
