use crate::params::ParamValues;
use crate::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

// ---------------------------------------------------------------------------
// EntryStatus
// ---------------------------------------------------------------------------

/// Terminal status of a recorded submission. `Pending` exists for wire
/// compatibility; entries are immutable once appended, so the pipeline only
/// ever writes terminal statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    Pending,
    Executed,
    Failed,
    Rejected,
}

impl EntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryStatus::Pending => "PENDING",
            EntryStatus::Executed => "EXECUTED",
            EntryStatus::Failed => "FAILED",
            EntryStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub role: Role,
    pub action_type: String,
    pub status: EntryStatus,
    pub parameters: ParamValues,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

// ---------------------------------------------------------------------------
// AuditLog
// ---------------------------------------------------------------------------

/// Session-scoped audit trail. Append-only; iteration is newest first, the
/// order an operator reads the trail in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditLog {
    entries: VecDeque<AuditEntry>,
    seq: u64,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one submission outcome and returns the stored entry. Ids are
    /// monotonic within the session, so they stay unique even though the log
    /// itself never shrinks.
    pub fn append(
        &mut self,
        user: &str,
        role: Role,
        action_type: &str,
        status: EntryStatus,
        parameters: ParamValues,
        advisory: Option<String>,
    ) -> &AuditEntry {
        self.seq += 1;
        let entry = AuditEntry {
            id: format!("aud-{:04}", self.seq),
            timestamp: Utc::now(),
            user: user.to_string(),
            role,
            action_type: action_type.to_string(),
            status,
            parameters,
            advisory,
        };
        self.entries.push_front(entry);
        &self.entries[0]
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&AuditEntry> {
        self.entries.front()
    }

    pub fn get(&self, id: &str) -> Option<&AuditEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
