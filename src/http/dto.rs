//! Request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timeline::domain::ReminderState;

/// Body of `POST /assignments/{id}/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeBody {
    /// Status the assignment enters.
    #[serde(default)]
    pub assignment_status: Option<String>,
}

/// Body of `POST /assignments/{id}/reminders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderBody {
    /// When the follow-up is due.
    #[serde(default)]
    pub date_and_time: Option<DateTime<Utc>>,
    /// What to follow up on.
    #[serde(default)]
    pub message: Option<String>,
    /// Initial reminder state; defaults to pending.
    #[serde(default)]
    pub status: Option<ReminderState>,
    /// Status snapshot; defaults to the assignment's current status.
    #[serde(default)]
    pub assignment_status: Option<String>,
}

/// Body returned when a record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBody {
    /// Identifier of the new record.
    pub id: Uuid,
}

/// Query of `GET /reminders/due`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueQuery {
    /// Upper bound on the due time; defaults to now.
    #[serde(default)]
    pub before: Option<DateTime<Utc>>,
}
