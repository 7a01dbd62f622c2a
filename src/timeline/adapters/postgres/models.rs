//! Diesel row models for assignment history persistence.

use super::schema::{reminders, timeline_events};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for timeline events.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = timeline_events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EventRow {
    /// Event identifier.
    pub id: uuid::Uuid,
    /// Owning assignment.
    pub assignment_id: uuid::Uuid,
    /// Event kind.
    pub event_type: String,
    /// Workflow status associated with the event.
    pub assignment_status: Option<String>,
    /// Note payload JSON.
    pub note: Option<Value>,
    /// Actor snapshot JSON.
    pub created_by: Value,
    /// Write timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for timeline events.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = timeline_events)]
pub struct NewEventRow {
    /// Event identifier.
    pub id: uuid::Uuid,
    /// Owning assignment.
    pub assignment_id: uuid::Uuid,
    /// Event kind.
    pub event_type: String,
    /// Workflow status associated with the event.
    pub assignment_status: Option<String>,
    /// Note payload JSON.
    pub note: Option<Value>,
    /// Actor snapshot JSON.
    pub created_by: Value,
    /// Write timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result and insert row for reminders.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = reminders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReminderRow {
    /// Reminder identifier.
    pub id: uuid::Uuid,
    /// Owning assignment.
    pub assignment_id: uuid::Uuid,
    /// Due time.
    pub date_and_time: DateTime<Utc>,
    /// Reminder message.
    pub message: String,
    /// Lifecycle state.
    pub status: String,
    /// Workflow status snapshot.
    pub assignment_status: Option<String>,
    /// Actor snapshot JSON.
    pub created_by: Value,
    /// Scheduling timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Changeset applied when a reminder's lifecycle state changes.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = reminders)]
#[diesel(treat_none_as_null = true)]
pub struct ReminderStateChangeset {
    /// Lifecycle state.
    pub status: String,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}
