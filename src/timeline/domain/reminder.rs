//! Scheduled follow-ups owned by an assignment.

use super::{
    ActorSnapshot, AssignmentId, AssignmentStatus, ParseReminderStateError, ReminderId,
    TimelineDomainError,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Reminder lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderState {
    /// Follow-up has not happened yet.
    #[default]
    Pending,
    /// Follow-up has been done.
    Completed,
}

impl ReminderState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for ReminderState {
    type Error = ParseReminderStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseReminderStateError(value.to_owned())),
        }
    }
}

/// A follow-up scheduled against an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    id: ReminderId,
    assignment_id: AssignmentId,
    date_and_time: DateTime<Utc>,
    message: String,
    state: ReminderState,
    assignment_status: Option<AssignmentStatus>,
    created_by: ActorSnapshot,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedReminderData {
    /// Persisted reminder identifier.
    pub id: ReminderId,
    /// Owning assignment.
    pub assignment_id: AssignmentId,
    /// Due time.
    pub date_and_time: DateTime<Utc>,
    /// Reminder message.
    pub message: String,
    /// Lifecycle state.
    pub state: ReminderState,
    /// Workflow status snapshot taken at scheduling time.
    pub assignment_status: Option<AssignmentStatus>,
    /// Actor who scheduled the reminder.
    pub created_by: ActorSnapshot,
    /// Scheduling timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Reminder {
    /// Schedules a new pending reminder.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineDomainError::EmptyReminderMessage`] when the message
    /// is empty after trimming.
    pub fn schedule(
        assignment_id: AssignmentId,
        date_and_time: DateTime<Utc>,
        message: impl Into<String>,
        assignment_status: Option<AssignmentStatus>,
        created_by: ActorSnapshot,
        clock: &impl Clock,
    ) -> Result<Self, TimelineDomainError> {
        let raw = message.into();
        let trimmed = Self::check_message(&raw)?;

        Ok(Self {
            id: ReminderId::new(),
            assignment_id,
            date_and_time,
            message: trimmed.to_owned(),
            state: ReminderState::Pending,
            assignment_status,
            created_by,
            created_at: clock.utc(),
            completed_at: None,
        })
    }

    /// Validates a reminder message and returns it trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineDomainError::EmptyReminderMessage`] when the message
    /// is empty after trimming.
    pub fn check_message(message: &str) -> Result<&str, TimelineDomainError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(TimelineDomainError::EmptyReminderMessage);
        }
        Ok(trimmed)
    }

    /// Reconstructs a reminder from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedReminderData) -> Self {
        Self {
            id: data.id,
            assignment_id: data.assignment_id,
            date_and_time: data.date_and_time,
            message: data.message,
            state: data.state,
            assignment_status: data.assignment_status,
            created_by: data.created_by,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Marks the reminder completed.
    ///
    /// Returns `false` without touching the reminder when it was already
    /// completed, so the first completion time is kept.
    pub fn complete(&mut self, clock: &impl Clock) -> bool {
        if self.state == ReminderState::Completed {
            return false;
        }
        self.state = ReminderState::Completed;
        self.completed_at = Some(clock.utc());
        true
    }

    /// Returns the reminder identifier.
    #[must_use]
    pub const fn id(&self) -> ReminderId {
        self.id
    }

    /// Returns the owning assignment.
    #[must_use]
    pub const fn assignment_id(&self) -> AssignmentId {
        self.assignment_id
    }

    /// Returns the due time.
    #[must_use]
    pub const fn date_and_time(&self) -> DateTime<Utc> {
        self.date_and_time
    }

    /// Returns the reminder message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ReminderState {
        self.state
    }

    /// Returns the workflow status captured at scheduling time.
    #[must_use]
    pub const fn assignment_status(&self) -> Option<&AssignmentStatus> {
        self.assignment_status.as_ref()
    }

    /// Returns the actor who scheduled the reminder.
    #[must_use]
    pub const fn created_by(&self) -> &ActorSnapshot {
        &self.created_by
    }

    /// Returns the scheduling timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the reminder was completed, if it was.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns `true` when the reminder is still pending and due at or before
    /// `instant`.
    #[must_use]
    pub fn is_due_by(&self, instant: DateTime<Utc>) -> bool {
        self.state == ReminderState::Pending && self.date_and_time <= instant
    }
}
