//! Immutable history entries recorded against an assignment.

use super::{
    ActorSnapshot, AssignmentId, AssignmentStatus, EventId, NotePayload, ParseEventTypeError,
    Reminder, ReminderState,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of timeline event.
///
/// Only the first three kinds are stored; the reminder kinds are synthesised
/// from reminder records when a timeline is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// The assignment began existing.
    AssignmentCreated,
    /// The assignment entered a new workflow status.
    StatusChanged,
    /// A department note was recorded.
    NoteAdded,
    /// A reminder was scheduled.
    ReminderSet,
    /// A reminder was completed.
    ReminderCompleted,
}

impl EventType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AssignmentCreated => "assignment_created",
            Self::StatusChanged => "status_changed",
            Self::NoteAdded => "note_added",
            Self::ReminderSet => "reminder_set",
            Self::ReminderCompleted => "reminder_completed",
        }
    }

    /// Returns `true` for kinds derived from reminders at read time.
    #[must_use]
    pub const fn is_synthesised(self) -> bool {
        matches!(self, Self::ReminderSet | Self::ReminderCompleted)
    }
}

impl TryFrom<&str> for EventType {
    type Error = ParseEventTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "assignment_created" => Ok(Self::AssignmentCreated),
            "status_changed" => Ok(Self::StatusChanged),
            "note_added" => Ok(Self::NoteAdded),
            "reminder_set" => Ok(Self::ReminderSet),
            "reminder_completed" => Ok(Self::ReminderCompleted),
            _ => Err(ParseEventTypeError(value.to_owned())),
        }
    }
}

/// One entry in an assignment's history.
///
/// For [`EventType::StatusChanged`] the status is the one being entered; for
/// every other kind it is the status that was current when the event was
/// recorded. Events carry no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    id: EventId,
    assignment_id: AssignmentId,
    event_type: EventType,
    assignment_status: Option<AssignmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<NotePayload>,
    created_by: ActorSnapshot,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedEventData {
    /// Persisted event identifier.
    pub id: EventId,
    /// Owning assignment.
    pub assignment_id: AssignmentId,
    /// Event kind.
    pub event_type: EventType,
    /// Workflow status associated with the event.
    pub assignment_status: Option<AssignmentStatus>,
    /// Attached note, if any.
    pub note: Option<NotePayload>,
    /// Actor snapshot.
    pub created_by: ActorSnapshot,
    /// Write timestamp.
    pub created_at: DateTime<Utc>,
}

impl TimelineEvent {
    /// Records that an assignment began existing in `initial_status`.
    #[must_use]
    pub fn assignment_created(
        assignment_id: AssignmentId,
        initial_status: Option<AssignmentStatus>,
        created_by: ActorSnapshot,
        clock: &impl Clock,
    ) -> Self {
        Self::stamped(
            assignment_id,
            EventType::AssignmentCreated,
            initial_status,
            None,
            created_by,
            clock,
        )
    }

    /// Records that an assignment entered `new_status`.
    #[must_use]
    pub fn status_changed(
        assignment_id: AssignmentId,
        new_status: AssignmentStatus,
        created_by: ActorSnapshot,
        clock: &impl Clock,
    ) -> Self {
        Self::stamped(
            assignment_id,
            EventType::StatusChanged,
            Some(new_status),
            None,
            created_by,
            clock,
        )
    }

    /// Records a note made while the assignment was in `current_status`.
    #[must_use]
    pub fn note_added(
        assignment_id: AssignmentId,
        current_status: Option<AssignmentStatus>,
        note: NotePayload,
        created_by: ActorSnapshot,
        clock: &impl Clock,
    ) -> Self {
        Self::stamped(
            assignment_id,
            EventType::NoteAdded,
            current_status,
            Some(note),
            created_by,
            clock,
        )
    }

    /// Derives the `reminder_set` entry for a reminder.
    ///
    /// The entry reuses the reminder identifier and is stamped with the
    /// reminder's scheduling time.
    #[must_use]
    pub fn reminder_set(reminder: &Reminder) -> Self {
        Self::from_reminder(
            reminder,
            EventId::from_uuid(reminder.id().into_inner()),
            EventType::ReminderSet,
            reminder.created_at(),
        )
    }

    /// Derives the `reminder_completed` entry for a completed reminder.
    ///
    /// The entry is stamped with the reminder's due time rather than its
    /// completion time, matching how the history has always been rendered.
    /// Its identifier is derived from the reminder identifier, so it is stable
    /// across reads and never collides with the `reminder_set` entry.
    /// Returns `None` for pending reminders.
    #[must_use]
    pub fn reminder_completed(reminder: &Reminder) -> Option<Self> {
        (reminder.state() == ReminderState::Completed).then(|| {
            Self::from_reminder(
                reminder,
                EventId::from_uuid(Uuid::new_v5(
                    &reminder.id().into_inner(),
                    EventType::ReminderCompleted.as_str().as_bytes(),
                )),
                EventType::ReminderCompleted,
                reminder.date_and_time(),
            )
        })
    }

    /// Reconstructs an event from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedEventData) -> Self {
        Self {
            id: data.id,
            assignment_id: data.assignment_id,
            event_type: data.event_type,
            assignment_status: data.assignment_status,
            note: data.note,
            created_by: data.created_by,
            created_at: data.created_at,
        }
    }

    fn stamped(
        assignment_id: AssignmentId,
        event_type: EventType,
        assignment_status: Option<AssignmentStatus>,
        note: Option<NotePayload>,
        created_by: ActorSnapshot,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: EventId::new(),
            assignment_id,
            event_type,
            assignment_status,
            note,
            created_by,
            created_at: clock.utc(),
        }
    }

    fn from_reminder(
        reminder: &Reminder,
        id: EventId,
        event_type: EventType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            assignment_id: reminder.assignment_id(),
            event_type,
            assignment_status: reminder.assignment_status().cloned(),
            note: Some(NotePayload::FollowUp {
                message: reminder.message().to_owned(),
                reminder_date: reminder.date_and_time(),
                reminder_status: reminder.state(),
            }),
            created_by: reminder.created_by().clone(),
            created_at,
        }
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    /// Returns the owning assignment.
    #[must_use]
    pub const fn assignment_id(&self) -> AssignmentId {
        self.assignment_id
    }

    /// Returns the event kind.
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Returns the workflow status associated with the event.
    #[must_use]
    pub const fn assignment_status(&self) -> Option<&AssignmentStatus> {
        self.assignment_status.as_ref()
    }

    /// Returns the attached note, if any.
    #[must_use]
    pub const fn note(&self) -> Option<&NotePayload> {
        self.note.as_ref()
    }

    /// Returns the actor snapshot.
    #[must_use]
    pub const fn created_by(&self) -> &ActorSnapshot {
        &self.created_by
    }

    /// Returns the write timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
