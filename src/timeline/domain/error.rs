//! Error types for timeline domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing timeline domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimelineDomainError {
    /// The workflow status is empty after trimming.
    #[error("assignment status must not be empty")]
    EmptyStatus,

    /// The status is not part of the workflow board catalogue.
    #[error("status '{0}' is not a catalogued workflow status")]
    UnknownStatus(String),

    /// Every field of a note payload is empty or absent.
    #[error("note must contain at least one non-empty field")]
    EmptyNote,

    /// More than one department field of a note payload is populated.
    #[error("note must populate exactly one of {0}")]
    AmbiguousNote(String),

    /// Reminder details were supplied where a department note is expected.
    #[error("reminder details can only be recorded by scheduling a reminder")]
    FollowUpNote,

    /// The reminder message is empty after trimming.
    #[error("reminder message must not be empty")]
    EmptyReminderMessage,

    /// The reminder due time is missing.
    #[error("reminder date and time is required")]
    MissingReminderDue,

    /// The acting user identifier is empty after trimming.
    #[error("actor user id must not be empty")]
    EmptyActor,
}

/// Error returned while parsing event types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown timeline event type: {0}")]
pub struct ParseEventTypeError(pub String);

/// Error returned while parsing reminder states from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown reminder state: {0}")]
pub struct ParseReminderStateError(pub String);
