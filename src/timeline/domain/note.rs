//! Department annotations attached to `note_added` events.
//!
//! Notes travel over the wire as an object with one populated field per
//! department (`finance_note`, `technical_note`, ...) or, for events derived
//! from reminders, the `message`/`reminder_date`/`reminder_status` triple.
//! Inside the crate the payload is a sum type so that exactly one variant is
//! ever populated.
//!
//! # Serialisation
//!
//! ```json
//! { "finance_note": "fee pending" }
//! { "message": "follow up", "reminder_date": "2026-03-02T10:00:00Z", "reminder_status": "pending" }
//! ```

use super::{ReminderState, TimelineDomainError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Department that authored a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteDepartment {
    /// Finance team.
    Finance,
    /// Technical team.
    Technical,
    /// Legal team.
    Legal,
    /// IT team.
    It,
    /// Anyone else.
    General,
}

impl NoteDepartment {
    /// Returns the wire field name used for this department.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Finance => "finance_note",
            Self::Technical => "technical_note",
            Self::Legal => "legal_note",
            Self::It => "it_note",
            Self::General => "general_note",
        }
    }
}

/// Annotation carried by a timeline event.
///
/// # Examples
///
/// ```
/// use filingtrail::timeline::domain::{NoteDepartment, NoteFields, NotePayload};
///
/// let fields = NoteFields {
///     legal_note: Some("notice reply drafted".to_owned()),
///     ..NoteFields::default()
/// };
/// let note = NotePayload::try_from(fields).expect("one populated field");
/// assert_eq!(note.department(), Some(NoteDepartment::Legal));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NoteFields", into = "NoteFields")]
pub enum NotePayload {
    /// Finance team note.
    Finance(String),
    /// Technical team note.
    Technical(String),
    /// Legal team note.
    Legal(String),
    /// IT team note.
    It(String),
    /// General note.
    General(String),
    /// Reminder details, used only for events synthesised from reminders.
    FollowUp {
        /// Reminder message.
        message: String,
        /// When the follow-up is due.
        reminder_date: DateTime<Utc>,
        /// Reminder state at read time.
        reminder_status: ReminderState,
    },
}

impl NotePayload {
    /// Creates a department note from non-empty text.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineDomainError::EmptyNote`] when the text is empty after
    /// trimming.
    pub fn department_note(
        department: NoteDepartment,
        text: impl Into<String>,
    ) -> Result<Self, TimelineDomainError> {
        let body = non_blank(Some(text.into())).ok_or(TimelineDomainError::EmptyNote)?;
        Ok(Self::from_department(department, body))
    }

    fn from_department(department: NoteDepartment, body: String) -> Self {
        match department {
            NoteDepartment::Finance => Self::Finance(body),
            NoteDepartment::Technical => Self::Technical(body),
            NoteDepartment::Legal => Self::Legal(body),
            NoteDepartment::It => Self::It(body),
            NoteDepartment::General => Self::General(body),
        }
    }

    /// Returns the authoring department, or `None` for reminder details.
    #[must_use]
    pub const fn department(&self) -> Option<NoteDepartment> {
        match self {
            Self::Finance(_) => Some(NoteDepartment::Finance),
            Self::Technical(_) => Some(NoteDepartment::Technical),
            Self::Legal(_) => Some(NoteDepartment::Legal),
            Self::It(_) => Some(NoteDepartment::It),
            Self::General(_) => Some(NoteDepartment::General),
            Self::FollowUp { .. } => None,
        }
    }

    /// Returns the note text or reminder message.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Finance(text)
            | Self::Technical(text)
            | Self::Legal(text)
            | Self::It(text)
            | Self::General(text) => text,
            Self::FollowUp { message, .. } => message,
        }
    }

    /// Returns `true` for reminder-derived payloads.
    #[must_use]
    pub const fn is_follow_up(&self) -> bool {
        matches!(self, Self::FollowUp { .. })
    }
}

/// Wire representation of a note: one optional field per variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    /// Finance team note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finance_note: Option<String>,
    /// Technical team note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_note: Option<String>,
    /// Legal team note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_note: Option<String>,
    /// IT team note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub it_note: Option<String>,
    /// General note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_note: Option<String>,
    /// Reminder message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Reminder due time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_date: Option<DateTime<Utc>>,
    /// Reminder state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_status: Option<ReminderState>,
}

impl TryFrom<NoteFields> for NotePayload {
    type Error = TimelineDomainError;

    fn try_from(fields: NoteFields) -> Result<Self, Self::Error> {
        let NoteFields {
            finance_note,
            technical_note,
            legal_note,
            it_note,
            general_note,
            message,
            reminder_date,
            reminder_status,
        } = fields;

        let mut populated: Vec<(&'static str, Self)> = [
            (NoteDepartment::Finance, finance_note),
            (NoteDepartment::Technical, technical_note),
            (NoteDepartment::Legal, legal_note),
            (NoteDepartment::It, it_note),
            (NoteDepartment::General, general_note),
        ]
        .into_iter()
        .filter_map(|(department, text)| {
            let body = non_blank(text)?;
            Some((department.field_name(), Self::from_department(department, body)))
        })
        .collect();

        if let Some(text) = non_blank(message) {
            let due = reminder_date.ok_or(TimelineDomainError::MissingReminderDue)?;
            populated.push((
                "message",
                Self::FollowUp {
                    message: text,
                    reminder_date: due,
                    reminder_status: reminder_status.unwrap_or_default(),
                },
            ));
        }

        if populated.len() > 1 {
            let names: Vec<&str> = populated.iter().map(|(name, _)| *name).collect();
            return Err(TimelineDomainError::AmbiguousNote(names.join(", ")));
        }
        populated
            .pop()
            .map(|(_, note)| note)
            .ok_or(TimelineDomainError::EmptyNote)
    }
}

impl From<NotePayload> for NoteFields {
    fn from(note: NotePayload) -> Self {
        let mut fields = Self::default();
        match note {
            NotePayload::Finance(text) => fields.finance_note = Some(text),
            NotePayload::Technical(text) => fields.technical_note = Some(text),
            NotePayload::Legal(text) => fields.legal_note = Some(text),
            NotePayload::It(text) => fields.it_note = Some(text),
            NotePayload::General(text) => fields.general_note = Some(text),
            NotePayload::FollowUp {
                message,
                reminder_date,
                reminder_status,
            } => {
                fields.message = Some(message);
                fields.reminder_date = Some(reminder_date);
                fields.reminder_status = Some(reminder_status);
            }
        }
        fields
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    let raw = value?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
