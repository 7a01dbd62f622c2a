//! Domain model for assignment workflow history.
//!
//! Events, reminders, notes, and the timeline view are plain values with no
//! infrastructure dependencies. Reading a timeline is a pure function of the
//! stored events and reminders, see [`Timeline::aggregate`].

mod actor;
mod error;
mod event;
mod ids;
mod note;
mod reminder;
mod status;
mod timeline;

pub use actor::ActorSnapshot;
pub use error::{ParseEventTypeError, ParseReminderStateError, TimelineDomainError};
pub use event::{EventType, PersistedEventData, TimelineEvent};
pub use ids::{AssignmentId, EventId, ReminderId};
pub use note::{NoteDepartment, NoteFields, NotePayload};
pub use reminder::{PersistedReminderData, Reminder, ReminderState};
pub use status::{AssignmentStatus, KnownStatus};
pub use timeline::{StatusGroup, Timeline, current_status, merge_reminders};
