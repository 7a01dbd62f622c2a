//! `PostgreSQL` adapters for assignment history persistence.

mod assignment;
mod blocking;
mod event_log;
mod models;
mod reminder;
mod schema;

pub use assignment::PostgresAssignmentDirectory;
pub use blocking::TimelinePgPool;
pub use event_log::PostgresEventLog;
pub use reminder::PostgresReminderRepository;

#[cfg(test)]
pub(crate) use event_log::{row_to_event, to_new_row};
#[cfg(test)]
pub(crate) use models::{EventRow, ReminderRow};
#[cfg(test)]
pub(crate) use reminder::{row_to_reminder, to_row};
