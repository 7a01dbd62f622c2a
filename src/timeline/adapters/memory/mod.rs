//! In-memory adapter implementations.
//!
//! These adapters back the server when no database is configured and keep
//! service tests free of infrastructure.

mod assignment;
mod event_log;
mod reminder;

pub use assignment::InMemoryAssignmentDirectory;
pub use event_log::InMemoryEventLog;
pub use reminder::InMemoryReminderRepository;
