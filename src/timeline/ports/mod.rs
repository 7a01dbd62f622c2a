//! Port contracts for assignment history.
//!
//! Ports define infrastructure-agnostic interfaces used by timeline services.
//! The assignment directory port is the only view the core has of the
//! externally owned assignment master records.

pub mod assignment;
pub mod event_log;
pub mod reminder;

pub use assignment::{
    AssignmentDirectory, AssignmentDirectoryError, AssignmentDirectoryResult, AssignmentRecord,
};
pub use event_log::{EventLogError, EventLogRepository, EventLogResult};
pub use reminder::{ReminderRepository, ReminderRepositoryError, ReminderRepositoryResult};
