//! Application services for assignment history.
//!
//! Each write is a single store operation. Nothing here spans the event log
//! and the reminder store in one transaction, and no appended event is ever
//! rolled back.

mod error;
mod history;
mod lookup;
mod reminders;
mod timeline;

pub use error::ErrorKind;
pub use history::{EventLogService, EventLogServiceError, EventLogServiceResult};
pub use reminders::{
    ReminderService, ReminderServiceError, ReminderServiceResult, ScheduleReminderRequest,
};
pub use timeline::{TimelineService, TimelineServiceError, TimelineServiceResult};
