//! Read path producing the status-grouped timeline.

use super::ErrorKind;
use crate::timeline::{
    domain::{AssignmentId, Timeline},
    ports::{EventLogError, EventLogRepository, ReminderRepository, ReminderRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for timeline reads.
#[derive(Debug, Error)]
pub enum TimelineServiceError {
    /// Reading the event log failed.
    #[error(transparent)]
    EventLog(#[from] EventLogError),
    /// Reading the reminder store failed.
    #[error(transparent)]
    Reminders(#[from] ReminderRepositoryError),
}

impl TimelineServiceError {
    /// Returns the broad failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Store
    }
}

/// Result type for timeline service operations.
pub type TimelineServiceResult<T> = Result<T, TimelineServiceError>;

/// Builds assignment timelines from the event log and the reminder store.
pub struct TimelineService<E, R>
where
    E: EventLogRepository + ?Sized,
    R: ReminderRepository + ?Sized,
{
    event_log: Arc<E>,
    reminders: Arc<R>,
}

impl<E, R> Clone for TimelineService<E, R>
where
    E: EventLogRepository + ?Sized,
    R: ReminderRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            event_log: Arc::clone(&self.event_log),
            reminders: Arc::clone(&self.reminders),
        }
    }
}

impl<E, R> TimelineService<E, R>
where
    E: EventLogRepository + ?Sized,
    R: ReminderRepository + ?Sized,
{
    /// Creates a new timeline service.
    #[must_use]
    pub const fn new(event_log: Arc<E>, reminders: Arc<R>) -> Self {
        Self {
            event_log,
            reminders,
        }
    }

    /// Returns the status-grouped history of an assignment.
    ///
    /// An assignment with no recorded history yields an empty timeline. A
    /// failure in either store fails the whole read; partial timelines are
    /// never returned.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineServiceError`] when either store fails.
    #[tracing::instrument(skip_all, fields(assignment_id = %assignment_id))]
    pub async fn get_timeline(
        &self,
        assignment_id: AssignmentId,
    ) -> TimelineServiceResult<Timeline> {
        let (events, reminders) = tokio::try_join!(
            async {
                self.event_log
                    .list_for_assignment(assignment_id)
                    .await
                    .map_err(TimelineServiceError::from)
            },
            async {
                self.reminders
                    .list_for_assignment(assignment_id)
                    .await
                    .map_err(TimelineServiceError::from)
            },
        )?;

        let timeline = Timeline::aggregate(events, &reminders);
        debug!(
            groups = timeline.groups().len(),
            entries = timeline.event_count(),
            "built timeline"
        );
        Ok(timeline)
    }
}
