//! Scheduling and completion of follow-up reminders.

use super::{
    ErrorKind,
    lookup::{self, LookupError},
};
use crate::timeline::{
    domain::{
        ActorSnapshot, AssignmentId, AssignmentStatus, Reminder, ReminderId, ReminderState,
        TimelineDomainError,
    },
    ports::{
        AssignmentDirectory, AssignmentDirectoryError, EventLogError, EventLogRepository,
        ReminderRepository, ReminderRepositoryError,
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for scheduling a reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleReminderRequest {
    assignment_id: AssignmentId,
    date_and_time: Option<DateTime<Utc>>,
    message: String,
    assignment_status: Option<String>,
    initial_state: ReminderState,
    actor: ActorSnapshot,
}

impl ScheduleReminderRequest {
    /// Creates a request with the required reminder fields.
    #[must_use]
    pub fn new(
        assignment_id: AssignmentId,
        date_and_time: Option<DateTime<Utc>>,
        message: impl Into<String>,
        actor: ActorSnapshot,
    ) -> Self {
        Self {
            assignment_id,
            date_and_time,
            message: message.into(),
            assignment_status: None,
            initial_state: ReminderState::Pending,
            actor,
        }
    }

    /// Sets the status snapshot explicitly instead of resolving the current
    /// status.
    #[must_use]
    pub fn with_assignment_status(mut self, status: impl Into<String>) -> Self {
        self.assignment_status = Some(status.into());
        self
    }

    /// Sets the state the reminder is recorded in.
    #[must_use]
    pub const fn with_initial_state(mut self, state: ReminderState) -> Self {
        self.initial_state = state;
        self
    }
}

/// Service-level errors for reminder operations.
#[derive(Debug, Error)]
pub enum ReminderServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TimelineDomainError),
    /// The assignment does not resolve in the assignment directory.
    #[error("assignment not found: {0}")]
    AssignmentNotFound(AssignmentId),
    /// The reminder does not exist.
    #[error("reminder not found: {0}")]
    ReminderNotFound(ReminderId),
    /// The reminder store failed.
    #[error(transparent)]
    Repository(#[from] ReminderRepositoryError),
    /// The event log failed while resolving the current status.
    #[error(transparent)]
    EventLog(#[from] EventLogError),
    /// The assignment directory failed.
    #[error(transparent)]
    Directory(#[from] AssignmentDirectoryError),
}

impl ReminderServiceError {
    /// Returns the broad failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::Validation,
            Self::AssignmentNotFound(_)
            | Self::ReminderNotFound(_)
            | Self::Repository(ReminderRepositoryError::NotFound(_))
            | Self::Directory(AssignmentDirectoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Repository(_) | Self::EventLog(_) | Self::Directory(_) => ErrorKind::Store,
        }
    }
}

impl From<LookupError> for ReminderServiceError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::AssignmentNotFound(id) => Self::AssignmentNotFound(id),
            LookupError::EventLog(inner) => Self::EventLog(inner),
            LookupError::Directory(inner) => Self::Directory(inner),
        }
    }
}

/// Result type for reminder service operations.
pub type ReminderServiceResult<T> = Result<T, ReminderServiceError>;

/// Reminder scheduling service.
pub struct ReminderService<R, E, D, C>
where
    R: ReminderRepository + ?Sized,
    E: EventLogRepository + ?Sized,
    D: AssignmentDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    event_log: Arc<E>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<R, E, D, C> Clone for ReminderService<R, E, D, C>
where
    R: ReminderRepository + ?Sized,
    E: EventLogRepository + ?Sized,
    D: AssignmentDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            event_log: Arc::clone(&self.event_log),
            directory: Arc::clone(&self.directory),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, E, D, C> ReminderService<R, E, D, C>
where
    R: ReminderRepository + ?Sized,
    E: EventLogRepository + ?Sized,
    D: AssignmentDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new reminder service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        event_log: Arc<E>,
        directory: Arc<D>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            event_log,
            directory,
            clock,
        }
    }

    /// Schedules a reminder against an assignment.
    ///
    /// Without an explicit status snapshot the assignment's current status is
    /// captured. Nothing is stored when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::Domain`] when the due time is missing
    /// or the message is empty, [`ReminderServiceError::AssignmentNotFound`]
    /// when the assignment does not resolve, or a store error.
    #[tracing::instrument(skip_all, fields(assignment_id = %request.assignment_id))]
    pub async fn schedule(
        &self,
        request: ScheduleReminderRequest,
    ) -> ReminderServiceResult<ReminderId> {
        let ScheduleReminderRequest {
            assignment_id,
            date_and_time,
            message,
            assignment_status,
            initial_state,
            actor,
        } = request;

        let due = date_and_time.ok_or(TimelineDomainError::MissingReminderDue)?;
        Reminder::check_message(&message)?;
        let explicit = assignment_status.map(AssignmentStatus::new).transpose()?;

        let status = match explicit {
            Some(snapshot) => {
                if self.directory.find(assignment_id).await?.is_none() {
                    return Err(ReminderServiceError::AssignmentNotFound(assignment_id));
                }
                Some(snapshot)
            }
            None => {
                lookup::current_status(&*self.event_log, &*self.directory, assignment_id).await?
            }
        };

        let mut reminder =
            Reminder::schedule(assignment_id, due, message, status, actor, &*self.clock)?;
        if initial_state == ReminderState::Completed {
            reminder.complete(&*self.clock);
        }
        self.repository.store(&reminder).await?;
        info!(reminder_id = %reminder.id(), due = %due, "scheduled reminder");
        Ok(reminder.id())
    }

    /// Marks a reminder completed.
    ///
    /// Completing an already-completed reminder succeeds without changing it.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::ReminderNotFound`] when the reminder
    /// does not exist, or a store error.
    #[tracing::instrument(skip_all, fields(reminder_id = %reminder_id))]
    pub async fn complete(&self, reminder_id: ReminderId) -> ReminderServiceResult<()> {
        let mut reminder = self
            .repository
            .find_by_id(reminder_id)
            .await?
            .ok_or(ReminderServiceError::ReminderNotFound(reminder_id))?;

        if !reminder.complete(&*self.clock) {
            debug!("reminder already completed; leaving it unchanged");
            return Ok(());
        }
        self.repository.update(&reminder).await?;
        info!("completed reminder");
        Ok(())
    }

    /// Returns an assignment's reminders ordered by due time.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::Repository`] when the lookup fails.
    pub async fn list_for_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> ReminderServiceResult<Vec<Reminder>> {
        Ok(self.repository.list_for_assignment(assignment_id).await?)
    }

    /// Returns pending reminders due at or before `instant` across all
    /// assignments.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::Repository`] when the lookup fails.
    pub async fn pending_due_before(
        &self,
        instant: DateTime<Utc>,
    ) -> ReminderServiceResult<Vec<Reminder>> {
        Ok(self.repository.list_pending_due_before(instant).await?)
    }

    /// Returns pending reminders that are due now.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::Repository`] when the lookup fails.
    pub async fn pending_due_now(&self) -> ReminderServiceResult<Vec<Reminder>> {
        self.pending_due_before(self.clock.utc()).await
    }
}
