//! Write paths for the append-only event log.

use super::{
    ErrorKind,
    lookup::{self, LookupError},
};
use crate::timeline::{
    domain::{
        ActorSnapshot, AssignmentId, AssignmentStatus, EventId, NoteFields, NotePayload,
        TimelineDomainError, TimelineEvent,
    },
    ports::{
        AssignmentDirectory, AssignmentDirectoryError, EventLogError, EventLogRepository,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for event log operations.
#[derive(Debug, Error)]
pub enum EventLogServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TimelineDomainError),
    /// The assignment does not resolve in the assignment directory.
    #[error("assignment not found: {0}")]
    AssignmentNotFound(AssignmentId),
    /// The event log failed.
    #[error(transparent)]
    EventLog(#[from] EventLogError),
    /// The assignment directory failed.
    #[error(transparent)]
    Directory(#[from] AssignmentDirectoryError),
}

impl EventLogServiceError {
    /// Returns the broad failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::Validation,
            Self::AssignmentNotFound(_) | Self::Directory(AssignmentDirectoryError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::EventLog(_) | Self::Directory(_) => ErrorKind::Store,
        }
    }
}

impl From<LookupError> for EventLogServiceError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::AssignmentNotFound(id) => Self::AssignmentNotFound(id),
            LookupError::EventLog(inner) => Self::EventLog(inner),
            LookupError::Directory(inner) => Self::Directory(inner),
        }
    }
}

/// Result type for event log service operations.
pub type EventLogServiceResult<T> = Result<T, EventLogServiceError>;

/// Records workflow events against assignments.
pub struct EventLogService<E, D, C>
where
    E: EventLogRepository + ?Sized,
    D: AssignmentDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    event_log: Arc<E>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<E, D, C> Clone for EventLogService<E, D, C>
where
    E: EventLogRepository + ?Sized,
    D: AssignmentDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            event_log: Arc::clone(&self.event_log),
            directory: Arc::clone(&self.directory),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<E, D, C> EventLogService<E, D, C>
where
    E: EventLogRepository + ?Sized,
    D: AssignmentDirectory + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new event log service.
    #[must_use]
    pub const fn new(event_log: Arc<E>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            event_log,
            directory,
            clock,
        }
    }

    /// Records that an assignment began existing.
    ///
    /// The event carries the status held on the master record. The call is
    /// not idempotent: invoking it twice appends two creation events.
    ///
    /// # Errors
    ///
    /// Returns [`EventLogServiceError::AssignmentNotFound`] when the
    /// assignment does not resolve, or a store error.
    #[tracing::instrument(skip_all, fields(assignment_id = %assignment_id))]
    pub async fn append_created(
        &self,
        assignment_id: AssignmentId,
        actor: ActorSnapshot,
    ) -> EventLogServiceResult<EventId> {
        let record = self
            .directory
            .find(assignment_id)
            .await?
            .ok_or(EventLogServiceError::AssignmentNotFound(assignment_id))?;

        let event =
            TimelineEvent::assignment_created(assignment_id, record.status, actor, &*self.clock);
        self.event_log.append(&event).await?;
        info!(event_id = %event.id(), "recorded assignment creation");
        Ok(event.id())
    }

    /// Records that an assignment entered `new_status`.
    ///
    /// Any non-empty status is accepted; transitions are not checked. After
    /// the event is appended the status is mirrored onto the master record.
    /// A failure to mirror is logged and does not undo the event.
    ///
    /// # Errors
    ///
    /// Returns [`EventLogServiceError::Domain`] when the status is empty,
    /// [`EventLogServiceError::AssignmentNotFound`] when the assignment does
    /// not resolve, or a store error.
    #[tracing::instrument(skip_all, fields(assignment_id = %assignment_id))]
    pub async fn append_status_change(
        &self,
        assignment_id: AssignmentId,
        new_status: impl Into<String> + Send,
        actor: ActorSnapshot,
    ) -> EventLogServiceResult<EventId> {
        let status = AssignmentStatus::new(new_status)?;
        if self.directory.find(assignment_id).await?.is_none() {
            return Err(EventLogServiceError::AssignmentNotFound(assignment_id));
        }

        let event =
            TimelineEvent::status_changed(assignment_id, status.clone(), actor, &*self.clock);
        self.event_log.append(&event).await?;
        info!(event_id = %event.id(), status = %status, "recorded status change");

        if let Err(err) = self.directory.record_status(assignment_id, &status).await {
            warn!(error = %err, status = %status, "failed to mirror status onto assignment");
        }
        Ok(event.id())
    }

    /// Records a department note against an assignment.
    ///
    /// The note is stamped with the assignment's current status. Nothing is
    /// stored when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`EventLogServiceError::Domain`] when every field is empty,
    /// more than one department field is populated, or reminder fields are
    /// supplied; [`EventLogServiceError::AssignmentNotFound`] when the
    /// assignment does not resolve; or a store error.
    #[tracing::instrument(skip_all, fields(assignment_id = %assignment_id))]
    pub async fn append_note(
        &self,
        assignment_id: AssignmentId,
        fields: NoteFields,
        actor: ActorSnapshot,
    ) -> EventLogServiceResult<EventId> {
        let note = NotePayload::try_from(fields)?;
        if note.is_follow_up() {
            return Err(TimelineDomainError::FollowUpNote.into());
        }

        let status =
            lookup::current_status(&*self.event_log, &*self.directory, assignment_id).await?;
        let event = TimelineEvent::note_added(assignment_id, status, note, actor, &*self.clock);
        self.event_log.append(&event).await?;
        debug!(event_id = %event.id(), "recorded note");
        Ok(event.id())
    }

    /// Returns the status the assignment is currently in.
    ///
    /// The newest recorded status change wins; without one the status held on
    /// the master record is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EventLogServiceError::AssignmentNotFound`] when the
    /// assignment does not resolve, or a store error.
    pub async fn current_status(
        &self,
        assignment_id: AssignmentId,
    ) -> EventLogServiceResult<Option<AssignmentStatus>> {
        Ok(lookup::current_status(&*self.event_log, &*self.directory, assignment_id).await?)
    }
}
