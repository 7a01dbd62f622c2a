//! Repository port for the append-only event log.

use crate::timeline::domain::{
    AssignmentId, AssignmentStatus, EventId, TimelineEvent, current_status,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for event log operations.
pub type EventLogResult<T> = Result<T, EventLogError>;

/// Append-only event persistence contract.
///
/// There is deliberately no update or delete: mistakes are corrected by
/// appending a further event.
#[async_trait]
pub trait EventLogRepository: Send + Sync {
    /// Appends an event.
    ///
    /// # Errors
    ///
    /// Returns [`EventLogError::DuplicateEvent`] when the event ID already
    /// exists.
    async fn append(&self, event: &TimelineEvent) -> EventLogResult<()>;

    /// Returns every event recorded for the assignment in append order.
    async fn list_for_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> EventLogResult<Vec<TimelineEvent>>;

    /// Returns the status entered by the newest `status_changed` event.
    ///
    /// Returns `None` when the assignment has no status change recorded.
    async fn current_status(
        &self,
        assignment_id: AssignmentId,
    ) -> EventLogResult<Option<AssignmentStatus>> {
        let events = self.list_for_assignment(assignment_id).await?;
        Ok(current_status(&events).cloned())
    }
}

/// Errors returned by event log implementations.
#[derive(Debug, Clone, Error)]
pub enum EventLogError {
    /// An event with the same identifier already exists.
    #[error("duplicate event identifier: {0}")]
    DuplicateEvent(EventId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EventLogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
