//! Repository port for scheduled reminders.

use crate::timeline::domain::{AssignmentId, Reminder, ReminderId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for reminder repository operations.
pub type ReminderRepositoryResult<T> = Result<T, ReminderRepositoryError>;

/// Reminder persistence contract.
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Stores a new reminder.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderRepositoryError::DuplicateReminder`] when the
    /// reminder ID already exists.
    async fn store(&self, reminder: &Reminder) -> ReminderRepositoryResult<()>;

    /// Persists the state of an existing reminder.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderRepositoryError::NotFound`] when the reminder does
    /// not exist.
    async fn update(&self, reminder: &Reminder) -> ReminderRepositoryResult<()>;

    /// Finds a reminder by identifier.
    ///
    /// Returns `None` when the reminder does not exist.
    async fn find_by_id(&self, id: ReminderId) -> ReminderRepositoryResult<Option<Reminder>>;

    /// Returns the assignment's reminders ordered by due time.
    async fn list_for_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> ReminderRepositoryResult<Vec<Reminder>>;

    /// Returns pending reminders due at or before `instant`, across all
    /// assignments, ordered by due time.
    async fn list_pending_due_before(
        &self,
        instant: DateTime<Utc>,
    ) -> ReminderRepositoryResult<Vec<Reminder>>;
}

/// Errors returned by reminder repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ReminderRepositoryError {
    /// A reminder with the same identifier already exists.
    #[error("duplicate reminder identifier: {0}")]
    DuplicateReminder(ReminderId),

    /// The reminder was not found.
    #[error("reminder not found: {0}")]
    NotFound(ReminderId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReminderRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
