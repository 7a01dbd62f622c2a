//! Port onto the externally owned assignment master records.
//!
//! Assignment CRUD lives outside this crate. The history core only needs to
//! know whether an assignment exists, which status it started in, and to
//! mirror status changes back onto the master record.

use crate::timeline::domain::{AssignmentId, AssignmentStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for assignment directory operations.
pub type AssignmentDirectoryResult<T> = Result<T, AssignmentDirectoryError>;

/// The slice of an assignment master record visible to the history core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    /// Assignment identifier.
    pub id: AssignmentId,
    /// Status held on the master record, if any.
    pub status: Option<AssignmentStatus>,
}

impl AssignmentRecord {
    /// Creates a record view.
    #[must_use]
    pub const fn new(id: AssignmentId, status: Option<AssignmentStatus>) -> Self {
        Self { id, status }
    }
}

/// Lookup and status mirroring contract for assignment master records.
#[async_trait]
pub trait AssignmentDirectory: Send + Sync {
    /// Resolves an assignment.
    ///
    /// Returns `None` when the assignment does not exist or has been removed.
    async fn find(
        &self,
        assignment_id: AssignmentId,
    ) -> AssignmentDirectoryResult<Option<AssignmentRecord>>;

    /// Records the status most recently entered on the master record.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDirectoryError::NotFound`] when the assignment does
    /// not exist.
    async fn record_status(
        &self,
        assignment_id: AssignmentId,
        status: &AssignmentStatus,
    ) -> AssignmentDirectoryResult<()>;
}

/// Errors returned by assignment directory implementations.
#[derive(Debug, Clone, Error)]
pub enum AssignmentDirectoryError {
    /// The assignment was not found.
    #[error("assignment not found: {0}")]
    NotFound(AssignmentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssignmentDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
