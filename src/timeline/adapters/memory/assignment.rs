//! In-memory stand-in for the assignment master store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::timeline::{
    domain::{AssignmentId, AssignmentStatus},
    ports::{
        AssignmentDirectory, AssignmentDirectoryError, AssignmentDirectoryResult,
        AssignmentRecord,
    },
};

/// Thread-safe in-memory assignment directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentDirectory {
    assignments: Arc<RwLock<HashMap<AssignmentId, Option<AssignmentStatus>>>>,
    open: bool,
}

impl InMemoryAssignmentDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory that resolves every assignment identifier.
    ///
    /// Unregistered assignments resolve with no status and are registered
    /// the first time a status is mirrored onto them. Used when the server
    /// runs without a database.
    #[must_use]
    pub fn open() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    /// Registers an assignment with its initial status, replacing any
    /// existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDirectoryError::Persistence`] when the directory
    /// lock is poisoned.
    pub fn register(
        &self,
        assignment_id: AssignmentId,
        status: Option<AssignmentStatus>,
    ) -> AssignmentDirectoryResult<()> {
        let mut assignments = self.assignments.write().map_err(lock_error)?;
        assignments.insert(assignment_id, status);
        Ok(())
    }
}

fn lock_error(err: impl ToString) -> AssignmentDirectoryError {
    AssignmentDirectoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AssignmentDirectory for InMemoryAssignmentDirectory {
    async fn find(
        &self,
        assignment_id: AssignmentId,
    ) -> AssignmentDirectoryResult<Option<AssignmentRecord>> {
        let assignments = self.assignments.read().map_err(lock_error)?;
        let status = match assignments.get(&assignment_id) {
            Some(known) => known.clone(),
            None if self.open => None,
            None => return Ok(None),
        };
        Ok(Some(AssignmentRecord::new(assignment_id, status)))
    }

    async fn record_status(
        &self,
        assignment_id: AssignmentId,
        status: &AssignmentStatus,
    ) -> AssignmentDirectoryResult<()> {
        let mut assignments = self.assignments.write().map_err(lock_error)?;
        if self.open {
            assignments.insert(assignment_id, Some(status.clone()));
            return Ok(());
        }
        let stored = assignments
            .get_mut(&assignment_id)
            .ok_or(AssignmentDirectoryError::NotFound(assignment_id))?;
        *stored = Some(status.clone());
        Ok(())
    }
}
