//! `PostgreSQL` view onto the assignment master table.

use super::{
    blocking::{TimelinePgPool, run_blocking, status_from_column},
    schema::assignments,
};
use crate::timeline::{
    domain::{AssignmentId, AssignmentStatus},
    ports::{
        AssignmentDirectory, AssignmentDirectoryError, AssignmentDirectoryResult,
        AssignmentRecord,
    },
};
use async_trait::async_trait;
use diesel::prelude::*;

/// Assignment directory reading the shared `assignments` table.
///
/// Soft-deleted assignments do not resolve.
#[derive(Debug, Clone)]
pub struct PostgresAssignmentDirectory {
    pool: TimelinePgPool,
}

impl PostgresAssignmentDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TimelinePgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentDirectory for PostgresAssignmentDirectory {
    async fn find(
        &self,
        assignment_id: AssignmentId,
    ) -> AssignmentDirectoryResult<Option<AssignmentRecord>> {
        run_blocking(&self.pool, move |connection| {
            let status = assignments::table
                .find(assignment_id.into_inner())
                .filter(assignments::deleted_at.is_null())
                .select(assignments::assignment_status)
                .first::<Option<String>>(connection)
                .optional()
                .map_err(AssignmentDirectoryError::persistence)?;
            Ok(status.map(|raw| AssignmentRecord::new(assignment_id, status_from_column(raw))))
        })
        .await
    }

    async fn record_status(
        &self,
        assignment_id: AssignmentId,
        status: &AssignmentStatus,
    ) -> AssignmentDirectoryResult<()> {
        let new_status = status.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(
                assignments::table
                    .find(assignment_id.into_inner())
                    .filter(assignments::deleted_at.is_null()),
            )
            .set(assignments::assignment_status.eq(Some(new_status)))
            .execute(connection)
            .map_err(AssignmentDirectoryError::persistence)?;
            if updated == 0 {
                return Err(AssignmentDirectoryError::NotFound(assignment_id));
            }
            Ok(())
        })
        .await
    }
}
