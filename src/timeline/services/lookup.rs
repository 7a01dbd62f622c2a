//! Current-status resolution shared by the write services.

use crate::timeline::{
    domain::{AssignmentId, AssignmentStatus},
    ports::{AssignmentDirectory, AssignmentDirectoryError, EventLogError, EventLogRepository},
};

/// Failure while resolving an assignment's current status.
#[derive(Debug)]
pub(super) enum LookupError {
    AssignmentNotFound(AssignmentId),
    EventLog(EventLogError),
    Directory(AssignmentDirectoryError),
}

/// Resolves the status an assignment is in right now.
///
/// The newest recorded status change wins; without one the status held on
/// the master record is used.
pub(super) async fn current_status<E, D>(
    event_log: &E,
    directory: &D,
    assignment_id: AssignmentId,
) -> Result<Option<AssignmentStatus>, LookupError>
where
    E: EventLogRepository + ?Sized,
    D: AssignmentDirectory + ?Sized,
{
    let record = directory
        .find(assignment_id)
        .await
        .map_err(LookupError::Directory)?
        .ok_or(LookupError::AssignmentNotFound(assignment_id))?;
    let recorded = event_log
        .current_status(assignment_id)
        .await
        .map_err(LookupError::EventLog)?;
    Ok(recorded.or(record.status))
}
