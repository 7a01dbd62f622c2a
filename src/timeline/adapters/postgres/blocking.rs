//! Pool type and blocking-execution helper shared by the Diesel adapters.

use crate::timeline::domain::AssignmentStatus;
use crate::timeline::ports::{AssignmentDirectoryError, EventLogError, ReminderRepositoryError};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by timeline adapters.
pub type TimelinePgPool = Pool<ConnectionManager<PgConnection>>;

/// Port errors that can wrap an infrastructure failure.
pub(super) trait PersistenceFailure: Send + 'static {
    fn wrap(err: impl std::error::Error + Send + Sync + 'static) -> Self;
}

impl PersistenceFailure for EventLogError {
    fn wrap(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

impl PersistenceFailure for ReminderRepositoryError {
    fn wrap(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

impl PersistenceFailure for AssignmentDirectoryError {
    fn wrap(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

/// Runs a Diesel operation on the blocking thread pool with a pooled
/// connection.
pub(super) async fn run_blocking<F, T, E>(pool: &TimelinePgPool, f: F) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: PersistenceFailure,
{
    let shared = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = shared.get().map_err(E::wrap)?;
        f(&mut connection)
    })
    .await
    .map_err(E::wrap)?
}

/// Reads a nullable status column; blank legacy values read as `None`.
pub(super) fn status_from_column(value: Option<String>) -> Option<AssignmentStatus> {
    value.and_then(|raw| AssignmentStatus::new(raw).ok())
}
