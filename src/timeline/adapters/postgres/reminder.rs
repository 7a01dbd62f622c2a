//! `PostgreSQL` reminder repository implementation.

use super::{
    blocking::{TimelinePgPool, run_blocking, status_from_column},
    models::{ReminderRow, ReminderStateChangeset},
    schema::reminders,
};
use crate::timeline::{
    domain::{
        ActorSnapshot, AssignmentId, PersistedReminderData, Reminder, ReminderId, ReminderState,
    },
    ports::{ReminderRepository, ReminderRepositoryError, ReminderRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed reminder repository.
#[derive(Debug, Clone)]
pub struct PostgresReminderRepository {
    pool: TimelinePgPool,
}

impl PostgresReminderRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TimelinePgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReminderRepository for PostgresReminderRepository {
    async fn store(&self, reminder: &Reminder) -> ReminderRepositoryResult<()> {
        let reminder_id = reminder.id();
        let row = to_row(reminder)?;

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(reminders::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ReminderRepositoryError::DuplicateReminder(reminder_id)
                    }
                    _ => ReminderRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, reminder: &Reminder) -> ReminderRepositoryResult<()> {
        let reminder_id = reminder.id();
        let changeset = ReminderStateChangeset {
            status: reminder.state().as_str().to_owned(),
            completed_at: reminder.completed_at(),
        };

        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(reminders::table.find(reminder_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(ReminderRepositoryError::persistence)?;
            if updated == 0 {
                return Err(ReminderRepositoryError::NotFound(reminder_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ReminderId) -> ReminderRepositoryResult<Option<Reminder>> {
        run_blocking(&self.pool, move |connection| {
            let row = reminders::table
                .find(id.into_inner())
                .select(ReminderRow::as_select())
                .first::<ReminderRow>(connection)
                .optional()
                .map_err(ReminderRepositoryError::persistence)?;
            row.map(row_to_reminder).transpose()
        })
        .await
    }

    async fn list_for_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> ReminderRepositoryResult<Vec<Reminder>> {
        run_blocking(&self.pool, move |connection| {
            let rows = reminders::table
                .filter(reminders::assignment_id.eq(assignment_id.into_inner()))
                .order((reminders::date_and_time.asc(), reminders::created_at.asc()))
                .select(ReminderRow::as_select())
                .load::<ReminderRow>(connection)
                .map_err(ReminderRepositoryError::persistence)?;
            rows.into_iter().map(row_to_reminder).collect()
        })
        .await
    }

    async fn list_pending_due_before(
        &self,
        instant: DateTime<Utc>,
    ) -> ReminderRepositoryResult<Vec<Reminder>> {
        run_blocking(&self.pool, move |connection| {
            let rows = reminders::table
                .filter(reminders::status.eq(ReminderState::Pending.as_str()))
                .filter(reminders::date_and_time.le(instant))
                .order(reminders::date_and_time.asc())
                .select(ReminderRow::as_select())
                .load::<ReminderRow>(connection)
                .map_err(ReminderRepositoryError::persistence)?;
            rows.into_iter().map(row_to_reminder).collect()
        })
        .await
    }
}

pub(crate) fn to_row(reminder: &Reminder) -> ReminderRepositoryResult<ReminderRow> {
    let created_by =
        serde_json::to_value(reminder.created_by()).map_err(ReminderRepositoryError::persistence)?;

    Ok(ReminderRow {
        id: reminder.id().into_inner(),
        assignment_id: reminder.assignment_id().into_inner(),
        date_and_time: reminder.date_and_time(),
        message: reminder.message().to_owned(),
        status: reminder.state().as_str().to_owned(),
        assignment_status: reminder
            .assignment_status()
            .map(|status| status.as_str().to_owned()),
        created_by,
        created_at: reminder.created_at(),
        completed_at: reminder.completed_at(),
    })
}

pub(crate) fn row_to_reminder(row: ReminderRow) -> ReminderRepositoryResult<Reminder> {
    let ReminderRow {
        id,
        assignment_id,
        date_and_time,
        message,
        status: persisted_state,
        assignment_status,
        created_by: persisted_actor,
        created_at,
        completed_at,
    } = row;

    let state = ReminderState::try_from(persisted_state.as_str())
        .map_err(ReminderRepositoryError::persistence)?;
    let created_by = serde_json::from_value::<ActorSnapshot>(persisted_actor)
        .map_err(ReminderRepositoryError::persistence)?;

    Ok(Reminder::from_persisted(PersistedReminderData {
        id: ReminderId::from_uuid(id),
        assignment_id: AssignmentId::from_uuid(assignment_id),
        date_and_time,
        message,
        state,
        assignment_status: status_from_column(assignment_status),
        created_by,
        created_at,
        completed_at,
    }))
}
