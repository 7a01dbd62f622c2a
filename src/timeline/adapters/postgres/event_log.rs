//! `PostgreSQL` event log implementation.

use super::{
    blocking::{TimelinePgPool, run_blocking, status_from_column},
    models::{EventRow, NewEventRow},
    schema::timeline_events,
};
use crate::timeline::{
    domain::{
        ActorSnapshot, AssignmentId, AssignmentStatus, EventId, EventType, NotePayload,
        PersistedEventData, TimelineEvent,
    },
    ports::{EventLogError, EventLogRepository, EventLogResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// A row carrying a kind that is only ever derived from reminders.
#[derive(Debug, Error)]
#[error("event log row has derived event type: {0}")]
struct DerivedEventTypeStored(&'static str);

/// `PostgreSQL`-backed append-only event log.
#[derive(Debug, Clone)]
pub struct PostgresEventLog {
    pool: TimelinePgPool,
}

impl PostgresEventLog {
    /// Creates a new event log from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TimelinePgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventLogRepository for PostgresEventLog {
    async fn append(&self, event: &TimelineEvent) -> EventLogResult<()> {
        let event_id = event.id();
        let new_row = to_new_row(event)?;

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(timeline_events::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        EventLogError::DuplicateEvent(event_id)
                    }
                    _ => EventLogError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_for_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> EventLogResult<Vec<TimelineEvent>> {
        run_blocking(&self.pool, move |connection| {
            let rows = timeline_events::table
                .filter(timeline_events::assignment_id.eq(assignment_id.into_inner()))
                .order(timeline_events::seq.asc())
                .select(EventRow::as_select())
                .load::<EventRow>(connection)
                .map_err(EventLogError::persistence)?;
            rows.into_iter().map(row_to_event).collect()
        })
        .await
    }

    async fn current_status(
        &self,
        assignment_id: AssignmentId,
    ) -> EventLogResult<Option<AssignmentStatus>> {
        run_blocking(&self.pool, move |connection| {
            let latest = timeline_events::table
                .filter(timeline_events::assignment_id.eq(assignment_id.into_inner()))
                .filter(timeline_events::event_type.eq(EventType::StatusChanged.as_str()))
                .order((timeline_events::created_at.desc(), timeline_events::seq.desc()))
                .select(timeline_events::assignment_status)
                .first::<Option<String>>(connection)
                .optional()
                .map_err(EventLogError::persistence)?;
            Ok(status_from_column(latest.flatten()))
        })
        .await
    }
}

pub(crate) fn to_new_row(event: &TimelineEvent) -> EventLogResult<NewEventRow> {
    let note = event
        .note()
        .map(serde_json::to_value)
        .transpose()
        .map_err(EventLogError::persistence)?;
    let created_by =
        serde_json::to_value(event.created_by()).map_err(EventLogError::persistence)?;

    Ok(NewEventRow {
        id: event.id().into_inner(),
        assignment_id: event.assignment_id().into_inner(),
        event_type: event.event_type().as_str().to_owned(),
        assignment_status: event.assignment_status().map(|status| status.as_str().to_owned()),
        note,
        created_by,
        created_at: event.created_at(),
    })
}

pub(crate) fn row_to_event(row: EventRow) -> EventLogResult<TimelineEvent> {
    let EventRow {
        id,
        assignment_id,
        event_type: persisted_type,
        assignment_status,
        note: persisted_note,
        created_by: persisted_actor,
        created_at,
    } = row;

    let event_type =
        EventType::try_from(persisted_type.as_str()).map_err(EventLogError::persistence)?;
    if event_type.is_synthesised() {
        return Err(EventLogError::persistence(DerivedEventTypeStored(
            event_type.as_str(),
        )));
    }
    let note = persisted_note
        .map(serde_json::from_value::<NotePayload>)
        .transpose()
        .map_err(EventLogError::persistence)?;
    let created_by = serde_json::from_value::<ActorSnapshot>(persisted_actor)
        .map_err(EventLogError::persistence)?;

    Ok(TimelineEvent::from_persisted(PersistedEventData {
        id: EventId::from_uuid(id),
        assignment_id: AssignmentId::from_uuid(assignment_id),
        event_type,
        assignment_status: status_from_column(assignment_status),
        note,
        created_by,
        created_at,
    }))
}
