//! Request handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

use super::{
    actor::Actor,
    dto::{CreatedBody, DueQuery, ReminderBody, StatusChangeBody},
    error::ApiError,
    state::AppState,
};
use crate::timeline::{
    domain::{AssignmentId, NoteFields, Reminder, ReminderId, Timeline},
    services::ScheduleReminderRequest,
};

type Created = (StatusCode, Json<CreatedBody>);

fn created(id: Uuid) -> Created {
    (StatusCode::CREATED, Json(CreatedBody { id }))
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::validation(format!("invalid identifier: {raw}")))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::validation(rejection.body_text()))
}

pub(super) async fn append_created(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Actor(actor): Actor,
) -> Result<Created, ApiError> {
    let assignment_id = AssignmentId::from_uuid(parse_id(&raw_id)?);
    let event_id = state.history().append_created(assignment_id, actor).await?;
    Ok(created(event_id.into_inner()))
}

pub(super) async fn append_status_change(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Actor(actor): Actor,
    payload: Result<Json<StatusChangeBody>, JsonRejection>,
) -> Result<Created, ApiError> {
    let assignment_id = AssignmentId::from_uuid(parse_id(&raw_id)?);
    let StatusChangeBody { assignment_status } = body(payload)?;
    let event_id = state
        .history()
        .append_status_change(assignment_id, assignment_status.unwrap_or_default(), actor)
        .await?;
    Ok(created(event_id.into_inner()))
}

pub(super) async fn append_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Actor(actor): Actor,
    payload: Result<Json<NoteFields>, JsonRejection>,
) -> Result<Created, ApiError> {
    let assignment_id = AssignmentId::from_uuid(parse_id(&raw_id)?);
    let fields = body(payload)?;
    let event_id = state.history().append_note(assignment_id, fields, actor).await?;
    Ok(created(event_id.into_inner()))
}

pub(super) async fn schedule_reminder(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Actor(actor): Actor,
    payload: Result<Json<ReminderBody>, JsonRejection>,
) -> Result<Created, ApiError> {
    let assignment_id = AssignmentId::from_uuid(parse_id(&raw_id)?);
    let ReminderBody {
        date_and_time,
        message,
        status,
        assignment_status,
    } = body(payload)?;

    let mut request = ScheduleReminderRequest::new(
        assignment_id,
        date_and_time,
        message.unwrap_or_default(),
        actor,
    )
    .with_initial_state(status.unwrap_or_default());
    if let Some(snapshot) = assignment_status {
        request = request.with_assignment_status(snapshot);
    }
    let reminder_id = state.reminders().schedule(request).await?;
    Ok(created(reminder_id.into_inner()))
}

pub(super) async fn complete_reminder(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let reminder_id = ReminderId::from_uuid(parse_id(&raw_id)?);
    state.reminders().complete(reminder_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn list_reminders(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<Reminder>>, ApiError> {
    let assignment_id = AssignmentId::from_uuid(parse_id(&raw_id)?);
    let reminders = state.reminders().list_for_assignment(assignment_id).await?;
    Ok(Json(reminders))
}

pub(super) async fn due_reminders(
    State(state): State<AppState>,
    query: Result<Query<DueQuery>, QueryRejection>,
) -> Result<Json<Vec<Reminder>>, ApiError> {
    let Query(DueQuery { before }) =
        query.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    let reminders = match before {
        Some(instant) => state.reminders().pending_due_before(instant).await?,
        None => state.reminders().pending_due_now().await?,
    };
    Ok(Json(reminders))
}

pub(super) async fn get_timeline(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Timeline>, ApiError> {
    let assignment_id = AssignmentId::from_uuid(parse_id(&raw_id)?);
    let timeline = state.timeline().get_timeline(assignment_id).await?;
    Ok(Json(timeline))
}
