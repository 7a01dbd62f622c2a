//! JSON API over the timeline services.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `POST` | `/assignments/{id}/created` | 201 `{id}` |
//! | `POST` | `/assignments/{id}/status` | 201 `{id}` |
//! | `POST` | `/assignments/{id}/notes` | 201 `{id}` |
//! | `POST` | `/assignments/{id}/reminders` | 201 `{id}` |
//! | `GET` | `/assignments/{id}/reminders` | 200 reminder list |
//! | `GET` | `/assignments/{id}/timeline` | 200 grouped timeline |
//! | `GET` | `/reminders/due` | 200 pending reminders due by `before` |
//! | `POST` | `/reminders/{id}/complete` | 204 |
//! | `GET` | `/health` | 200 `ok` |
//!
//! Writes are attributed to the user named by the `x-user-id` header, with
//! optional `x-user-name` and `x-user-email`. Failures answer with a JSON
//! `{ "error": ... }` body: 400 for invalid input, 404 for unknown
//! assignments or reminders, and 500 for store failures.

mod actor;
mod dto;
mod error;
mod handlers;
mod state;

pub use actor::{Actor, USER_EMAIL_HEADER, USER_ID_HEADER, USER_NAME_HEADER};
pub use dto::{CreatedBody, DueQuery, ReminderBody, StatusChangeBody};
pub use error::{ApiError, ErrorBody};
pub use state::{AppState, HistoryService, RemindersService, SharedClock, TimelineReadService};

use axum::{
    Router,
    routing::{get, post},
};

/// Builds the API router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/assignments/{id}/created", post(handlers::append_created))
        .route("/assignments/{id}/status", post(handlers::append_status_change))
        .route("/assignments/{id}/notes", post(handlers::append_note))
        .route(
            "/assignments/{id}/reminders",
            post(handlers::schedule_reminder).get(handlers::list_reminders),
        )
        .route("/assignments/{id}/timeline", get(handlers::get_timeline))
        .route("/reminders/due", get(handlers::due_reminders))
        .route("/reminders/{id}/complete", post(handlers::complete_reminder))
        .with_state(state)
}

#[cfg(test)]
mod tests;
