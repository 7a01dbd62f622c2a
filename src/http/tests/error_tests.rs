//! Tests for error-to-response mapping.

use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use rstest::rstest;

use crate::{
    http::{ApiError, ErrorBody},
    timeline::{
        domain::{AssignmentId, ReminderId, TimelineDomainError},
        ports::{EventLogError, ReminderRepositoryError},
        services::{ErrorKind, EventLogServiceError, ReminderServiceError, TimelineServiceError},
    },
};

async fn body_of(err: ApiError) -> (StatusCode, ErrorBody) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("json error body");
    (status, body)
}

#[rstest]
#[case(ApiError::from(TimelineDomainError::EmptyNote), StatusCode::BAD_REQUEST)]
#[case(
    ApiError::from(EventLogServiceError::AssignmentNotFound(AssignmentId::new())),
    StatusCode::NOT_FOUND
)]
#[case(
    ApiError::from(ReminderServiceError::ReminderNotFound(ReminderId::new())),
    StatusCode::NOT_FOUND
)]
#[case(
    ApiError::from(TimelineServiceError::EventLog(EventLogError::persistence(
        std::io::Error::other("socket closed")
    ))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn service_errors_map_to_status_codes(#[case] err: ApiError, #[case] expected: StatusCode) {
    assert_eq!(err.status_code(), expected);
}

#[rstest]
#[tokio::test]
async fn validation_message_is_returned() {
    let (status, body) = body_of(ApiError::from(TimelineDomainError::EmptyNote)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "note must contain at least one non-empty field");
}

#[rstest]
#[tokio::test]
async fn store_details_are_not_returned() {
    let err = ApiError::from(ReminderServiceError::Repository(
        ReminderRepositoryError::persistence(std::io::Error::other("password=hunter2")),
    ));
    assert_eq!(err.kind(), ErrorKind::Store);

    let (status, body) = body_of(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "internal server error");
}

#[rstest]
fn repository_not_found_is_not_a_store_failure() {
    let err = ApiError::from(ReminderServiceError::Repository(
        ReminderRepositoryError::NotFound(ReminderId::new()),
    ));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}
