//! Tests for actor extraction from request headers.

use axum::{
    extract::FromRequestParts,
    http::{Request, StatusCode},
};
use rstest::rstest;

use crate::http::{Actor, USER_EMAIL_HEADER, USER_ID_HEADER, USER_NAME_HEADER};

async fn extract(headers: &[(&str, &str)]) -> Result<Actor, crate::http::ApiError> {
    let mut builder = Request::builder().uri("/");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let (mut parts, ()) = builder.body(()).expect("request").into_parts();
    Actor::from_request_parts(&mut parts, &()).await
}

#[rstest]
#[tokio::test]
async fn all_identity_headers_are_captured() {
    let Actor(actor) = extract(&[
        (USER_ID_HEADER, "u-42"),
        (USER_NAME_HEADER, "Dev Patel"),
        (USER_EMAIL_HEADER, "dev@example.com"),
    ])
    .await
    .expect("actor");

    assert_eq!(actor.user_id(), "u-42");
    assert_eq!(actor.name(), Some("Dev Patel"));
    assert_eq!(actor.email(), Some("dev@example.com"));
}

#[rstest]
#[tokio::test]
async fn optional_headers_may_be_absent() {
    let Actor(actor) = extract(&[(USER_ID_HEADER, "u-42")]).await.expect("actor");

    assert_eq!(actor.name(), None);
    assert_eq!(actor.email(), None);
}

#[rstest]
#[case(&[])]
#[case(&[(USER_ID_HEADER, "   ")])]
#[tokio::test]
async fn missing_or_blank_user_id_is_rejected(#[case] headers: &[(&str, &str)]) {
    let err = extract(headers).await.expect_err("actor must be rejected");
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}
