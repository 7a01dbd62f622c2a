//! Router-level tests for the assignment history API.

use std::sync::Mutex;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use filingtrail::http::{AppState, SharedClock, USER_ID_HEADER, USER_NAME_HEADER, router};
use http_body_util::BodyExt;
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

struct TickingClock {
    next: Mutex<DateTime<Utc>>,
}

impl TickingClock {
    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 6, 10, 0, 0)
            .single()
            .expect("valid start time")
    }
}

impl Clock for TickingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock lock");
        let now = *next;
        *next = now + Duration::minutes(1);
        now
    }
}

#[fixture]
fn app() -> Router {
    let clock = SharedClock::new(TickingClock {
        next: Mutex::new(TickingClock::start()),
    });
    router(AppState::in_memory(clock))
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(USER_ID_HEADER, "u-42")
        .header(USER_NAME_HEADER, "Ravi Menon")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn created_id(body: &Value) -> String {
    body.get("id")
        .and_then(Value::as_str)
        .expect("created body carries an id")
        .to_owned()
}

#[rstest]
#[tokio::test]
async fn health_reports_ok(app: Router) {
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_owned()));
}

#[rstest]
#[tokio::test]
async fn writes_return_created_identifiers(app: Router) {
    let assignment = Uuid::new_v4();

    let (status, body) = send(
        &app,
        post_json(
            &format!("/assignments/{assignment}/status"),
            &json!({ "assignment_status": "scrutiny-raised" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    Uuid::parse_str(&created_id(&body)).expect("event id is a UUID");

    let (note_status, _) = send(
        &app,
        post_json(
            &format!("/assignments/{assignment}/notes"),
            &json!({ "legal_note": "engagement letter unsigned" }),
        ),
    )
    .await;
    assert_eq!(note_status, StatusCode::CREATED);
}

#[rstest]
#[tokio::test]
async fn timeline_groups_entries_by_status(app: Router) {
    let assignment = Uuid::new_v4();
    let base = format!("/assignments/{assignment}");

    for request in [
        post_json(&format!("{base}/status"), &json!({ "assignment_status": "new" })),
        post_json(
            &format!("{base}/status"),
            &json!({ "assignment_status": "info-pending-client" }),
        ),
        post_json(&format!("{base}/notes"), &json!({ "finance_note": "fee pending" })),
        post_json(
            &format!("{base}/reminders"),
            &json!({ "date_and_time": "2026-04-08T09:00:00Z", "message": "chase client" }),
        ),
    ] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::CREATED, "unexpected response {body}");
    }

    let (status, body) = send(&app, get(&format!("{base}/timeline"))).await;
    assert_eq!(status, StatusCode::OK);

    let groups = body.as_array().expect("timeline is an array of groups");
    assert_eq!(groups.len(), 2);
    let newest = groups.first().expect("newest group");
    assert_eq!(newest["assignment_status"], "info-pending-client");
    let types: Vec<&str> = newest["events"]
        .as_array()
        .expect("group events")
        .iter()
        .filter_map(|event| event["event_type"].as_str())
        .collect();
    assert_eq!(types, ["reminder_set", "note_added", "status_changed"]);
    assert_eq!(newest["events"][1]["created_by"]["user_id"], "u-42");
}

#[rstest]
#[tokio::test]
async fn unknown_assignment_has_empty_timeline(app: Router) {
    let (status, body) = send(
        &app,
        get(&format!("/assignments/{}/timeline", Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[case::empty_note("notes", json!({}))]
#[case::blank_note("notes", json!({ "it_note": "   " }))]
#[case::two_note_fields("notes", json!({ "it_note": "a", "general_note": "b" }))]
#[case::blank_status("status", json!({ "assignment_status": " " }))]
#[case::missing_status("status", json!({}))]
#[case::missing_due("reminders", json!({ "message": "call" }))]
#[case::blank_message("reminders", json!({ "date_and_time": "2026-04-08T09:00:00Z", "message": "" }))]
#[tokio::test]
async fn invalid_writes_are_rejected(app: Router, #[case] path: &str, #[case] payload: Value) {
    let assignment = Uuid::new_v4();

    let (status, body) = send(
        &app,
        post_json(&format!("/assignments/{assignment}/{path}"), &payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").and_then(Value::as_str).is_some());

    let (_, timeline) = send(&app, get(&format!("/assignments/{assignment}/timeline"))).await;
    assert_eq!(timeline, json!([]));
}

#[rstest]
#[tokio::test]
async fn missing_actor_header_is_rejected(app: Router) {
    let request = Request::post(format!("/assignments/{}/status", Uuid::new_v4()))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "assignment_status": "new" }).to_string()))
        .expect("request builds");

    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn malformed_identifier_is_rejected(app: Router) {
    let (status, _) = send(&app, get("/assignments/not-a-uuid/timeline")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn completing_unknown_reminder_is_not_found(app: Router) {
    let request = Request::post(format!("/reminders/{}/complete", Uuid::new_v4()))
        .body(Body::empty())
        .expect("request builds");

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("error").is_some());
}

#[rstest]
#[tokio::test]
async fn completing_a_reminder_is_idempotent(app: Router) {
    let assignment = Uuid::new_v4();
    let (_, body) = send(
        &app,
        post_json(
            &format!("/assignments/{assignment}/reminders"),
            &json!({ "date_and_time": "2026-04-07T09:00:00Z", "message": "file return" }),
        ),
    )
    .await;
    let reminder = created_id(&body);

    for _ in 0..2 {
        let request = Request::post(format!("/reminders/{reminder}/complete"))
            .body(Body::empty())
            .expect("request builds");
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (_, timeline) = send(&app, get(&format!("/assignments/{assignment}/timeline"))).await;
    let completed = timeline
        .as_array()
        .expect("timeline groups")
        .iter()
        .flat_map(|group| group["events"].as_array().cloned().unwrap_or_default())
        .filter(|event| event["event_type"] == "reminder_completed")
        .count();
    assert_eq!(completed, 1);
}

#[rstest]
#[tokio::test]
async fn due_reminders_respect_the_cutoff(app: Router) {
    let assignment = Uuid::new_v4();
    for due in ["2026-04-07T09:00:00Z", "2026-04-20T09:00:00Z"] {
        let (status, _) = send(
            &app,
            post_json(
                &format!("/assignments/{assignment}/reminders"),
                &json!({ "date_and_time": due, "message": "follow up" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get("/reminders/due?before=2026-04-10T00:00:00Z")).await;

    assert_eq!(status, StatusCode::OK);
    let due = body.as_array().expect("reminder list");
    assert_eq!(due.len(), 1);
    let first = due.first().expect("one due reminder");
    assert_eq!(first["date_and_time"], "2026-04-07T09:00:00Z");
}
