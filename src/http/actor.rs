//! Acting-user extraction from upstream-authenticated headers.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::ApiError;
use crate::timeline::domain::ActorSnapshot;

/// Header carrying the authenticated user identifier.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the user's display name.
pub const USER_NAME_HEADER: &str = "x-user-name";
/// Header carrying the user's email address.
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// The user performing a request, snapshotted for event attribution.
///
/// Authentication happens upstream; this extractor only reads the identity
/// the gateway forwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(pub ActorSnapshot);

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };

        let user_id = header(USER_ID_HEADER)
            .ok_or_else(|| ApiError::validation(format!("missing {USER_ID_HEADER} header")))?;
        let mut snapshot = ActorSnapshot::new(user_id)?;
        if let Some(name) = header(USER_NAME_HEADER) {
            snapshot = snapshot.with_name(name);
        }
        if let Some(email) = header(USER_EMAIL_HEADER) {
            snapshot = snapshot.with_email(email);
        }
        Ok(Self(snapshot))
    }
}
