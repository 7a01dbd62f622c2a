//! Actor identity captured into events at write time.

use super::TimelineDomainError;
use serde::{Deserialize, Serialize};

/// Denormalised copy of the acting user, frozen when an event is written.
///
/// Later profile changes never alter historical entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorSnapshot {
    user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl ActorSnapshot {
    /// Creates a snapshot for the given user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineDomainError::EmptyActor`] when the identifier is
    /// empty after trimming.
    pub fn new(user_id: impl Into<String>) -> Result<Self, TimelineDomainError> {
        let raw = user_id.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TimelineDomainError::EmptyActor);
        }
        Ok(Self {
            user_id: trimmed.to_owned(),
            name: None,
            email: None,
        })
    }

    /// Sets the display name recorded with the snapshot.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_blank(name.into());
        self
    }

    /// Sets the email address recorded with the snapshot.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_blank(email.into());
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the display name, if captured.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the email address, if captured.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
