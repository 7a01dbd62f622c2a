//! Workflow status values carried by every timeline event.
//!
//! The write path accepts any non-empty status string. Historical rows use
//! free-form values, so membership in [`KnownStatus`] is offered as an opt-in
//! check for boundary layers rather than enforced here.

use super::TimelineDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form workflow status of an assignment.
///
/// # Examples
///
/// ```
/// use filingtrail::timeline::domain::{AssignmentStatus, KnownStatus};
///
/// let status = AssignmentStatus::new(" scrutiny-raised-d2 ").expect("non-empty status");
/// assert_eq!(status.as_str(), "scrutiny-raised-d2");
/// assert_eq!(status.known(), Some(KnownStatus::ScrutinyRaisedD2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssignmentStatus(String);

impl AssignmentStatus {
    /// Creates a status from any non-empty string.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineDomainError::EmptyStatus`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TimelineDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TimelineDomainError::EmptyStatus);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the status as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the catalogued status this value names, if any.
    #[must_use]
    pub fn known(&self) -> Option<KnownStatus> {
        KnownStatus::try_from(self.as_str()).ok()
    }
}

impl From<KnownStatus> for AssignmentStatus {
    fn from(value: KnownStatus) -> Self {
        Self(value.as_str().to_owned())
    }
}

impl TryFrom<String> for AssignmentStatus {
    type Error = TimelineDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssignmentStatus> for String {
    fn from(value: AssignmentStatus) -> Self {
        value.0
    }
}

impl AsRef<str> for AssignmentStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status names shown by the assignment workflow board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownStatus {
    /// Assignment has just been opened.
    New,
    /// Waiting on documents from the client.
    InfoPendingClient,
    /// Waiting on documents from the promoter.
    InfoPendingPromoter,
    /// Waiting on information from the authority.
    InfoPendingAuthority,
    /// Government fees have not been paid yet.
    GovtFeesPending,
    /// Application has been filed.
    ApplicationDone,
    /// Authority raised a scrutiny query.
    ScrutinyRaised,
    /// First scrutiny deficiency round.
    ScrutinyRaisedD1,
    /// Second scrutiny deficiency round.
    ScrutinyRaisedD2,
    /// Third scrutiny deficiency round.
    ScrutinyRaisedD3,
    /// Fourth scrutiny deficiency round.
    ScrutinyRaisedD4,
    /// Application is pending with the authority.
    AppPending,
    /// Pending after the first deficiency reply.
    AppPendingD1,
    /// Pending after the second deficiency reply.
    AppPendingD2,
    /// Pending after the third deficiency reply.
    AppPendingD3,
    /// Pending after the fourth deficiency reply.
    AppPendingD4,
    /// Authority issued the certificate.
    CertificateGenerated,
    /// Assignment closed.
    Close,
    /// Quarterly progress report submitted.
    QprSubmitted,
    /// Form 5 submitted.
    Form5Submitted,
    /// Form 2A submitted.
    Form2aSubmitted,
    /// Work completed.
    WorkDone,
    /// Reply to an authority notice sent.
    ReplyToNoticeSent,
    /// Email sent to the authority.
    EmailSentToAuthority,
}

impl KnownStatus {
    /// Every catalogued status in board order.
    pub const ALL: [Self; 24] = [
        Self::New,
        Self::InfoPendingClient,
        Self::InfoPendingPromoter,
        Self::InfoPendingAuthority,
        Self::GovtFeesPending,
        Self::ApplicationDone,
        Self::ScrutinyRaised,
        Self::ScrutinyRaisedD1,
        Self::ScrutinyRaisedD2,
        Self::ScrutinyRaisedD3,
        Self::ScrutinyRaisedD4,
        Self::AppPending,
        Self::AppPendingD1,
        Self::AppPendingD2,
        Self::AppPendingD3,
        Self::AppPendingD4,
        Self::CertificateGenerated,
        Self::Close,
        Self::QprSubmitted,
        Self::Form5Submitted,
        Self::Form2aSubmitted,
        Self::WorkDone,
        Self::ReplyToNoticeSent,
        Self::EmailSentToAuthority,
    ];

    /// Returns the canonical status string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InfoPendingClient => "info-pending-client",
            Self::InfoPendingPromoter => "info-pending-promoter",
            Self::InfoPendingAuthority => "info-pending-authority",
            Self::GovtFeesPending => "govt-fees-pending",
            Self::ApplicationDone => "application-done",
            Self::ScrutinyRaised => "scrutiny-raised",
            Self::ScrutinyRaisedD1 => "scrutiny-raised-d1",
            Self::ScrutinyRaisedD2 => "scrutiny-raised-d2",
            Self::ScrutinyRaisedD3 => "scrutiny-raised-d3",
            Self::ScrutinyRaisedD4 => "scrutiny-raised-d4",
            Self::AppPending => "app-pending",
            Self::AppPendingD1 => "app-pending-d1",
            Self::AppPendingD2 => "app-pending-d2",
            Self::AppPendingD3 => "app-pending-d3",
            Self::AppPendingD4 => "app-pending-d4",
            Self::CertificateGenerated => "certificate-generated",
            Self::Close => "close",
            Self::QprSubmitted => "qpr-submitted",
            Self::Form5Submitted => "form-5-submitted",
            Self::Form2aSubmitted => "form-2a-submitted",
            Self::WorkDone => "work-done",
            Self::ReplyToNoticeSent => "reply-to-notice-sent",
            Self::EmailSentToAuthority => "email-sent-to-authority",
        }
    }
}

impl TryFrom<&str> for KnownStatus {
    type Error = TimelineDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(TimelineDomainError::EmptyStatus);
        }
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| TimelineDomainError::UnknownStatus(normalized.to_owned()))
    }
}

impl fmt::Display for KnownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
