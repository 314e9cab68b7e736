//! The normalized Edge error descriptor.

use crate::errors::category::{Classification, ErrorCategory, CLIENT_TIMEOUT};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Result type alias for Edge client operations
pub type EdgeResult<T> = Result<T, EdgeError>;

/// Free-form diagnostic payload attached by the Edge service.
pub type Report = serde_json::Map<String, serde_json::Value>;

const TIMEOUT_TITLE: &str = "Request Timeout";
const TIMEOUT_DETAIL: &str =
    "The Edge Network request timed out before a response was received.";
const UNEXPECTED_TITLE: &str = "Unexpected Error";
const UNEXPECTED_DETAIL: &str = "An unexpected error occurred while processing the request.";

/// Normalized, caller-facing error for a failed Edge request.
///
/// Carries the fields of the remote problem payload through unchanged
/// (`problem_type`, `status`, `title`, `detail`, `report`) plus a `category`
/// that is always populated: it is decided exactly once, at construction,
/// either from an explicit caller-supplied category or from the HTTP status.
/// The descriptor is immutable after construction; mutating `status` on a
/// copy would not re-derive `category`.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{}: {}", .title.as_deref().unwrap_or(.category.description()), .detail.as_deref().unwrap_or("no detail provided"))]
pub struct EdgeError {
    /// Problem-type URI from the remote payload, passed through opaquely
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
    /// HTTP status code of the failure; absent for local failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Short human-readable summary from the payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer human-readable explanation from the payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Free-form diagnostic payload from the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
    /// Canonical classification, never absent
    pub category: ErrorCategory,
}

impl EdgeError {
    fn build(
        problem_type: Option<String>,
        status: Option<u16>,
        title: Option<String>,
        detail: Option<String>,
        report: Option<Report>,
        classification: Classification,
    ) -> Self {
        Self {
            problem_type,
            status,
            title,
            detail,
            report,
            category: classification.resolve(),
        }
    }

    /// Construct a descriptor from a parsed problem payload, deriving the
    /// category from `status`. This is the normal path for remote failures.
    pub fn from_status(
        problem_type: Option<String>,
        status: Option<u16>,
        title: Option<String>,
        detail: Option<String>,
        report: Option<Report>,
    ) -> Self {
        Self::build(
            problem_type,
            status,
            title,
            detail,
            report,
            Classification::FromStatus(status),
        )
    }

    /// Construct a descriptor with a caller-supplied category, bypassing
    /// status classification entirely. Used when the condition was detected
    /// locally and its category is already known.
    pub fn with_category(
        problem_type: Option<String>,
        status: Option<u16>,
        title: Option<String>,
        detail: Option<String>,
        report: Option<Report>,
        category: ErrorCategory,
    ) -> Self {
        Self::build(
            problem_type,
            status,
            title,
            detail,
            report,
            Classification::Explicit(category),
        )
    }

    /// Canned descriptor for a request that timed out on the client side.
    pub fn timeout() -> Self {
        Self::with_category(
            None,
            Some(CLIENT_TIMEOUT),
            Some(TIMEOUT_TITLE.to_string()),
            Some(TIMEOUT_DETAIL.to_string()),
            None,
            ErrorCategory::CallbackTimeout,
        )
    }

    /// Canned descriptor for a failure with no more specific explanation.
    pub fn unexpected() -> Self {
        Self::with_category(
            None,
            None,
            Some(UNEXPECTED_TITLE.to_string()),
            Some(UNEXPECTED_DETAIL.to_string()),
            None,
            ErrorCategory::UnexpectedError,
        )
    }

    /// Returns true if the failure is worth retrying with backoff.
    pub fn is_retryable(&self) -> bool {
        self.category.is_retryable()
    }
}

// Deserialization accepts raw problem payloads that carry no category field;
// a missing category is derived from the status so every deserialized
// descriptor still satisfies the non-absent-category invariant.
impl<'de> Deserialize<'de> for EdgeError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(rename = "type", default)]
            problem_type: Option<String>,
            #[serde(default)]
            status: Option<u16>,
            #[serde(default)]
            title: Option<String>,
            #[serde(default)]
            detail: Option<String>,
            #[serde(default)]
            report: Option<Report>,
            #[serde(default)]
            category: Option<ErrorCategory>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let classification = match raw.category {
            Some(category) => Classification::Explicit(category),
            None => Classification::FromStatus(raw.status),
        };
        Ok(Self::build(
            raw.problem_type,
            raw.status,
            raw.title,
            raw.detail,
            raw.report,
            classification,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn timeout_factory_is_fully_populated() {
        let error = EdgeError::timeout();
        assert_eq!(error.category, ErrorCategory::CallbackTimeout);
        assert_eq!(error.status, Some(CLIENT_TIMEOUT));
        assert!(error.title.as_deref().is_some_and(|t| !t.is_empty()));
        assert!(error.detail.as_deref().is_some_and(|d| !d.is_empty()));
        assert!(error.report.is_none());
        assert!(error.problem_type.is_none());
    }

    #[test]
    fn unexpected_factory_has_no_status() {
        let error = EdgeError::unexpected();
        assert_eq!(error.category, ErrorCategory::UnexpectedError);
        assert_eq!(error.status, None);
        assert!(error.title.as_deref().is_some_and(|t| !t.is_empty()));
        assert!(error.detail.as_deref().is_some_and(|d| !d.is_empty()));
        assert!(error.report.is_none());
    }

    #[test]
    fn explicit_category_overrides_status() {
        let error = EdgeError::with_category(
            None,
            Some(500),
            None,
            None,
            None,
            ErrorCategory::InvalidRequest,
        );
        assert_eq!(error.category, ErrorCategory::InvalidRequest);
    }

    #[test]
    fn category_is_not_rederived_after_construction() {
        let mut error = EdgeError::from_status(None, Some(503), None, None, None);
        assert_eq!(error.category, ErrorCategory::ServerError);

        error.status = Some(404);
        assert_eq!(error.category, ErrorCategory::ServerError);
    }

    #[test]
    fn display_prefers_title_and_detail() {
        let error = EdgeError::from_status(
            None,
            Some(404),
            Some("Not Found".to_string()),
            Some("No such decision scope.".to_string()),
            None,
        );
        assert_eq!(error.to_string(), "Not Found: No such decision scope.");
    }

    #[test]
    fn display_falls_back_to_category_description() {
        let error = EdgeError::from_status(None, Some(500), None, None, None);
        assert_eq!(error.to_string(), "Server error: no detail provided");
    }

    #[test]
    fn serializes_without_absent_fields() {
        let json = serde_json::to_value(EdgeError::unexpected()).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("status"));
        assert!(!object.contains_key("type"));
        assert!(!object.contains_key("report"));
        assert_eq!(object["category"], "UNEXPECTED_ERROR");
    }

    #[test]
    fn deserializes_raw_payload_and_derives_category() {
        let error: EdgeError = serde_json::from_str(
            r#"{
                "type": "https://ns.adobe.com/aep/errors/EXEG-0201-503",
                "status": 503,
                "title": "Service Unavailable",
                "detail": "Upstream dependency is down.",
                "report": {"requestId": "abc-123"}
            }"#,
        )
        .unwrap();

        assert_eq!(error.category, ErrorCategory::ServerError);
        assert_eq!(error.status, Some(503));
        assert_eq!(
            error.report.as_ref().and_then(|r| r.get("requestId")),
            Some(&serde_json::json!("abc-123"))
        );
    }

    #[test]
    fn deserializes_explicit_category_without_reclassifying() {
        let error: EdgeError = serde_json::from_str(
            r#"{"status": 500, "category": "INVALID_REQUEST"}"#,
        )
        .unwrap();
        assert_eq!(error.category, ErrorCategory::InvalidRequest);
    }

    #[test]
    fn descriptor_round_trips_through_serde() {
        let original = EdgeError::timeout();
        let json = serde_json::to_string(&original).unwrap();
        let back: EdgeError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
