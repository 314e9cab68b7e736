//! # Edge Error Classification
//!
//! Normalized error classification for Edge Network problem responses.
//!
//! The Edge service reports failures with an RFC-7807-style problem body
//! (`type`, `status`, `title`, `detail`, plus a free-form `report`). This
//! crate converts that payload into an [`EdgeError`] whose [`ErrorCategory`]
//! is always populated, so callers can branch on a closed set of five
//! client-facing categories instead of raw status codes.
//!
//! ## Classification
//!
//! Categories are decided by a fixed-order decision table: an explicit
//! caller-supplied category wins outright; otherwise 408 maps to
//! `CallbackTimeout`, {429, 500, 503} to `ServerError`, {502, 504} to
//! `NetworkError`, the rest of 400..=499 to `InvalidRequest`, and anything
//! else degrades to `UnexpectedError`. Classification never fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use integrations_edge_errors::{EdgeError, ErrorCategory, ProblemResponse};
//!
//! let body = r#"{"status": 503, "title": "Service Unavailable"}"#;
//! let problem: ProblemResponse = serde_json::from_str(body)?;
//! let error = EdgeError::from(problem);
//!
//! assert_eq!(error.category, ErrorCategory::ServerError);
//! assert!(error.is_retryable());
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! Two canned descriptors cover the local failure paths:
//! [`EdgeError::timeout`] for a request that never got a response, and
//! [`EdgeError::unexpected`] for everything without a better explanation.
//!
//! ## Module Organization
//!
//! - `errors` - Error taxonomy, descriptor, and problem payload bridge

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod errors;

// Re-exports for convenience
pub use errors::{
    Classification, EdgeError, EdgeResult, ErrorCategory, ProblemResponse, Report,
    CLIENT_TIMEOUT, NETWORK_ERROR_CODES, SERVER_ERROR_CODES,
};
