//! Error categories and status-code classification for Edge problem responses.

use serde::{Deserialize, Serialize};

/// HTTP status code the Edge client reports when a request times out locally
/// before any response is received.
pub const CLIENT_TIMEOUT: u16 = 408;

/// Status codes classified as retryable server failures.
///
/// These are a literal, hand-picked set, not a range. Do not generalize them;
/// new codes get added here individually.
pub const SERVER_ERROR_CODES: [u16; 3] = [429, 500, 503];

/// Status codes classified as transport/gateway failures.
pub const NETWORK_ERROR_CODES: [u16; 2] = [502, 504];

/// Client-facing error category for an Edge failure.
///
/// This is a closed set: every failure surfaced by the client maps onto
/// exactly one of these five values, and callers branch on it (retry on
/// [`ServerError`](ErrorCategory::ServerError), surface to the user on
/// [`InvalidRequest`](ErrorCategory::InvalidRequest), and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// The request timed out on the client side with no response
    CallbackTimeout,
    /// Retryable server-side failure (429, 500, 503)
    ServerError,
    /// Transport or gateway failure (502, 504)
    NetworkError,
    /// The request itself was rejected (4xx not covered above)
    InvalidRequest,
    /// Anything that does not match a more specific rule
    UnexpectedError,
}

impl ErrorCategory {
    /// Check if errors in this category are retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::ServerError | ErrorCategory::NetworkError)
    }

    /// Get a human-readable description of this category
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::CallbackTimeout => "Request timed out",
            ErrorCategory::ServerError => "Server error",
            ErrorCategory::NetworkError => "Network error",
            ErrorCategory::InvalidRequest => "Invalid request",
            ErrorCategory::UnexpectedError => "Unexpected error",
        }
    }
}

/// How the category of an [`EdgeError`](crate::errors::EdgeError) is decided.
///
/// The two variants correspond to the two construction paths: either the
/// caller already knows the category (a locally detected condition such as a
/// timeout), or the category is derived from the HTTP status of a problem
/// response. Making this a two-variant input rather than an optional override
/// keeps the precedence rule visible at the type level: an explicit category
/// never goes through status classification at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Use the given category unchanged; the status code is ignored.
    Explicit(ErrorCategory),
    /// Derive the category from the HTTP status, if any.
    FromStatus(Option<u16>),
}

impl Classification {
    /// Resolve to a concrete category.
    ///
    /// Classification is a priority-ordered decision table, evaluated in this
    /// exact order with first match winning:
    ///
    /// 1. an explicit category is returned unchanged;
    /// 2. the client-timeout code (408) maps to `CallbackTimeout`;
    /// 3. the server set {429, 500, 503} maps to `ServerError`;
    /// 4. the network set {502, 504} maps to `NetworkError`;
    /// 5. any remaining status in 400..=499 maps to `InvalidRequest`;
    /// 6. everything else (no status, 2xx/3xx, unlisted 5xx) degrades to
    ///    `UnexpectedError`.
    ///
    /// The ordering matters: the specific 5xx carve-outs in steps 3 and 4 are
    /// checked before the generic 4xx range, so a code listed in an earlier
    /// set always wins even if a later test would also match it. This never
    /// fails; unrecognized input falls through to the final default rather
    /// than producing an error of its own.
    pub fn resolve(self) -> ErrorCategory {
        match self {
            Classification::Explicit(category) => category,
            Classification::FromStatus(status) => match status {
                Some(CLIENT_TIMEOUT) => ErrorCategory::CallbackTimeout,
                Some(code) if SERVER_ERROR_CODES.contains(&code) => ErrorCategory::ServerError,
                Some(code) if NETWORK_ERROR_CODES.contains(&code) => ErrorCategory::NetworkError,
                Some(code) if (400..=499).contains(&code) => ErrorCategory::InvalidRequest,
                _ => ErrorCategory::UnexpectedError,
            },
        }
    }
}
