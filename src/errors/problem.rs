//! Wire-format problem payload returned by the Edge service.

use crate::errors::edge_error::{EdgeError, Report};
use serde::Deserialize;
use tracing::debug;

/// Problem-details body as returned by the Edge service on a failed request.
///
/// All fields are optional on the wire; conversion into [`EdgeError`] fills
/// the category from the status. This is the deserialization seam for the
/// transport layer, which hands the converted descriptor to its caller.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemResponse {
    /// Problem-type URI
    #[serde(rename = "type", default)]
    pub problem_type: Option<String>,
    /// HTTP status code echoed in the body
    #[serde(default)]
    pub status: Option<u16>,
    /// Short summary of the problem
    #[serde(default)]
    pub title: Option<String>,
    /// Longer explanation of the problem
    #[serde(default)]
    pub detail: Option<String>,
    /// Free-form diagnostic payload
    #[serde(default)]
    pub report: Option<Report>,
}

impl From<ProblemResponse> for EdgeError {
    fn from(problem: ProblemResponse) -> Self {
        let error = EdgeError::from_status(
            problem.problem_type,
            problem.status,
            problem.title,
            problem.detail,
            problem.report,
        );
        debug!(
            status = ?error.status,
            category = ?error.category,
            problem_type = error.problem_type.as_deref(),
            "classified edge problem response"
        );
        error
    }
}
