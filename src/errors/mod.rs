//! Error types for the Edge Network client.
//!
//! This module provides the client-facing error taxonomy: the five-member
//! [`ErrorCategory`], the normalized [`EdgeError`] descriptor, and the
//! [`ProblemResponse`] wire payload it is built from.

mod category;
mod edge_error;
mod problem;

pub use category::{
    Classification, ErrorCategory, CLIENT_TIMEOUT, NETWORK_ERROR_CODES, SERVER_ERROR_CODES,
};
pub use edge_error::{EdgeError, EdgeResult, Report};
pub use problem::ProblemResponse;
