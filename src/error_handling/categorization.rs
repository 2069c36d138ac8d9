//! Error categorization.
//!
//! Maps backend failures onto [`ErrorType`] for logging and session statistics.

use super::types::{BackendError, ErrorType};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_timeout() {
        ErrorType::BackendTimeoutError
    } else if error.is_connect() {
        ErrorType::BackendConnectError
    } else if error.is_decode() {
        ErrorType::ResponseDecodeError
    } else {
        ErrorType::BackendRequestError
    }
}

/// Categorizes any backend failure.
pub fn categorize_backend_error(error: &BackendError) -> ErrorType {
    match error {
        BackendError::Network(e) => categorize_reqwest_error(e),
        BackendError::Status(code) => categorize_status(*code),
        BackendError::Decode(_) => ErrorType::ResponseDecodeError,
    }
}

fn categorize_status(code: u16) -> ErrorType {
    if (400..500).contains(&code) {
        ErrorType::BackendClientStatus
    } else {
        ErrorType::BackendServerStatus
    }
}
