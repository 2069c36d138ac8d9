//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured backend base URL cannot be parsed or joined.
    #[error("Invalid backend URL {url:?}: {reason}")]
    InvalidBackendUrlError {
        /// The offending value.
        url: String,
        /// Parser message.
        reason: String,
    },
}

/// Failure of a single call to the analysis backend.
///
/// All variants are presented to the user identically.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("backend request failed: {0}")]
    Network(#[from] ReqwestError),

    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// The 2xx response body does not match the analysis result shape.
    #[error("backend response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Reasons a submission is refused before any request is issued.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The URL field was blank.
    #[error("a website URL is required")]
    EmptyUrl,

    /// Another analysis is still in flight.
    #[error("an analysis is already in progress")]
    InFlight,
}

/// Diagnostic categories for backend failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorType {
    /// TCP or TLS connection to the backend failed
    BackendConnectError,
    /// The configured timeout elapsed
    BackendTimeoutError,
    /// Any other transport failure
    BackendRequestError,
    /// 4xx
    BackendClientStatus,
    /// 5xx and anything else non-2xx
    BackendServerStatus,
    /// 2xx body that is not an analysis result
    ResponseDecodeError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::BackendConnectError => "Backend connect error",
            ErrorType::BackendTimeoutError => "Backend timeout",
            ErrorType::BackendRequestError => "Backend request error",
            ErrorType::BackendClientStatus => "Backend rejected request (4xx)",
            ErrorType::BackendServerStatus => "Backend server error",
            ErrorType::ResponseDecodeError => "Malformed analysis response",
        }
    }
}
