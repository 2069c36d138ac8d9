//! Analysis backend boundary.
//!
//! The website-risk analysis itself happens in an external service. This module
//! defines the capability the rest of the crate depends on ([`AnalysisBackend`]),
//! the wire types, and the HTTP implementation. Tests substitute their own
//! backends without touching the coordinator or the interpreter.

mod http;
mod types;

use std::future::Future;

pub use http::HttpBackend;
pub use types::{AnalysisRequest, AnalysisResult, BackendHealth, StaticAnalysis};

use crate::error_handling::BackendError;

/// Something that can turn an [`AnalysisRequest`] into an [`AnalysisResult`].
///
/// Implementations issue exactly one attempt per call: no retries, no caching.
pub trait AnalysisBackend: Send + Sync {
    /// Analyzes one normalized URL.
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult, BackendError>> + Send;
}
