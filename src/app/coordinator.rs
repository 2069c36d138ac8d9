//! Request coordination and UI state.
//!
//! [`RequestCoordinator`] is the only writer of the session's [`UiState`]. The
//! state lives in a `tokio::sync::watch` channel: renderers and tests subscribe
//! to read it, and the coordinator swaps variants as submissions progress.
//!
//! At most one analysis is in flight. Claiming the `Loading` state is a single
//! check-and-set on the channel, so a second submission made while one is
//! pending is refused without issuing a request.

use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::watch;

use crate::backend::{AnalysisBackend, AnalysisRequest, AnalysisResult};
use crate::config::ANALYSIS_FAILED_MESSAGE;
use crate::error_handling::{categorize_backend_error, FailureStats, SubmitError};

/// The session's presentation state. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    /// Nothing submitted yet, or the last attempt was abandoned.
    #[default]
    Idle,
    /// A request is in flight; submitting is disabled.
    Loading,
    /// The backend answered with a verdict.
    Success(AnalysisResult),
    /// The last attempt failed; holds the user-facing message.
    Error(String),
}

impl UiState {
    /// Returns `true` while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// The verdict, when the last attempt succeeded.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            UiState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The user-facing message, when the last attempt failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Drives submissions against an [`AnalysisBackend`] and owns [`UiState`].
pub struct RequestCoordinator<B> {
    backend: B,
    state: watch::Sender<UiState>,
    stats: Arc<FailureStats>,
}

impl<B: AnalysisBackend> RequestCoordinator<B> {
    /// Creates a coordinator in the `Idle` state.
    pub fn new(backend: B) -> Self {
        let (state, _) = watch::channel(UiState::Idle);
        Self {
            backend,
            state,
            stats: Arc::new(FailureStats::new()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Read-only view of state changes.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.borrow().is_loading()
    }

    /// Failure counters accumulated by this coordinator.
    pub fn failure_stats(&self) -> Arc<FailureStats> {
        Arc::clone(&self.stats)
    }

    /// The backend this coordinator submits to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Submits one URL for analysis and waits for it to resolve.
    ///
    /// On success the state becomes `Success` holding the backend's verdict.
    /// Any transport, status or decode failure is logged with its category and
    /// the state becomes `Error` with the fixed user-facing message; no partial
    /// result is kept.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::EmptyUrl`] when `raw_url` is blank. State is untouched.
    /// - [`SubmitError::InFlight`] when another submission has not resolved.
    ///   No request is issued and state is untouched.
    ///
    /// # Returns
    ///
    /// The settled state (`Success` or `Error`).
    pub async fn submit(&self, raw_url: &str) -> Result<UiState, SubmitError> {
        if raw_url.trim().is_empty() {
            return Err(SubmitError::EmptyUrl);
        }

        let claimed = self.state.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = UiState::Loading;
                true
            }
        });
        if !claimed {
            warn!("Ignoring submission of {raw_url:?}: an analysis is already in progress");
            return Err(SubmitError::InFlight);
        }

        let mut pending = PendingSubmission {
            state: &self.state,
            settled: false,
        };

        let request = AnalysisRequest::new(raw_url);
        info!("Analyzing {}", request.url);

        let next = match self.backend.analyze(&request).await {
            Ok(result) => {
                info!(
                    "Analysis of {} finished with risk score {}",
                    request.url, result.static_risk_score
                );
                UiState::Success(result)
            }
            Err(e) => {
                let category = categorize_backend_error(&e);
                self.stats.increment_error(category);
                error!("Analysis of {} failed [{category}]: {e}", request.url);
                UiState::Error(ANALYSIS_FAILED_MESSAGE.to_string())
            }
        };

        pending.settle(next.clone());
        Ok(next)
    }
}

/// Returns the state to `Idle` if a claimed submission is dropped before it settles.
struct PendingSubmission<'a> {
    state: &'a watch::Sender<UiState>,
    settled: bool,
}

impl PendingSubmission<'_> {
    fn settle(&mut self, next: UiState) {
        self.settled = true;
        self.state.send_replace(next);
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.state.send_if_modified(|state| {
                if state.is_loading() {
                    *state = UiState::Idle;
                    true
                } else {
                    false
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::StaticAnalysis;
    use crate::error_handling::{BackendError, ErrorType};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn sample_result(score: f64) -> AnalysisResult {
        AnalysisResult {
            static_risk_score: score,
            static_reasons: vec![],
            static_analysis: StaticAnalysis {
                domain: Some("example.com".to_string()),
                domain_age_days: Some(4000),
                has_https: true,
                suspicious_keywords: vec![],
                suspicious_tld: false,
                tld: ".com".to_string(),
            },
        }
    }

    /// Records requests and fails with queued statuses before succeeding.
    struct ScriptedBackend {
        calls: AtomicUsize,
        seen: Mutex<Vec<String>>,
        failures: Mutex<VecDeque<u16>>,
    }

    impl ScriptedBackend {
        fn ok() -> Self {
            Self::failing(&[])
        }

        fn failing(statuses: &[u16]) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                failures: Mutex::new(statuses.iter().copied().collect()),
            }
        }
    }

    impl AnalysisBackend for ScriptedBackend {
        async fn analyze(
            &self,
            request: &AnalysisRequest,
        ) -> Result<AnalysisResult, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.url.clone());
            let failure = self.failures.lock().unwrap().pop_front();
            match failure {
                Some(status) => Err(BackendError::Status(status)),
                None => Ok(sample_result(12.0)),
            }
        }
    }

    #[test]
    fn test_starts_idle() {
        let coordinator = RequestCoordinator::new(ScriptedBackend::ok());
        assert_eq!(coordinator.state(), UiState::Idle);
        assert!(coordinator.can_submit());
    }

    #[tokio::test]
    async fn test_success_holds_result() {
        let coordinator = RequestCoordinator::new(ScriptedBackend::ok());
        let settled = coordinator.submit("example.com").await.unwrap();

        assert_eq!(settled.result(), Some(&sample_result(12.0)));
        assert_eq!(coordinator.state(), settled);
        assert!(coordinator.can_submit());
        assert_eq!(
            coordinator.backend().seen.lock().unwrap().as_slice(),
            ["https://example.com"]
        );
    }

    #[tokio::test]
    async fn test_failure_uses_generic_message() {
        let coordinator = RequestCoordinator::new(ScriptedBackend::failing(&[500]));
        let settled = coordinator.submit("example.com").await.unwrap();

        assert_eq!(settled.error_message(), Some(ANALYSIS_FAILED_MESSAGE));
        assert!(settled.result().is_none());
        assert!(!coordinator.state().is_loading());
        assert_eq!(
            coordinator
                .failure_stats()
                .get_error_count(ErrorType::BackendServerStatus),
            1
        );
    }

    #[tokio::test]
    async fn test_blank_input_rejected_without_request() {
        let coordinator = RequestCoordinator::new(ScriptedBackend::ok());
        assert_eq!(coordinator.submit("   ").await, Err(SubmitError::EmptyUrl));
        assert_eq!(coordinator.backend().calls.load(Ordering::SeqCst), 0);
        assert_eq!(coordinator.state(), UiState::Idle);
    }

    #[tokio::test]
    async fn test_success_after_error_clears_error() {
        let coordinator = RequestCoordinator::new(ScriptedBackend::failing(&[502]));
        coordinator.submit("bad.example").await.unwrap();
        assert!(coordinator.state().error_message().is_some());

        let settled = coordinator.submit("good.example").await.unwrap();
        assert!(settled.error_message().is_none());
        assert!(settled.result().is_some());
        assert_eq!(coordinator.backend().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dropped_submission_returns_to_idle() {
        let (state, _) = watch::channel(UiState::Loading);
        {
            let _pending = PendingSubmission {
                state: &state,
                settled: false,
            };
        }
        assert_eq!(*state.borrow(), UiState::Idle);
    }

    #[test]
    fn test_settled_submission_keeps_state() {
        let (state, _) = watch::channel(UiState::Loading);
        {
            let mut pending = PendingSubmission {
                state: &state,
                settled: false,
            };
            pending.settle(UiState::Error("x".to_string()));
        }
        assert_eq!(*state.borrow(), UiState::Error("x".to_string()));
    }
}
