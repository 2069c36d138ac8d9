//! site_guard library: website-risk lookups against a static analysis service
//!
//! This library submits a URL to an external analysis backend, tracks the
//! request through a single idle/loading/success/error state, and turns the
//! backend's verdict into a protection gauge reading and a per-signal
//! breakdown. The analysis itself (WHOIS, TLD, keyword and HTTPS checks) lives
//! entirely in the backend.
//!
//! # Example
//!
//! ```no_run
//! use site_guard::{run, Command, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     backend_url: "http://localhost:8000".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run(config, Command::Analyze { url: "example.com".to_string() }).await?;
//! println!("{} succeeded, {} failed", report.succeeded, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod backend;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod interpret;
pub mod render;

// Re-export public API
pub use app::{normalize_url, RequestCoordinator, UiState};
pub use backend::{AnalysisBackend, AnalysisRequest, AnalysisResult, HttpBackend, StaticAnalysis};
pub use config::{Cli, Command, Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{BackendError, SubmitError};
pub use interpret::{derive_protection, derive_signal_breakdown, interpret, RiskCategory};
pub use run::{
    analyze_url, check_health, run, run_interactive, RunReport, EXIT_ANALYSIS_FAILED,
    EXIT_BACKEND_UNHEALTHY, EXIT_SETUP_FAILED, EXIT_SUCCESS,
};

// Internal run module (drives one CLI session)
mod run {
    use std::io::Write;

    use anyhow::{Context, Result};
    use colored::Colorize;
    use log::{error, info, warn};
    use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

    use crate::app::{normalize_url, RequestCoordinator, UiState};
    use crate::backend::{AnalysisBackend, HttpBackend};
    use crate::config::{Command, Config, OutputFormat};
    use crate::error_handling::{categorize_backend_error, FailureStats, SubmitError};
    use crate::initialization::init_client;
    use crate::render::{render_header, render_json, render_loading, render_roadmap, render_state};

    /// Process exit code when every analysis succeeded.
    pub const EXIT_SUCCESS: i32 = 0;
    /// Process exit code when setup, input or output failed.
    pub const EXIT_SETUP_FAILED: i32 = 1;
    /// Process exit code when at least one analysis ended in the error state.
    pub const EXIT_ANALYSIS_FAILED: i32 = 2;
    /// Process exit code when `health` found the backend down or unhealthy.
    pub const EXIT_BACKEND_UNHEALTHY: i32 = 3;

    /// Outcome counts for one session.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct RunReport {
        /// Submissions that reached the backend
        pub submitted: usize,
        /// Submissions that ended in `Success`
        pub succeeded: usize,
        /// Submissions that ended in `Error`
        pub failed: usize,
        /// Set by the health check when the backend is unreachable or unhealthy
        pub backend_unhealthy: bool,
    }

    impl RunReport {
        /// Exit code for a session that ran to completion.
        ///
        /// Failed analyses take precedence over an unhealthy backend; the two
        /// never occur in the same session.
        pub fn exit_code(&self) -> i32 {
            if self.failed > 0 {
                EXIT_ANALYSIS_FAILED
            } else if self.backend_unhealthy {
                EXIT_BACKEND_UNHEALTHY
            } else {
                EXIT_SUCCESS
            }
        }

        fn record(&mut self, state: &UiState) {
            match state {
                UiState::Success(_) => {
                    self.submitted += 1;
                    self.succeeded += 1;
                }
                UiState::Error(_) => {
                    self.submitted += 1;
                    self.failed += 1;
                }
                UiState::Idle | UiState::Loading => {}
            }
        }
    }

    /// Runs one CLI command against the configured backend, writing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or backend URL cannot be set up, if
    /// input cannot be read, or if output cannot be written. Failed analyses
    /// are not errors; they are counted in the returned [`RunReport`].
    pub async fn run(config: Config, command: Command) -> Result<RunReport> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let backend = HttpBackend::new(client, &config.backend_url)
            .context("Failed to configure analysis backend")?;
        info!("Using analysis endpoint {}", backend.analyze_endpoint());

        let mut out = std::io::stdout();
        match command {
            Command::Health => check_health(&backend, &config, &mut out).await,
            Command::Analyze { url } => {
                let coordinator = RequestCoordinator::new(backend);
                if config.output == OutputFormat::Text {
                    writeln!(out, "{}", render_header())?;
                }
                analyze_url(&coordinator, &url, &config, &mut out).await
            }
            Command::Interactive => {
                let coordinator = RequestCoordinator::new(backend);
                let input = BufReader::new(tokio::io::stdin());
                run_interactive(&coordinator, input, &config, &mut out).await
            }
        }
    }

    /// Submits one URL and writes the settled view.
    ///
    /// # Errors
    ///
    /// Returns an error for blank input or when output cannot be written.
    pub async fn analyze_url<B, W>(
        coordinator: &RequestCoordinator<B>,
        raw_url: &str,
        config: &Config,
        out: &mut W,
    ) -> Result<RunReport>
    where
        B: AnalysisBackend,
        W: Write,
    {
        let mut report = RunReport::default();
        submit_and_write(coordinator, raw_url, config, out, &mut report)
            .await
            .with_context(|| format!("Could not submit {raw_url:?}"))?;
        log_failure_summary(&coordinator.failure_stats());
        Ok(report)
    }

    /// Reads URLs line by line and analyzes each in turn.
    ///
    /// Blank lines get a hint and are skipped. Reading stops at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error when input cannot be read or output cannot be written.
    pub async fn run_interactive<B, R, W>(
        coordinator: &RequestCoordinator<B>,
        input: R,
        config: &Config,
        out: &mut W,
    ) -> Result<RunReport>
    where
        B: AnalysisBackend,
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let text = config.output == OutputFormat::Text;
        if text {
            writeln!(out, "{}", render_header())?;
            writeln!(out, "{}", render_roadmap())?;
            writeln!(
                out,
                "{}",
                "Enter a website URL per line (Ctrl-D to finish):".dimmed()
            )?;
        }

        let mut report = RunReport::default();
        let mut lines = input.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read URL from input")?
        {
            match submit_and_write(coordinator, &line, config, out, &mut report).await {
                Ok(()) => {}
                Err(SubmitOutcome::Rejected(SubmitError::EmptyUrl)) => {
                    if text {
                        writeln!(out, "{}", "Please enter a website URL.".dimmed())?;
                    }
                }
                Err(SubmitOutcome::Rejected(SubmitError::InFlight)) => {
                    warn!("Skipped {line:?}: previous analysis still running");
                }
                Err(SubmitOutcome::Io(e)) => return Err(e).context("Failed to write report"),
            }
        }

        info!(
            "Session finished: submitted={}, succeeded={}, failed={}",
            report.submitted, report.succeeded, report.failed
        );
        log_failure_summary(&coordinator.failure_stats());
        Ok(report)
    }

    /// Calls the backend health endpoint and writes the outcome.
    ///
    /// No analysis is submitted; the outcome is carried in
    /// [`RunReport::backend_unhealthy`].
    ///
    /// # Errors
    ///
    /// Returns an error only when output cannot be written.
    pub async fn check_health<W: Write>(
        backend: &HttpBackend,
        config: &Config,
        out: &mut W,
    ) -> Result<RunReport> {
        let endpoint = backend.health_endpoint().as_str();
        let (healthy, status) = match backend.health().await {
            Ok(health) => (health.is_healthy(), Some(health.status)),
            Err(e) => {
                error!(
                    "Health check against {endpoint} failed [{}]: {e}",
                    categorize_backend_error(&e)
                );
                (false, None)
            }
        };

        match config.output {
            OutputFormat::Json => writeln!(
                out,
                "{}",
                serde_json::json!({ "endpoint": endpoint, "healthy": healthy, "status": status })
            )?,
            OutputFormat::Text => match (&status, healthy) {
                (Some(_), true) => {
                    writeln!(out, "{} {endpoint}", "Backend healthy:".green().bold())?
                }
                (Some(status), false) => writeln!(
                    out,
                    "{} {endpoint} reported {status:?}",
                    "Backend unhealthy:".yellow().bold()
                )?,
                (None, _) => writeln!(
                    out,
                    "{} {endpoint}",
                    "Backend unreachable:".red().bold()
                )?,
            },
        }

        Ok(RunReport {
            backend_unhealthy: !healthy,
            ..RunReport::default()
        })
    }

    #[derive(Debug, thiserror::Error)]
    enum SubmitOutcome {
        #[error(transparent)]
        Rejected(#[from] SubmitError),
        #[error(transparent)]
        Io(#[from] std::io::Error),
    }

    async fn submit_and_write<B, W>(
        coordinator: &RequestCoordinator<B>,
        raw_url: &str,
        config: &Config,
        out: &mut W,
        report: &mut RunReport,
    ) -> std::result::Result<(), SubmitOutcome>
    where
        B: AnalysisBackend,
        W: Write,
    {
        if raw_url.trim().is_empty() {
            return Err(SubmitError::EmptyUrl.into());
        }

        let url = normalize_url(raw_url);
        if config.output == OutputFormat::Text {
            write!(out, "{}", render_loading(&url))?;
        }

        let state = coordinator.submit(raw_url).await?;
        report.record(&state);

        match config.output {
            OutputFormat::Text => {
                writeln!(out, "{}", render_state(&state, &url, config.show_reasons))?
            }
            OutputFormat::Json => {
                if let Some(json) = render_json(&state, &url).map_err(std::io::Error::from)? {
                    writeln!(out, "{json}")?;
                }
            }
        }
        Ok(())
    }

    fn log_failure_summary(stats: &FailureStats) {
        for (error_type, count) in stats.non_zero() {
            warn!("{error_type}: {count}");
        }
    }
}
