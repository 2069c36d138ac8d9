//! Configuration constants.
//!
//! This module defines the constants used throughout the application: backend
//! endpoint paths, URL normalization markers, and the fixed user-facing failure text.

/// Backend used when neither `--backend-url` nor `SITE_GUARD_BACKEND_URL` is set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable consulted for the backend base URL.
pub const BACKEND_URL_ENV: &str = "SITE_GUARD_BACKEND_URL";

/// Path of the static analysis endpoint, joined onto the backend base URL.
pub const ANALYZE_STATIC_PATH: &str = "/analyze/static";

/// Path of the backend liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

// URL normalization
/// Inputs whose trimmed text starts with this marker are sent unchanged.
///
/// This is a purely syntactic prefix check: `httpfoo` passes untouched.
pub const SCHEME_MARKER: &str = "http";
/// Prefix added to inputs that lack the scheme marker.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// The only error text ever shown to the user for a failed analysis.
///
/// Network failures, non-2xx responses and malformed bodies all collapse into
/// this message. The underlying cause goes to the diagnostic log.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze website. Ensure the analysis backend is running and reachable.";

/// Default User-Agent string for backend requests.
pub const DEFAULT_USER_AGENT: &str = concat!("site_guard/", env!("CARGO_PKG_VERSION"));

// Result interpretation
/// Domains must be strictly older than this many days to count as established.
pub const ESTABLISHED_DOMAIN_MIN_DAYS: i64 = 30;

/// Needle angle for 0% protection (full left).
pub const NEEDLE_MIN_DEGREES: f64 = -90.0;
/// Total needle sweep from 0% to 100% protection.
pub const NEEDLE_SWEEP_DEGREES: f64 = 180.0;
