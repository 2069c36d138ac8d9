//! Failure statistics tracking.
//!
//! This module provides thread-safe counters for backend failures observed
//! during one session.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe failure counter keyed by [`ErrorType`].
///
/// All types are initialized to zero on creation, so lookups never miss.
pub struct FailureStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl FailureStats {
    /// Creates a tracker with every category at zero.
    pub fn new() -> Self {
        let errors = ErrorType::iter()
            .map(|error| (error, AtomicUsize::new(0)))
            .collect();
        FailureStats { errors }
    }

    /// Records one failure of the given category.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Returns how many failures of the given category were recorded.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|counter| counter.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Returns the number of failures across all categories.
    pub fn total_errors(&self) -> usize {
        self.errors
            .values()
            .map(|counter| counter.load(Ordering::SeqCst))
            .sum()
    }

    /// Returns non-zero categories in declaration order.
    pub fn non_zero(&self) -> Vec<(ErrorType, usize)> {
        ErrorType::iter()
            .map(|error| (error, self.get_error_count(error)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FailureStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.non_zero()).finish()
    }
}
