// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

use crate::application::port::ElevationProvider;
use crate::domain::geo::Coordinate;
use std::sync::atomic::{AtomicUsize, Ordering};

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;

/// Elevation provider that counts how often it was queried.
#[derive(Debug, Default)]
pub struct CountingElevation {
    elevation_m: Option<f64>,
    calls: AtomicUsize,
}

impl CountingElevation {
    pub fn new(elevation_m: Option<f64>) -> Self {
        Self {
            elevation_m,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ElevationProvider for CountingElevation {
    fn ground_elevation(&self, _coordinate: Coordinate) -> Option<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.elevation_m
    }
}
