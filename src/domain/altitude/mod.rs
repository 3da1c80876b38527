// SPDX-License-Identifier: MPL-2.0
//! Altitude domain types.
//!
//! - [`AltitudeReading`]: GPS altitude with its sea-level datum
//! - [`RelativeAltitude`]: device-reported height above take-off
//! - [`AglResult`]: final above-ground-level answer and how it was obtained
//! - [`Extracted`]: per-field extraction outcome

mod types;

pub use types::{
    AglResult, AglSource, AltitudeReading, AltitudeReference, Extracted, RelativeAltitude,
};
