// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so the resolver stays independent of any
//! concrete terrain model.
//!
//! # Available Ports
//!
//! - [`elevation`]: Ground elevation lookup
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so resolvers can be shared between threads
//! - "No data" is a normal outcome (`None`), not an error
//! - No `async fn`; lookups are plain blocking calls

pub mod elevation;

// Re-export main types for convenience
pub use elevation::{ElevationProvider, FixedElevation, NoElevationModel};
