// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap file and dataset access.
//!
//! # Available Adapters
//!
//! - [`srtm`]: Ground elevation from local SRTM tiles (implements [`ElevationProvider`])
//!
//! [`ElevationProvider`]: crate::application::port::ElevationProvider

pub mod srtm;

// Re-export main types for convenience
pub use srtm::SrtmTiles;
