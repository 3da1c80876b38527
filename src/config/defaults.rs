// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Behaviour**: Defaults for optional settings
//! - **SRTM**: Tile naming and the data-void marker

// ==========================================================================
// Behaviour Defaults
// ==========================================================================

/// Nearest-sample elevation lookup unless interpolation is requested.
pub const DEFAULT_INTERPOLATE: bool = false;

/// Diagnostic trace lines are off by default.
pub const DEFAULT_VERBOSE: bool = false;

// ==========================================================================
// SRTM Tiles
// ==========================================================================

/// Sample value marking a data void.
pub const SRTM_VOID: i16 = -32768;

/// File extension of SRTM tiles.
pub const SRTM_EXTENSION: &str = "hgt";
