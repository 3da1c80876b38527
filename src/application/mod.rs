// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`resolver`]: AGL resolution use case
//! - [`location_cache`]: Last extracted image position
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The command-line front end wires both together
//!
//! # Example
//!
//! ```no_run
//! use image_agl::application::AglResolver;
//! use image_agl::infrastructure::SrtmTiles;
//!
//! let resolver = AglResolver::new(SrtmTiles::new("/data/srtm"));
//! let result = resolver.resolve_file("DJI_0042.JPG")?;
//! println!("{:.2} m above ground", result.agl_m());
//! # Ok::<(), image_agl::error::Error>(())
//! ```

pub mod location_cache;
pub mod port;
pub mod resolver;

pub use location_cache::LocationCache;
pub use resolver::{AglError, AglResolver};
