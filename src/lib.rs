// SPDX-License-Identifier: MPL-2.0
//! `image_agl` computes the above-ground-level altitude of a single geotagged
//! image.
//!
//! Drone cameras usually write their height above the take-off point into an
//! XMP packet; when they do, that value is used directly. Otherwise the GPS
//! altitude from EXIF is combined with a terrain model: AGL = recorded altitude
//! (MSL) − ground elevation (MSL) below the image position.
//!
//! ```no_run
//! use image_agl::application::{AglResolver, LocationCache};
//! use image_agl::infrastructure::SrtmTiles;
//!
//! let resolver = AglResolver::new(SrtmTiles::new("/data/srtm"));
//! match resolver.resolve_file("DJI_0042.JPG") {
//!     Ok(result) => println!("AGL: {:.2} m ({})", result.agl_m(), result.source()),
//!     Err(err) => eprintln!("{err}"),
//! }
//!
//! // The position is remembered even when resolution failed.
//! let last = LocationCache::shared().last_position();
//! ```

#![doc(html_root_url = "https://docs.rs/image_agl/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;

#[cfg(test)]
mod test_utils;
