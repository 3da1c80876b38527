// SPDX-License-Identifier: MPL-2.0
//! Geographic domain types.
//!
//! - [`Coordinate`]: complete latitude/longitude pair
//! - [`GeoPosition`]: possibly partial pair, as extracted from an image
//! - [`Hemisphere`]: `N`/`S`/`E`/`W` reference
//! - [`dms_to_decimal`]: degrees/minutes/seconds conversion

mod dms;
mod types;

pub use dms::{dms_to_decimal, DmsValue, Numeric};
pub use types::{is_valid_latitude, is_valid_longitude, Coordinate, GeoPosition, Hemisphere};
