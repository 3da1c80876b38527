// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure value objects for geotags and altitudes. It has no
//! dependencies on external crates (except `std`) so the resolution rules can be
//! tested without image files or elevation data.
//!
//! # Modules
//!
//! - [`altitude`]: Altitude types ([`AltitudeReading`](altitude::AltitudeReading),
//!   [`AglResult`](altitude::AglResult), [`Extracted`](altitude::Extracted))
//! - [`geo`]: Geographic types ([`Coordinate`](geo::Coordinate),
//!   [`GeoPosition`](geo::GeoPosition), [`Hemisphere`](geo::Hemisphere))

pub mod altitude;
pub mod geo;
