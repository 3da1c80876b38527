// SPDX-License-Identifier: MPL-2.0
//! Metadata extraction from image files.
//!
//! - [`gps`]: position and recorded altitude from the EXIF GPS IFD
//! - [`xmp`]: device-reported altitudes from the embedded XMP packet
//!
//! Both readers work on the raw file bytes and are independent of each other.

pub mod gps;
pub mod xmp;

pub use gps::{read_gps, GeotagFields, GpsReading};
pub use xmp::{read_packet_altitudes, PacketAltitudes, PacketStatus};
