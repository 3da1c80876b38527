// SPDX-License-Identifier: MPL-2.0
//! GPS geotag extraction from the EXIF GPS IFD.
//!
//! Every field is read on its own. A missing or unreadable field never spoils
//! the others, so an image with a broken altitude still yields its position.

use crate::domain::altitude::{AltitudeReading, AltitudeReference, Extracted};
use crate::domain::geo::{
    dms_to_decimal, is_valid_latitude, is_valid_longitude, DmsValue, GeoPosition, Hemisphere,
    Numeric,
};
use exif::{In, Tag, Value};
use std::io::Cursor;
use tracing::{debug, warn};

// =============================================================================
// GeotagFields
// =============================================================================

/// Raw GPS tag values copied out of an EXIF container.
#[derive(Debug, Clone, Default)]
pub struct GeotagFields {
    pub latitude: Option<Value>,
    pub latitude_ref: Option<Value>,
    pub longitude: Option<Value>,
    pub longitude_ref: Option<Value>,
    pub altitude: Option<Value>,
    pub altitude_ref: Option<Value>,
}

impl GeotagFields {
    /// Copies the GPS tags of the primary image.
    #[must_use]
    pub fn from_exif(exif: &exif::Exif) -> Self {
        let get = |tag: Tag| exif.get_field(tag, In::PRIMARY).map(|field| field.value.clone());

        Self {
            latitude: get(Tag::GPSLatitude),
            latitude_ref: get(Tag::GPSLatitudeRef),
            longitude: get(Tag::GPSLongitude),
            longitude_ref: get(Tag::GPSLongitudeRef),
            altitude: get(Tag::GPSAltitude),
            altitude_ref: get(Tag::GPSAltitudeRef),
        }
    }

    /// Reads the EXIF block of an image held in memory.
    ///
    /// Supports every container `kamadak-exif` understands (JPEG, TIFF, HEIF,
    /// PNG, WebP). Broken entries are skipped so the remaining tags are still
    /// read. Returns empty fields when there is no readable EXIF block.
    #[must_use]
    pub fn from_image_bytes(bytes: &[u8]) -> Self {
        let mut cursor = Cursor::new(bytes);
        let exif = exif::Reader::new()
            .continue_on_error(true)
            .read_from_container(&mut cursor)
            .or_else(|err| {
                err.distill_partial_result(|errors| {
                    for error in errors {
                        warn!("Skipping unreadable EXIF entry: {error}");
                    }
                })
            });
        match exif {
            Ok(exif) => Self::from_exif(&exif),
            Err(err) => {
                debug!("No readable EXIF block: {err}");
                Self::default()
            }
        }
    }
}

// =============================================================================
// GpsReading
// =============================================================================

/// Position and recorded altitude extracted from a geotag block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GpsReading {
    /// Signed decimal degrees.
    pub latitude: Extracted<f64>,
    /// Signed decimal degrees.
    pub longitude: Extracted<f64>,
    pub altitude: Extracted<AltitudeReading>,
}

impl GpsReading {
    /// Interprets raw GPS tags.
    #[must_use]
    pub fn from_fields(fields: &GeotagFields) -> Self {
        let reading = Self {
            latitude: read_coordinate(
                fields.latitude.as_ref(),
                fields.latitude_ref.as_ref(),
                is_valid_latitude,
            ),
            longitude: read_coordinate(
                fields.longitude.as_ref(),
                fields.longitude_ref.as_ref(),
                is_valid_longitude,
            ),
            altitude: read_altitude(fields.altitude.as_ref(), fields.altitude_ref.as_ref()),
        };

        for (name, malformed) in [
            ("GPSLatitude", reading.latitude.is_malformed()),
            ("GPSLongitude", reading.longitude.is_malformed()),
            ("GPSAltitude", reading.altitude.is_malformed()),
        ] {
            if malformed {
                warn!(field = name, "Unreadable GPS field, treating it as absent");
            }
        }

        reading
    }

    /// Whatever latitude/longitude was extracted.
    #[must_use]
    pub fn position(&self) -> GeoPosition {
        GeoPosition::new(self.latitude.present(), self.longitude.present())
    }

    /// Recorded altitude relative to mean sea level, if usable.
    #[must_use]
    pub fn recorded_altitude(&self) -> Option<AltitudeReading> {
        self.altitude.present()
    }
}

/// Extracts position and recorded altitude from raw image bytes.
#[must_use]
pub fn read_gps(bytes: &[u8]) -> GpsReading {
    GpsReading::from_fields(&GeotagFields::from_image_bytes(bytes))
}

// =============================================================================
// Field interpretation
// =============================================================================

fn read_coordinate(
    value: Option<&Value>,
    reference: Option<&Value>,
    in_range: fn(f64) -> bool,
) -> Extracted<f64> {
    let (Some(value), Some(reference)) = (value, reference) else {
        return Extracted::Absent;
    };

    let Some(hemisphere) = text_value(reference).as_deref().and_then(Hemisphere::parse) else {
        return Extracted::Malformed;
    };

    numeric_components(value)
        .and_then(|components| DmsValue::from_components(&components))
        .and_then(|dms| dms_to_decimal(&dms, hemisphere))
        .filter(|degrees| in_range(*degrees))
        .map_or(Extracted::Malformed, Extracted::Present)
}

fn read_altitude(value: Option<&Value>, reference: Option<&Value>) -> Extracted<AltitudeReading> {
    let Some(value) = value else {
        return Extracted::Absent;
    };

    let reference = match reference.and_then(altitude_ref_flag) {
        Some(0) => AltitudeReference::MeanSeaLevel,
        Some(1) => AltitudeReference::BelowMeanSeaLevel,
        _ => AltitudeReference::Unknown,
    };

    numeric_components(value)
        .and_then(|components| components.first().copied())
        .and_then(Numeric::to_f64)
        .map_or(Extracted::Malformed, |magnitude| {
            Extracted::Present(AltitudeReading::new(magnitude, reference))
        })
}

/// `GPSAltitudeRef` is a BYTE, but some writers store it as a one-byte
/// UNDEFINED sequence or as a SHORT.
fn altitude_ref_flag(value: &Value) -> Option<u32> {
    match value {
        Value::Byte(bytes) | Value::Undefined(bytes, _) if bytes.len() == 1 => {
            Some(u32::from(bytes[0]))
        }
        Value::Short(_) | Value::Long(_) => value.get_uint(0),
        _ => None,
    }
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(strings) => strings
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
        Value::Byte(bytes) | Value::Undefined(bytes, _) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
        _ => None,
    }
}

fn numeric_components(value: &Value) -> Option<Vec<Numeric>> {
    let components: Vec<Numeric> = match value {
        Value::Rational(rationals) => rationals
            .iter()
            .map(|r| Numeric::Ratio {
                numerator: i64::from(r.num),
                denominator: i64::from(r.denom),
            })
            .collect(),
        Value::SRational(rationals) => rationals
            .iter()
            .map(|r| Numeric::Ratio {
                numerator: i64::from(r.num),
                denominator: i64::from(r.denom),
            })
            .collect(),
        Value::Byte(values) => values.iter().map(|&v| Numeric::Integer(v.into())).collect(),
        Value::Short(values) => values.iter().map(|&v| Numeric::Integer(v.into())).collect(),
        Value::Long(values) => values.iter().map(|&v| Numeric::Integer(v.into())).collect(),
        Value::SByte(values) => values.iter().map(|&v| Numeric::Integer(v.into())).collect(),
        Value::SShort(values) => values.iter().map(|&v| Numeric::Integer(v.into())).collect(),
        Value::SLong(values) => values.iter().map(|&v| Numeric::Integer(v.into())).collect(),
        Value::Float(values) => values.iter().map(|&v| Numeric::Real(v.into())).collect(),
        Value::Double(values) => values.iter().map(|&v| Numeric::Real(v)).collect(),
        _ => return None,
    };
    (!components.is_empty()).then_some(components)
}
