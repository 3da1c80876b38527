// SPDX-License-Identifier: MPL-2.0
//! Degrees/minutes/seconds to signed decimal degrees.
//!
//! Metadata writers disagree on how they store the three components: EXIF uses
//! unsigned rationals, some tools write integers, and a few collapse the whole
//! triple into one pre-converted decimal. [`Numeric`] covers the component
//! encodings and [`DmsValue`] the two layouts; [`dms_to_decimal`] folds either
//! into a signed value.

use super::types::Hemisphere;

// =============================================================================
// Numeric
// =============================================================================

/// A single number as found in a metadata container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    /// A numerator/denominator pair. A zero denominator is read as 1.
    Ratio { numerator: i64, denominator: i64 },
    Real(f64),
}

impl Numeric {
    /// Coerces to `f64`, or `None` when the result is not a finite number.
    #[must_use]
    pub fn to_f64(self) -> Option<f64> {
        let value = match self {
            Numeric::Integer(value) => value as f64,
            Numeric::Ratio {
                numerator,
                denominator,
            } => {
                let denominator = if denominator == 0 { 1 } else { denominator };
                numerator as f64 / denominator as f64
            }
            Numeric::Real(value) => value,
        };
        value.is_finite().then_some(value)
    }
}

// =============================================================================
// DmsValue
// =============================================================================

/// Layout of a stored latitude or longitude magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DmsValue {
    /// Degrees, minutes, seconds.
    Sexagesimal([Numeric; 3]),
    /// Already converted to decimal degrees; only the hemisphere sign applies.
    Decimal(Numeric),
}

impl DmsValue {
    /// Builds a value from a component list.
    ///
    /// Three components are read as degrees/minutes/seconds and a single
    /// component as collapsed decimal degrees. Any other length is rejected
    /// rather than guessed at.
    #[must_use]
    pub fn from_components(components: &[Numeric]) -> Option<Self> {
        match *components {
            [degrees, minutes, seconds] => Some(DmsValue::Sexagesimal([degrees, minutes, seconds])),
            [decimal] => Some(DmsValue::Decimal(decimal)),
            _ => None,
        }
    }

    /// Unsigned decimal degrees.
    #[must_use]
    pub fn magnitude(&self) -> Option<f64> {
        match self {
            DmsValue::Sexagesimal([degrees, minutes, seconds]) => {
                let degrees = degrees.to_f64()?;
                let minutes = minutes.to_f64()?;
                let seconds = seconds.to_f64()?;
                Some(degrees + minutes / 60.0 + seconds / 3600.0)
            }
            DmsValue::Decimal(decimal) => decimal.to_f64(),
        }
    }
}

/// Converts a stored magnitude plus hemisphere reference to signed decimal
/// degrees. Returns `None` if any component is unparseable.
///
/// # Example
///
/// ```
/// use image_agl::domain::geo::{dms_to_decimal, DmsValue, Hemisphere, Numeric};
///
/// let dms = DmsValue::Sexagesimal([
///     Numeric::Integer(34),
///     Numeric::Integer(15),
///     Numeric::Integer(30),
/// ]);
/// let south = dms_to_decimal(&dms, Hemisphere::South).unwrap();
/// assert!((south + 34.258_333).abs() < 1e-4);
/// ```
#[must_use]
pub fn dms_to_decimal(value: &DmsValue, reference: Hemisphere) -> Option<f64> {
    value.magnitude().map(|magnitude| reference.apply(magnitude))
}
