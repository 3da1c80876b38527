// SPDX-License-Identifier: MPL-2.0
//! Altitude domain types.

use crate::domain::geo::{Coordinate, GeoPosition};
use std::fmt;

// =============================================================================
// Extracted
// =============================================================================

/// Outcome of extracting one metadata field.
///
/// Extraction never fails as a whole. Each field reports on its own whether it
/// was missing from the file or present but unusable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Extracted<T> {
    Present(T),
    #[default]
    Absent,
    /// The field exists but could not be interpreted.
    Malformed,
}

impl<T> Extracted<T> {
    /// Returns the value if present.
    #[must_use]
    pub fn present(self) -> Option<T> {
        match self {
            Extracted::Present(value) => Some(value),
            Extracted::Absent | Extracted::Malformed => None,
        }
    }

    /// Returns a reference to the value if present.
    #[must_use]
    pub fn as_present(&self) -> Option<&T> {
        match self {
            Extracted::Present(value) => Some(value),
            Extracted::Absent | Extracted::Malformed => None,
        }
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Extracted::Present(_))
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Extracted::Malformed)
    }

    /// Maps a present value, leaving `Absent`/`Malformed` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extracted<U> {
        match self {
            Extracted::Present(value) => Extracted::Present(f(value)),
            Extracted::Absent => Extracted::Absent,
            Extracted::Malformed => Extracted::Malformed,
        }
    }

    /// Chains a fallible interpretation: `None` from `f` turns into `Malformed`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Extracted<U> {
        match self {
            Extracted::Present(value) => f(value).map_or(Extracted::Malformed, Extracted::Present),
            Extracted::Absent => Extracted::Absent,
            Extracted::Malformed => Extracted::Malformed,
        }
    }
}

// =============================================================================
// AltitudeReading
// =============================================================================

/// Vertical datum of a recorded GPS altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeReference {
    /// Above mean sea level (EXIF `GPSAltitudeRef` = 0).
    MeanSeaLevel,
    /// Below mean sea level (EXIF `GPSAltitudeRef` = 1).
    BelowMeanSeaLevel,
    /// No reference recorded; the value is treated as above sea level.
    Unknown,
}

/// Altitude recorded by the capture device's GPS receiver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeReading {
    /// Signed metres relative to mean sea level. Already negated when the
    /// reference says below sea level.
    pub value_m: f64,
    pub reference: AltitudeReference,
}

impl AltitudeReading {
    /// Builds a reading from an unsigned magnitude and its datum flag.
    #[must_use]
    pub fn new(magnitude_m: f64, reference: AltitudeReference) -> Self {
        let value_m = match reference {
            AltitudeReference::BelowMeanSeaLevel => -magnitude_m,
            AltitudeReference::MeanSeaLevel | AltitudeReference::Unknown => magnitude_m,
        };
        Self { value_m, reference }
    }
}

// =============================================================================
// RelativeAltitude
// =============================================================================

/// Altitude above the take-off point as reported directly by the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeAltitude {
    pub value_m: f64,
}

// =============================================================================
// AglResult
// =============================================================================

/// Which branch produced an [`AglResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AglSource {
    /// Device-reported relative altitude from the embedded XMP packet.
    DirectRelative,
    /// Recorded GPS altitude minus modelled terrain elevation.
    RecordedMinusModeled,
}

impl AglSource {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            AglSource::DirectRelative => "XMP RelativeAltitude",
            AglSource::RecordedMinusModeled => "GPS altitude minus terrain elevation",
        }
    }
}

impl fmt::Display for AglSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Above-ground-level altitude of one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AglResult {
    agl_m: f64,
    position: GeoPosition,
    source: AglSource,
}

impl AglResult {
    #[must_use]
    pub fn new(agl_m: f64, position: GeoPosition, source: AglSource) -> Self {
        Self {
            agl_m,
            position,
            source,
        }
    }

    /// Altitude above ground in metres.
    #[must_use]
    pub fn agl_m(&self) -> f64 {
        self.agl_m
    }

    /// Position extracted from the image; may be partial on the direct branch.
    #[must_use]
    pub fn position(&self) -> GeoPosition {
        self.position
    }

    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.position.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.position.longitude
    }

    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.position.coordinate()
    }

    #[must_use]
    pub fn source(&self) -> AglSource {
        self.source
    }
}
