// SPDX-License-Identifier: MPL-2.0
//! Geographic domain types.
//!
//! Pure domain types with no external dependencies.

use std::fmt;

// =============================================================================
// Coordinate
// =============================================================================

/// A complete WGS84 position in decimal degrees.
///
/// Both components are always present; a position with only one known
/// component is a [`GeoPosition`] and never converts into a `Coordinate`.
///
/// # Example
///
/// ```
/// use image_agl::domain::geo::Coordinate;
///
/// let coords = Coordinate::new(48.8566, 2.3522).unwrap();
/// assert_eq!(coords.format(), "48.856600° N, 2.352200° E");
/// assert!(Coordinate::new(91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees (-90.0 to 90.0)
    latitude: f64,
    /// Longitude in decimal degrees (-180.0 to 180.0)
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if is_valid_latitude(latitude) && is_valid_longitude(longitude) {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether this is the null island (0,0) which often indicates
    /// a receiver without a fix.
    #[must_use]
    pub fn is_null_island(&self) -> bool {
        self.latitude.abs() < f64::EPSILON && self.longitude.abs() < f64::EPSILON
    }

    /// Formats the coordinates as a human-readable string.
    ///
    /// Format: "48.856600° N, 2.352200° E"
    #[must_use]
    pub fn format(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Returns whether `value` is a usable latitude.
#[must_use]
pub fn is_valid_latitude(value: f64) -> bool {
    value.is_finite() && (-90.0..=90.0).contains(&value)
}

/// Returns whether `value` is a usable longitude.
#[must_use]
pub fn is_valid_longitude(value: f64) -> bool {
    value.is_finite() && (-180.0..=180.0).contains(&value)
}

// =============================================================================
// GeoPosition
// =============================================================================

/// Whatever latitude/longitude could be extracted from an image.
///
/// Either component may be missing. Use [`GeoPosition::coordinate`] to get a
/// complete [`Coordinate`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoPosition {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl GeoPosition {
    #[must_use]
    pub fn new(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if neither component is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none()
    }

    /// Returns the complete coordinate, or `None` when either half is missing.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.latitude?, self.longitude?)
    }
}

impl From<Coordinate> for GeoPosition {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(Some(coordinate.latitude()), Some(coordinate.longitude()))
    }
}

// =============================================================================
// Hemisphere
// =============================================================================

/// Hemisphere reference attached to a latitude or longitude magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses an EXIF-style reference (`N`, `S`, `E`, `W`).
    ///
    /// Surrounding whitespace and NUL padding are ignored; matching is
    /// case-insensitive. Anything else is rejected.
    #[must_use]
    pub fn parse(reference: &str) -> Option<Self> {
        let trimmed = reference.trim_matches(|c: char| c.is_whitespace() || c == '\0');
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match first.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Returns `true` for the hemispheres whose decimal degrees are negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }

    /// Applies this hemisphere's sign to an unsigned magnitude.
    #[must_use]
    pub fn apply(self, magnitude: f64) -> f64 {
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
