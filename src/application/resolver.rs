// SPDX-License-Identifier: MPL-2.0
//! Above-ground-level altitude resolution.
//!
//! [`AglResolver`] combines the two metadata readers with an
//! [`ElevationProvider`]:
//!
//! ```text
//! Start ──(XMP RelativeAltitude present)──────────────────▶ HaveDirectAltitude
//!   │
//!   └──▶ NeedFallback ──(coordinate + GPS altitude + ground)──▶ HaveFallbackAltitude
//!              │
//!              └──(anything missing)──▶ Failed(AglError)
//! ```
//!
//! Extraction is tolerant (bad fields become absent) while resolution is
//! strict (a missing input on the fallback branch is a typed error).

use crate::application::location_cache::LocationCache;
use crate::application::port::ElevationProvider;
use crate::domain::altitude::{AglResult, AglSource};
use crate::error::Result;
use crate::media::{read_gps, read_packet_altitudes, GpsReading, PacketAltitudes};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

// =============================================================================
// AglError
// =============================================================================

/// Terminal failures of the fallback branch.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AglError {
    /// No usable latitude/longitude pair in the image.
    #[error("no GPS latitude/longitude found; cannot look up ground elevation")]
    MissingCoordinate,

    /// No recorded GPS altitude to subtract the ground elevation from.
    #[error("no GPS altitude (MSL) found; cannot compute AGL")]
    MissingRecordedAltitude,

    /// The elevation model has no data for the image position.
    #[error("ground elevation unavailable at {latitude:.6}, {longitude:.6}")]
    ElevationUnavailable { latitude: f64, longitude: f64 },
}

// =============================================================================
// AglResolver
// =============================================================================

/// Resolves the AGL altitude of single images.
///
/// Each call records the extracted position in a [`LocationCache`], even when
/// resolution then fails. By default that is the process-wide
/// [`LocationCache::shared`] instance; use [`AglResolver::with_cache`] to keep
/// the state explicit.
///
/// # Example
///
/// ```
/// use image_agl::application::{AglError, AglResolver, LocationCache};
/// use image_agl::application::port::FixedElevation;
/// use std::sync::Arc;
///
/// let resolver = AglResolver::new(FixedElevation::new(420.5))
///     .with_cache(Arc::new(LocationCache::new()));
///
/// // No geotag and no XMP packet: the fallback branch has nothing to work with.
/// let err = resolver.resolve_bytes(b"not an image").unwrap_err();
/// assert_eq!(err, AglError::MissingCoordinate);
/// ```
#[derive(Debug)]
pub struct AglResolver<E> {
    elevation: E,
    cache: Arc<LocationCache>,
}

impl<E: ElevationProvider> AglResolver<E> {
    /// Creates a resolver that records positions in the shared cache.
    #[must_use]
    pub fn new(elevation: E) -> Self {
        Self {
            elevation,
            cache: LocationCache::shared(),
        }
    }

    /// Uses `cache` instead of the process-wide cache.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<LocationCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Returns the cache this resolver records positions in.
    #[must_use]
    pub fn cache(&self) -> &Arc<LocationCache> {
        &self.cache
    }

    /// Returns the elevation provider.
    #[must_use]
    pub fn elevation(&self) -> &E {
        &self.elevation
    }

    /// Reads an image file and resolves its AGL altitude.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be
    /// read, or [`Error::Agl`](crate::error::Error::Agl) if resolution fails.
    pub fn resolve_file<P: AsRef<Path>>(&self, path: P) -> Result<AglResult> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Resolving AGL");
        let bytes = fs::read(path)?;
        Ok(self.resolve_bytes(&bytes)?)
    }

    /// Resolves the AGL altitude of an image held in memory.
    ///
    /// # Errors
    ///
    /// Returns an [`AglError`] when neither branch can produce a value.
    pub fn resolve_bytes(&self, bytes: &[u8]) -> std::result::Result<AglResult, AglError> {
        let packet = read_packet_altitudes(bytes);
        let gps = read_gps(bytes);
        self.resolve(&packet, &gps)
    }

    /// Applies the resolution policy to already extracted metadata.
    ///
    /// # Errors
    ///
    /// Returns an [`AglError`] when neither branch can produce a value.
    pub fn resolve(
        &self,
        packet: &PacketAltitudes,
        gps: &GpsReading,
    ) -> std::result::Result<AglResult, AglError> {
        debug!(
            status = ?packet.status,
            relative_alt_m = ?packet.relative_alt_m,
            absolute_alt_m = ?packet.absolute_alt_m,
            "XMP fields"
        );
        debug!(
            latitude = ?gps.latitude,
            longitude = ?gps.longitude,
            altitude = ?gps.altitude,
            "EXIF GPS"
        );

        let position = gps.position();
        self.cache.record(position);

        if let Some(relative) = packet.relative_altitude() {
            debug!("[AGL] Using XMP RelativeAltitude: {:.2} m", relative.value_m);
            return Ok(AglResult::new(
                relative.value_m,
                position,
                AglSource::DirectRelative,
            ));
        }

        let coordinate = position.coordinate().ok_or(AglError::MissingCoordinate)?;
        let recorded = gps
            .recorded_altitude()
            .ok_or(AglError::MissingRecordedAltitude)?;
        let ground_m = self.elevation.ground_elevation(coordinate).ok_or(
            AglError::ElevationUnavailable {
                latitude: coordinate.latitude(),
                longitude: coordinate.longitude(),
            },
        )?;

        let agl_m = recorded.value_m - ground_m;
        debug!(
            "[AGL] Using GPS altitude (MSL) - ground (MSL) = {:.2} - {:.2} = {:.2} m",
            recorded.value_m, ground_m, agl_m
        );
        Ok(AglResult::new(
            agl_m,
            position,
            AglSource::RecordedMinusModeled,
        ))
    }
}
