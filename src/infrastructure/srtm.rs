// SPDX-License-Identifier: MPL-2.0
//! Ground elevation from local SRTM `.hgt` tiles.
//!
//! A tile covers one degree of latitude and longitude and is named after its
//! south-west corner, e.g. `N34W119.hgt`. Decoding, SRTM1/SRTM3 detection and
//! interpolation are delegated to [`htg::SrtmService`], which keeps a few
//! recently used tiles in memory. Tiles are never downloaded.

use crate::application::port::ElevationProvider;
use crate::config::defaults::{SRTM_EXTENSION, SRTM_VOID};
use crate::domain::geo::Coordinate;
use htg::SrtmService;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// [`ElevationProvider`] backed by a directory of SRTM tiles.
pub struct SrtmTiles {
    dir: PathBuf,
    interpolate: bool,
    service: SrtmService,
}

impl fmt::Debug for SrtmTiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SrtmTiles")
            .field("dir", &self.dir)
            .field("interpolate", &self.interpolate)
            .finish_non_exhaustive()
    }
}

impl SrtmTiles {
    /// Creates a provider reading tiles from `dir`, using nearest-sample lookup.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        let dir = dir.into();
        // Decoded tiles kept in memory; a flight rarely spans more than a few.
        let service = SrtmService::new(&dir, 4);
        Self {
            dir,
            interpolate: false,
            service,
        }
    }

    /// Enables bilinear interpolation between the four surrounding samples.
    #[must_use]
    pub fn with_interpolation(mut self, interpolate: bool) -> Self {
        self.interpolate = interpolate;
        self
    }

    /// Returns the tile directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the name of the tile containing `coordinate`, without extension.
    ///
    /// # Example
    ///
    /// ```
    /// use image_agl::domain::geo::Coordinate;
    /// use image_agl::infrastructure::SrtmTiles;
    ///
    /// let la = Coordinate::new(34.05, -118.25).unwrap();
    /// assert_eq!(SrtmTiles::tile_name(la), "N34W119");
    /// ```
    #[must_use]
    pub fn tile_name(coordinate: Coordinate) -> String {
        let lat = coordinate.latitude().floor() as i32;
        let lon = coordinate.longitude().floor() as i32;
        format!(
            "{}{:02}{}{:03}",
            if lat < 0 { 'S' } else { 'N' },
            lat.unsigned_abs(),
            if lon < 0 { 'W' } else { 'E' },
            lon.unsigned_abs()
        )
    }

    /// Returns the path of the tile containing `coordinate`.
    #[must_use]
    pub fn tile_path(&self, coordinate: Coordinate) -> PathBuf {
        self.dir
            .join(Self::tile_name(coordinate))
            .with_extension(SRTM_EXTENSION)
    }
}

impl ElevationProvider for SrtmTiles {
    fn ground_elevation(&self, coordinate: Coordinate) -> Option<f64> {
        let tile = Self::tile_name(coordinate);
        if !self.tile_path(coordinate).is_file() {
            debug!(%tile, dir = %self.dir.display(), "SRTM tile not present");
            return None;
        }

        let (lat, lon) = (coordinate.latitude(), coordinate.longitude());
        let lookup = if self.interpolate {
            self.service.get_elevation_interpolated(lat, lon)
        } else {
            self.service
                .get_elevation(lat, lon)
                .map(|sample| Some(f64::from(sample)).filter(|&m| m != f64::from(SRTM_VOID)))
        };

        match lookup {
            Ok(Some(elevation)) => {
                debug!(%tile, "Ground elevation at {coordinate}: {elevation:.2} m");
                Some(elevation)
            }
            Ok(None) => {
                debug!(%tile, "No elevation data at {coordinate}");
                None
            }
            Err(err) => {
                warn!(%tile, "Failed to read SRTM tile: {err}");
                None
            }
        }
    }
}
