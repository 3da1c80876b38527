// SPDX-License-Identifier: MPL-2.0
//! Single-slot store for the most recently extracted image position.
//!
//! Callers that never see an [`AglResult`](crate::domain::altitude::AglResult),
//! or that want the position of an image whose AGL could not be resolved, read
//! it from here. Writers are last-writer-wins.

use crate::domain::geo::{Coordinate, GeoPosition};
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

static SHARED: LazyLock<Arc<LocationCache>> = LazyLock::new(|| Arc::new(LocationCache::new()));

/// Thread-safe holder of the last extracted [`GeoPosition`].
///
/// # Example
///
/// ```
/// use image_agl::application::LocationCache;
/// use image_agl::domain::geo::GeoPosition;
///
/// let cache = LocationCache::new();
/// assert!(cache.last_position().is_none());
///
/// cache.record(GeoPosition::new(Some(46.5), Some(7.25)));
/// assert_eq!(cache.last_coordinate().unwrap().latitude(), 46.5);
/// ```
#[derive(Debug, Default)]
pub struct LocationCache {
    slot: Mutex<Option<GeoPosition>>,
}

impl LocationCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide cache used by resolvers that were not given
    /// their own.
    #[must_use]
    pub fn shared() -> Arc<LocationCache> {
        Arc::clone(&SHARED)
    }

    /// Stores `position` if it carries at least a latitude or a longitude.
    ///
    /// An empty position leaves the previous value in place. Returns whether
    /// the slot was overwritten.
    pub fn record(&self, position: GeoPosition) -> bool {
        if position.is_empty() {
            return false;
        }
        // The slot holds plain `Copy` data, so a poisoned lock is still usable.
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(position);
        true
    }

    /// Returns the last recorded position, which may be partial.
    #[must_use]
    pub fn last_position(&self) -> Option<GeoPosition> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the last recorded position if it is complete.
    #[must_use]
    pub fn last_coordinate(&self) -> Option<Coordinate> {
        self.last_position()
            .and_then(|position| position.coordinate())
    }
}
