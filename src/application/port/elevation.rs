// SPDX-License-Identifier: MPL-2.0
//! Terrain elevation port definition.
//!
//! An [`ElevationProvider`] answers "how high is the ground here?" for the
//! fallback branch of AGL resolution. Infrastructure adapters implement it on
//! top of a terrain model (see [`crate::infrastructure::srtm`]).
//!
//! The query is a single blocking call with an explicit "unavailable" outcome:
//! implementations log their own I/O problems and return `None` instead of
//! propagating them.

use crate::domain::geo::Coordinate;

// =============================================================================
// ElevationProvider Trait
// =============================================================================

/// Port for looking up modelled ground elevation.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a resolver can be shared.
///
/// # Example
///
/// ```
/// use image_agl::application::port::{ElevationProvider, FixedElevation};
/// use image_agl::domain::geo::Coordinate;
///
/// let provider = FixedElevation::new(420.5);
/// let here = Coordinate::new(46.0, 7.0).unwrap();
/// assert_eq!(provider.ground_elevation(here), Some(420.5));
/// ```
pub trait ElevationProvider: Send + Sync {
    /// Returns the ground elevation above mean sea level in metres, or `None`
    /// when the model has no data for `coordinate`.
    fn ground_elevation(&self, coordinate: Coordinate) -> Option<f64>;
}

impl<T: ElevationProvider + ?Sized> ElevationProvider for &T {
    fn ground_elevation(&self, coordinate: Coordinate) -> Option<f64> {
        (**self).ground_elevation(coordinate)
    }
}

impl<T: ElevationProvider + ?Sized> ElevationProvider for Box<T> {
    fn ground_elevation(&self, coordinate: Coordinate) -> Option<f64> {
        (**self).ground_elevation(coordinate)
    }
}

// =============================================================================
// Trivial providers
// =============================================================================

/// Provider without any terrain data. Every lookup is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoElevationModel;

impl ElevationProvider for NoElevationModel {
    fn ground_elevation(&self, _coordinate: Coordinate) -> Option<f64> {
        None
    }
}

/// Provider that answers every lookup with the same user-supplied elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedElevation {
    elevation_m: f64,
}

impl FixedElevation {
    #[must_use]
    pub fn new(elevation_m: f64) -> Self {
        Self { elevation_m }
    }
}

impl ElevationProvider for FixedElevation {
    fn ground_elevation(&self, _coordinate: Coordinate) -> Option<f64> {
        self.elevation_m.is_finite().then_some(self.elevation_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn somewhere() -> Coordinate {
        Coordinate::new(34.0, -118.0).unwrap()
    }

    #[test]
    fn no_model_is_always_unavailable() {
        assert_eq!(NoElevationModel.ground_elevation(somewhere()), None);
    }

    #[test]
    fn fixed_elevation_ignores_position() {
        let provider = FixedElevation::new(12.0);
        assert_eq!(provider.ground_elevation(somewhere()), Some(12.0));
        assert_eq!(
            provider.ground_elevation(Coordinate::new(-1.0, 1.0).unwrap()),
            Some(12.0)
        );
    }

    #[test]
    fn fixed_nan_elevation_is_unavailable() {
        assert_eq!(FixedElevation::new(f64::NAN).ground_elevation(somewhere()), None);
    }

    #[test]
    fn boxed_and_borrowed_providers_delegate() {
        let boxed: Box<dyn ElevationProvider> = Box::new(FixedElevation::new(3.0));
        assert_eq!(boxed.ground_elevation(somewhere()), Some(3.0));
        assert_eq!((&boxed).ground_elevation(somewhere()), Some(3.0));
    }

    // Test that the trait is object-safe
    fn _assert_provider_object_safe(_: &dyn ElevationProvider) {}
}
