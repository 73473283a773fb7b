//! Geographic extent of the particle animation.
//!
//! Coordinates are plain longitude/latitude degrees handed through to the
//! renderer; no projection happens here.

use crate::core_types::vec3::Vec2;
use crate::error::{ConfigError, ConfigResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Longitude/latitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    /// Create a point
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<GeoPoint> for Vec2 {
    fn from(p: GeoPoint) -> Vec2 {
        Vec2::new(p.lon, p.lat)
    }
}

/// Axis-aligned bounding box in map coordinates
///
/// Only constructible through [`Domain::new`] / [`Domain::around`], so every
/// instance has `min < max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    lon_min: f64,
    lon_max: f64,
    lat_min: f64,
    lat_max: f64,
}

impl Domain {
    /// Create a domain, rejecting empty, inverted or non-finite ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDomain`] when `min >= max` on either axis,
    /// any bound is not finite, or the width overflows to infinity.
    pub fn new(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> ConfigResult<Self> {
        Self::check_axis("longitude", lon_min, lon_max)?;
        Self::check_axis("latitude", lat_min, lat_max)?;
        Ok(Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        })
    }

    /// Square box of `half_extent` degrees on each side of `center`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDomain`] when `half_extent` is not
    /// positive or the centre is not finite.
    pub fn around(center: GeoPoint, half_extent: f64) -> ConfigResult<Self> {
        Self::new(
            center.lon - half_extent,
            center.lon + half_extent,
            center.lat - half_extent,
            center.lat + half_extent,
        )
    }

    fn check_axis(axis: &'static str, min: f64, max: f64) -> ConfigResult<()> {
        if min.is_finite() && max.is_finite() && min < max && (max - min).is_finite() {
            Ok(())
        } else {
            Err(ConfigError::InvalidDomain { axis, min, max })
        }
    }

    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }

    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    /// `[lon_min, lon_max, lat_min, lat_max]`, the order map extents are set in
    pub fn extent(&self) -> [f64; 4] {
        [self.lon_min, self.lon_max, self.lat_min, self.lat_max]
    }

    /// Centre of the box
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            0.5 * (self.lon_min + self.lon_max),
            0.5 * (self.lat_min + self.lat_max),
        )
    }

    /// Closed-interval containment on both axes
    #[inline]
    pub fn contains(&self, position: &Vec2) -> bool {
        (self.lon_min..=self.lon_max).contains(&position.x)
            && (self.lat_min..=self.lat_max).contains(&position.y)
    }

    /// Uniformly random position inside the box
    #[inline]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.random_range(self.lon_min..self.lon_max),
            rng.random_range(self.lat_min..self.lat_max),
        )
    }
}
