//! Four-point vertical vorticity estimate.
//!
//! The stencil samples the horizontal wind at four perimeter points around a
//! centre: north and south at ±Δy, east and west at ±Δx. Central differences
//! over those arms give the two cross-derivatives of the horizontal curl.

use crate::core_types::units::{Kilometers, Meters, RatePerSecond};
use crate::core_types::vec3::Vec2;
use crate::core_types::CardinalObservations;
use crate::error::{ConfigError, ConfigResult};
use crate::wind::conversion::WindVector;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Distance between the centre point and the perimeter samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridSpacing {
    dx: Meters,
    dy: Meters,
}

impl GridSpacing {
    /// Create a spacing from east–west (`dx`) and north–south (`dy`) distances.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGridSpacing`] when either distance is zero,
    /// negative or not finite.
    pub fn new(dx: Meters, dy: Meters) -> ConfigResult<Self> {
        Ok(Self {
            dx: Self::check("dx", dx)?,
            dy: Self::check("dy", dy)?,
        })
    }

    /// Create a spacing from kilometer distances.
    ///
    /// # Errors
    ///
    /// See [`GridSpacing::new`].
    pub fn from_kilometers(dx: Kilometers, dy: Kilometers) -> ConfigResult<Self> {
        Self::new(dx.to_meters(), dy.to_meters())
    }

    fn check(axis: &'static str, value: Meters) -> ConfigResult<Meters> {
        if value.is_finite() && *value > 0.0 {
            Ok(value)
        } else {
            Err(ConfigError::InvalidGridSpacing {
                axis,
                value: *value,
            })
        }
    }

    pub fn dx(&self) -> Meters {
        self.dx
    }

    pub fn dy(&self) -> Meters {
        self.dy
    }
}

/// Vorticity estimate plus the mean horizontal wind over the four samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VorticityResult {
    /// ω_z = dv/dx − du/dy (s⁻¹)
    pub omega_z: RatePerSecond,
    /// (v_E − v_W) / 2Δx
    pub dv_dx: RatePerSecond,
    /// (u_N − u_S) / 2Δy
    pub du_dy: RatePerSecond,
    /// Arithmetic mean of the four (u, v) samples in m/s
    pub mean_wind: Vec2,
}

impl VorticityResult {
    /// Magnitude of the mean horizontal wind (m/s)
    pub fn mean_speed(&self) -> f64 {
        self.mean_wind.norm()
    }
}

/// Estimate vertical vorticity from four perimeter wind vectors.
///
/// Vertical components are ignored; only u and v enter the stencil and the
/// mean.
///
/// # Example
///
/// ```
/// use windvort_core::core_types::units::Meters;
/// use windvort_core::wind::{estimate, GridSpacing, WindVector};
///
/// let spacing = GridSpacing::new(Meters::new(1000.0), Meters::new(1000.0)).unwrap();
/// // v increases eastward: counterclockwise rotation
/// let result = estimate(
///     &WindVector::new(0.0, 0.0, 0.0),
///     &WindVector::new(0.0, 0.0, 0.0),
///     &WindVector::new(0.0, 5.0, 0.0),
///     &WindVector::new(0.0, -5.0, 0.0),
///     &spacing,
/// );
/// assert!((*result.omega_z - 0.005).abs() < 1e-12);
/// ```
pub fn estimate(
    north: &WindVector,
    south: &WindVector,
    east: &WindVector,
    west: &WindVector,
    spacing: &GridSpacing,
) -> VorticityResult {
    let du_dy = (north.x - south.x) / (2.0 * *spacing.dy);
    let dv_dx = (east.y - west.y) / (2.0 * *spacing.dx);
    let omega_z = dv_dx - du_dy;

    let mean_wind = Vec2::new(
        (north.x + south.x + east.x + west.x) / 4.0,
        (north.y + south.y + east.y + west.y) / 4.0,
    );

    VorticityResult {
        omega_z: RatePerSecond::new(omega_z),
        dv_dx: RatePerSecond::new(dv_dx),
        du_dy: RatePerSecond::new(du_dy),
        mean_wind,
    }
}

impl CardinalObservations {
    /// Convert all four observations and estimate vorticity.
    ///
    /// # Errors
    ///
    /// Propagates the first conversion error (north, south, east, west order).
    pub fn estimate(&self, spacing: &GridSpacing) -> ConfigResult<VorticityResult> {
        let north = self.north.to_vector()?;
        let south = self.south.to_vector()?;
        let east = self.east.to_vector()?;
        let west = self.west.to_vector()?;

        let result = estimate(&north, &south, &east, &west, spacing);
        debug!(
            omega_z = *result.omega_z,
            u_mean = result.mean_wind.x,
            v_mean = result.mean_wind.y,
            "Estimated vorticity from cardinal observations"
        );
        Ok(result)
    }
}
