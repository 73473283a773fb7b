//! Meteorological observation → Cartesian wind vector.

use crate::core_types::units::{Degrees, KilometersPerHour};
use crate::core_types::vec3::Vec3;
use crate::core_types::WindObservation;
use crate::error::{ConfigError, ConfigResult};

/// Cartesian wind (u east, v north, w up) in m/s
pub type WindVector = Vec3;

/// Convert one observation into a wind vector.
///
/// The azimuth is the direction the wind blows *from*, so it is turned 180°
/// to get the direction of travel and then wrapped into [0, 360):
///
/// ```text
/// V = speed × 1000/3600
/// θ = rad((azimuth + 180) mod 360)      φ = rad(elevation)
/// u = V cosφ cosθ    v = V cosφ sinθ    w = V sinφ
/// ```
///
/// # Errors
///
/// - [`ConfigError::NegativeSpeed`] for a speed below zero
/// - [`ConfigError::NonFinite`] for NaN or infinite speed or angles
///
/// # Example
///
/// ```
/// use windvort_core::core_types::units::{Degrees, KilometersPerHour};
/// use windvort_core::wind::convert;
///
/// // 36 km/h from the south (270° counterclockwise from east) blows northward
/// let wind = convert(KilometersPerHour::new(36.0), Degrees::new(270.0), Degrees::new(0.0)).unwrap();
/// assert!(wind.x.abs() < 1e-9);
/// assert!((wind.y - 10.0).abs() < 1e-9);
/// ```
pub fn convert(
    speed: KilometersPerHour,
    azimuth: Degrees,
    elevation: Degrees,
) -> ConfigResult<WindVector> {
    let speed_kmh = ConfigError::ensure_finite("speed", *speed)?;
    if speed_kmh < 0.0 {
        return Err(ConfigError::NegativeSpeed { value: speed_kmh });
    }
    ConfigError::ensure_finite("azimuth", *azimuth)?;
    ConfigError::ensure_finite("elevation", *elevation)?;

    let magnitude = *speed.to_mps();
    let theta = (azimuth + Degrees::new(180.0)).normalized().to_radians();
    let phi = elevation.to_radians();

    let horizontal = magnitude * phi.cos();
    Ok(WindVector::new(
        horizontal * theta.cos(),
        horizontal * theta.sin(),
        magnitude * phi.sin(),
    ))
}

impl WindObservation {
    /// Convert this observation into a wind vector.
    ///
    /// # Errors
    ///
    /// See [`convert`].
    pub fn to_vector(&self) -> ConfigResult<WindVector> {
        convert(self.speed, self.azimuth, self.elevation)
    }
}
