//! Directional wind observations.
//!
//! An observation is what a station (or a person at a prompt) reports: speed in
//! km/h, the azimuth the wind blows *from* measured counterclockwise from east,
//! and an elevation angle that is positive for an upward component.

use crate::core_types::units::{Degrees, KilometersPerHour};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One meteorological wind observation
///
/// # Example
///
/// ```
/// use windvort_core::WindObservation;
///
/// let obs: WindObservation = "18,180,0".parse().unwrap();
/// assert_eq!(*obs.speed, 18.0);
/// assert_eq!(*obs.azimuth, 180.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindObservation {
    /// Wind speed (km/h, non-negative)
    pub speed: KilometersPerHour,
    /// Direction the wind blows from, counterclockwise from east
    pub azimuth: Degrees,
    /// Dip angle, positive = upward
    #[serde(default)]
    pub elevation: Degrees,
}

impl WindObservation {
    /// Create an observation from raw km/h and degree values.
    ///
    /// No validation happens here; conversion rejects bad values.
    pub fn new(speed_kmh: f64, azimuth_deg: f64, elevation_deg: f64) -> Self {
        Self {
            speed: KilometersPerHour::new(speed_kmh),
            azimuth: Degrees::new(azimuth_deg),
            elevation: Degrees::new(elevation_deg),
        }
    }

    /// Horizontal observation (zero elevation)
    pub fn horizontal(speed_kmh: f64, azimuth_deg: f64) -> Self {
        Self::new(speed_kmh, azimuth_deg, 0.0)
    }
}

impl fmt::Display for WindObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} (elevation {})",
            self.speed, self.azimuth, self.elevation
        )
    }
}

impl FromStr for WindObservation {
    type Err = ConfigError;

    /// Parse `speed,azimuth[,elevation]`; a missing elevation means horizontal.
    fn from_str(s: &str) -> ConfigResult<Self> {
        let invalid = |reason: &str| ConfigError::InvalidObservation {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(invalid("expected speed,azimuth[,elevation]"));
        }

        let mut values = [0.0_f64; 3];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field
                .parse::<f64>()
                .map_err(|e| invalid(&format!("'{field}': {e}")))?;
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }
}

/// Observations sampled at the four perimeter points of the stencil
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardinalObservations {
    pub north: WindObservation,
    pub south: WindObservation,
    pub east: WindObservation,
    pub west: WindObservation,
}

impl CardinalObservations {
    /// Group four observations
    pub fn new(
        north: WindObservation,
        south: WindObservation,
        east: WindObservation,
        west: WindObservation,
    ) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_fields() {
        let obs: WindObservation = " 36 , -45 , 10 ".parse().unwrap();
        assert_eq!(*obs.speed, 36.0);
        assert_eq!(*obs.azimuth, -45.0);
        assert_eq!(*obs.elevation, 10.0);
    }

    #[test]
    fn test_parse_without_elevation_is_horizontal() {
        let obs: WindObservation = "12,90".parse().unwrap();
        assert_eq!(obs, WindObservation::horizontal(12.0, 90.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "fast,90".parse::<WindObservation>(),
            Err(ConfigError::InvalidObservation { .. })
        ));
        assert!(matches!(
            "1,2,3,4".parse::<WindObservation>(),
            Err(ConfigError::InvalidObservation { .. })
        ));
        assert!("".parse::<WindObservation>().is_err());
    }
}
