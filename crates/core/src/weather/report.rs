//! Human-readable weather report.

use crate::core_types::units::RatePerSecond;
use crate::weather::regime::{classify, SeverityColor, WeatherRegime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified vorticity with its report line
///
/// The formatted magnitude is presentation only; classification always uses
/// the raw value.
///
/// # Example
///
/// ```
/// use windvort_core::core_types::units::RatePerSecond;
/// use windvort_core::weather::WeatherReport;
///
/// let report = WeatherReport::new(RatePerSecond::new(0.005));
/// assert_eq!(
///     report.to_string(),
///     "ωz = 5.000000e-3 s⁻¹ → High positive vorticity → Possible cyclone, tornado, or turbulence."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub omega_z: RatePerSecond,
    pub regime: WeatherRegime,
}

impl WeatherReport {
    /// Classify `omega_z` and keep both
    pub fn new(omega_z: RatePerSecond) -> Self {
        Self {
            omega_z,
            regime: classify(omega_z),
        }
    }

    pub fn color(&self) -> SeverityColor {
        self.regime.color()
    }

    /// `ωz = …` line prefixed with the region it describes
    pub fn for_region(&self, region: &str) -> String {
        format!("Weather Report for {region}: {self}")
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ωz = {} → {} → {}",
            self.omega_z,
            self.regime.headline(),
            self.regime.outlook()
        )
    }
}
