//! Vorticity regime detection
//!
//! Partitions the real line of ω_z values into four regimes. The partition
//! has no gaps and no overlaps:
//!
//! | ω_z (s⁻¹)            | Regime        | Colour |
//! |----------------------|---------------|--------|
//! | ω > 1e-4             | High positive | red    |
//! | 1e-5 < ω ≤ 1e-4      | Moderate      | orange |
//! | −1e-5 ≤ ω ≤ 1e-5     | Near zero     | green  |
//! | ω < −1e-5            | Negative      | blue   |

use crate::core_types::units::RatePerSecond;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Regime thresholds in s⁻¹.
///
/// `HIGH_POSITIVE` is exclusive (1e-4 itself is Moderate); `NEAR_ZERO` is
/// closed at both ends (±1e-5 are near zero).
pub mod vorticity_ranges {
    use std::ops::RangeInclusive;

    /// Lower (exclusive) bound of the high positive regime
    pub const HIGH_POSITIVE: f64 = 1e-4;

    /// Lower (exclusive) bound of the moderate regime
    pub const MODERATE: f64 = 1e-5;

    /// Closed near-zero band `[-1e-5, 1e-5]`
    pub const NEAR_ZERO: RangeInclusive<f64> = -1e-5..=1e-5;
}

/// Discrete weather regime inferred from ω_z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeatherRegime {
    /// ω_z < −1e-5: anticyclonic, high pressure
    Negative,
    /// |ω_z| ≤ 1e-5: calm
    NearZero,
    /// 1e-5 < ω_z ≤ 1e-4: rain or frontal activity
    Moderate,
    /// ω_z > 1e-4: storm or tornado risk
    HighPositive,
}

/// Severity tag a renderer can map to its own palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityColor {
    Red,
    Orange,
    Green,
    Blue,
}

impl SeverityColor {
    /// Lowercase colour name, usable directly by most plotting libraries
    pub fn name(self) -> &'static str {
        match self {
            SeverityColor::Red => "red",
            SeverityColor::Orange => "orange",
            SeverityColor::Green => "green",
            SeverityColor::Blue => "blue",
        }
    }

    /// 8-bit sRGB triple (CSS named colour values)
    pub fn rgb(self) -> [u8; 3] {
        match self {
            SeverityColor::Red => [255, 0, 0],
            SeverityColor::Orange => [255, 165, 0],
            SeverityColor::Green => [0, 128, 0],
            SeverityColor::Blue => [0, 0, 255],
        }
    }
}

impl fmt::Display for SeverityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a vorticity value
///
/// NaN fails every comparison and lands in [`WeatherRegime::Negative`], the
/// final fall-through branch.
///
/// # Example
///
/// ```
/// use windvort_core::core_types::units::RatePerSecond;
/// use windvort_core::weather::{classify, WeatherRegime};
///
/// assert_eq!(classify(RatePerSecond::new(1e-4)), WeatherRegime::Moderate);
/// assert_eq!(classify(RatePerSecond::new(1.00001e-4)), WeatherRegime::HighPositive);
/// ```
pub fn classify(omega_z: RatePerSecond) -> WeatherRegime {
    let omega = *omega_z;

    if omega > vorticity_ranges::HIGH_POSITIVE {
        WeatherRegime::HighPositive
    } else if omega > vorticity_ranges::MODERATE {
        WeatherRegime::Moderate
    } else if vorticity_ranges::NEAR_ZERO.contains(&omega) {
        WeatherRegime::NearZero
    } else {
        WeatherRegime::Negative
    }
}

impl WeatherRegime {
    /// Severity colour of the regime
    pub fn color(self) -> SeverityColor {
        match self {
            WeatherRegime::HighPositive => SeverityColor::Red,
            WeatherRegime::Moderate => SeverityColor::Orange,
            WeatherRegime::NearZero => SeverityColor::Green,
            WeatherRegime::Negative => SeverityColor::Blue,
        }
    }

    /// Short regime name used in reports
    pub fn headline(self) -> &'static str {
        match self {
            WeatherRegime::HighPositive => "High positive vorticity",
            WeatherRegime::Moderate => "Moderate vorticity",
            WeatherRegime::NearZero => "Near-zero vorticity",
            WeatherRegime::Negative => "Negative vorticity",
        }
    }

    /// Expected weather for the regime
    pub fn outlook(self) -> &'static str {
        match self {
            WeatherRegime::HighPositive => "Possible cyclone, tornado, or turbulence.",
            WeatherRegime::Moderate => "Rain, thunderstorms, or frontal activity.",
            WeatherRegime::NearZero => "Calm or stable weather conditions.",
            WeatherRegime::Negative => "Clear skies, high-pressure zones likely.",
        }
    }
}

impl fmt::Display for WeatherRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}
