//! End-to-end run description.
//!
//! A [`Scenario`] carries everything one run needs: where the region is, the
//! four observations around it, the stencil spacing and the tracer settings.
//! Everything except the region, observations and spacing has a default, so
//! a minimal JSON document looks like:
//!
//! ```json
//! {
//!   "region": "Varanasi",
//!   "center": { "lon": 83.0, "lat": 25.3 },
//!   "observations": {
//!     "north": { "speed": 20.0, "azimuth": 180.0 },
//!     "south": { "speed": 20.0, "azimuth": 0.0 },
//!     "east":  { "speed": 15.0, "azimuth": 270.0 },
//!     "west":  { "speed": 15.0, "azimuth": 90.0 }
//!   },
//!   "dx_km": 10.0,
//!   "dy_km": 10.0
//! }
//! ```

use crate::animation::{Animation, AnimationStats, DEFAULT_FRAMES};
use crate::core_types::units::Kilometers;
use crate::core_types::{CardinalObservations, Domain, GeoPoint};
use crate::error::ConfigResult;
use crate::particles::{
    ParticleField, ParticleFieldBuilder, SpeedNorm, DEFAULT_PARTICLE_COUNT, DEFAULT_SPEED_SCALE,
    DEFAULT_TURBULENCE,
};
use crate::render::{Overview, RenderAdapter};
use crate::weather::WeatherReport;
use crate::wind::{GridSpacing, VorticityResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Half-width of the map box around the centre, in degrees
pub const DEFAULT_HALF_EXTENT: f64 = 2.0;

fn default_half_extent() -> f64 {
    DEFAULT_HALF_EXTENT
}

/// Tracer settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub count: usize,
    pub turbulence: f64,
    pub speed_scale: f64,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            turbulence: DEFAULT_TURBULENCE,
            speed_scale: DEFAULT_SPEED_SCALE,
            seed: None,
        }
    }
}

/// Animation length and cadence in file-friendly units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub frames: u64,
    pub interval_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            interval_ms: 50,
        }
    }
}

/// One complete run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub region: String,
    pub center: GeoPoint,
    pub observations: CardinalObservations,
    /// East–west stencil arm
    #[serde(rename = "dx_km")]
    pub dx: Kilometers,
    /// North–south stencil arm
    #[serde(rename = "dy_km")]
    pub dy: Kilometers,
    #[serde(default = "default_half_extent")]
    pub half_extent: f64,
    #[serde(default)]
    pub particles: ParticleSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
}

/// Everything derived from a scenario before the animation starts
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub spacing: GridSpacing,
    pub vorticity: VorticityResult,
    pub report: WeatherReport,
    pub overview: Overview,
}

impl Scenario {
    /// Scenario with default map, tracer and animation settings
    pub fn new(
        region: impl Into<String>,
        center: GeoPoint,
        observations: CardinalObservations,
        dx: Kilometers,
        dy: Kilometers,
    ) -> Self {
        Self {
            region: region.into(),
            center,
            observations,
            dx,
            dy,
            half_extent: DEFAULT_HALF_EXTENT,
            particles: ParticleSettings::default(),
            animation: AnimationSettings::default(),
        }
    }

    /// Parse a JSON scenario document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Scenario`](crate::ConfigError::Scenario) when
    /// the document is malformed or misses a required field.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Scenario`](crate::ConfigError::Scenario) if
    /// serialization fails.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Estimate vorticity, classify it and lay out the map.
    ///
    /// # Errors
    ///
    /// Fails on invalid spacing, an invalid observation or an invalid
    /// map extent.
    pub fn analyse(&self) -> ConfigResult<Analysis> {
        let spacing = GridSpacing::from_kilometers(self.dx, self.dy)?;
        let vorticity = self.observations.estimate(&spacing)?;
        let report = WeatherReport::new(vorticity.omega_z);
        let domain = Domain::around(self.center, self.half_extent)?;

        info!(
            region = %self.region,
            omega_z = *vorticity.omega_z,
            regime = ?report.regime,
            "Weather analysis complete"
        );

        let overview = Overview {
            region: self.region.clone(),
            center: self.center,
            domain,
            vorticity,
            report,
            tint: SpeedNorm::default().normalize(vorticity.mean_speed()),
        };

        Ok(Analysis {
            spacing,
            vorticity,
            report,
            overview,
        })
    }

    /// Tracer field drifting with the analysed mean wind.
    ///
    /// # Errors
    ///
    /// Fails on invalid tracer settings.
    pub fn particle_field(&self, analysis: &Analysis) -> ConfigResult<ParticleField> {
        let mut builder = ParticleFieldBuilder::new(analysis.overview.domain)
            .count(self.particles.count)
            .drift(analysis.vorticity.mean_wind)
            .turbulence(self.particles.turbulence)
            .speed_scale(self.particles.speed_scale);
        if let Some(seed) = self.particles.seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }

    pub fn animation(&self) -> Animation {
        Animation::new(
            self.animation.frames,
            Duration::from_millis(self.animation.interval_ms),
        )
    }

    /// Analyse, build the field and drive the full animation into `adapter`.
    ///
    /// # Errors
    ///
    /// Any error from [`analyse`](Self::analyse) or
    /// [`particle_field`](Self::particle_field); nothing fails once frames
    /// start.
    pub fn run<A: RenderAdapter + ?Sized>(&self, adapter: &mut A) -> ConfigResult<AnimationStats> {
        let analysis = self.analyse()?;
        let mut field = self.particle_field(&analysis)?;
        Ok(self
            .animation()
            .run(&analysis.overview, &mut field, adapter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::WindObservation;
    use crate::error::ConfigError;
    use crate::weather::WeatherRegime;

    const MINIMAL: &str = r#"{
        "region": "Varanasi",
        "center": { "lon": 83.0, "lat": 25.3 },
        "observations": {
            "north": { "speed": 20.0, "azimuth": 180.0 },
            "south": { "speed": 20.0, "azimuth": 0.0 },
            "east":  { "speed": 15.0, "azimuth": 270.0 },
            "west":  { "speed": 15.0, "azimuth": 90.0 }
        },
        "dx_km": 10.0,
        "dy_km": 10.0
    }"#;

    #[test]
    fn test_minimal_json_uses_defaults() {
        let scenario = Scenario::from_json_str(MINIMAL).unwrap();
        assert_eq!(scenario.region, "Varanasi");
        assert_eq!(*scenario.dx, 10.0);
        assert_eq!(scenario.half_extent, 2.0);
        assert_eq!(scenario.particles, ParticleSettings::default());
        assert_eq!(scenario.animation.frames, 200);
        assert_eq!(scenario.observations.north.elevation.value(), 0.0);
    }

    #[test]
    fn test_json_round_trip() {
        let scenario = Scenario::from_json_str(MINIMAL).unwrap();
        let json = scenario.to_json_string().unwrap();
        assert_eq!(Scenario::from_json_str(&json).unwrap(), scenario);
    }

    #[test]
    fn test_missing_field_is_scenario_error() {
        let err = Scenario::from_json_str(r#"{ "region": "x" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Scenario(_)));
    }

    #[test]
    fn test_analyse_converging_flow() {
        // Westerly at the north sample, easterly at the south sample: the
        // u shear outweighs the v shear and the rotation is anticyclonic.
        let scenario = Scenario::from_json_str(MINIMAL).unwrap();
        let analysis = scenario.analyse().unwrap();
        assert!(*analysis.vorticity.du_dy > 0.0);
        assert!(*analysis.vorticity.omega_z < 0.0);
        assert_eq!(analysis.report.regime, WeatherRegime::Negative);
        let expected = [81.0, 85.0, 23.3, 27.3];
        for (got, want) in analysis.overview.domain.extent().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
        assert!((0.0..=1.0).contains(&analysis.overview.tint));
    }

    #[test]
    fn test_invalid_spacing_fails_analysis() {
        let mut scenario = Scenario::from_json_str(MINIMAL).unwrap();
        scenario.dy = Kilometers::new(0.0);
        assert!(matches!(
            scenario.analyse(),
            Err(ConfigError::InvalidGridSpacing { axis: "dy", .. })
        ));
    }

    #[test]
    fn test_huge_half_extent_fails_analysis() {
        let mut scenario = Scenario::from_json_str(MINIMAL).unwrap();
        scenario.half_extent = 1e308;
        assert!(matches!(
            scenario.analyse(),
            Err(ConfigError::InvalidDomain {
                axis: "longitude",
                ..
            })
        ));
    }

    #[test]
    fn test_particle_field_follows_settings() {
        let mut scenario = Scenario::new(
            "Calm",
            GeoPoint::new(0.0, 0.0),
            CardinalObservations::new(
                WindObservation::horizontal(10.0, 0.0),
                WindObservation::horizontal(10.0, 0.0),
                WindObservation::horizontal(10.0, 0.0),
                WindObservation::horizontal(10.0, 0.0),
            ),
            Kilometers::new(5.0),
            Kilometers::new(5.0),
        );
        scenario.particles.count = 17;
        scenario.particles.seed = Some(8);

        let analysis = scenario.analyse().unwrap();
        let field = scenario.particle_field(&analysis).unwrap();
        assert_eq!(field.len(), 17);
        assert_eq!(field.drift(), analysis.vorticity.mean_wind);
    }
}
