//! Frame driver connecting a [`ParticleField`] to a [`RenderAdapter`].
//!
//! The driver only sequences calls. Timing is the adapter's business: the
//! frame interval is passed along as metadata and never slept on here.

use crate::particles::ParticleField;
use crate::render::{Frame, Overview, RenderAdapter};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default number of frames in one animation run
pub const DEFAULT_FRAMES: u64 = 200;

/// Default delay between frames
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

/// Animation length and cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    /// Number of frames to produce
    pub frames: u64,
    /// Intended delay between frames
    pub interval: Duration,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AnimationStats {
    /// Frames delivered to the adapter
    pub frames: u64,
    /// Re-injections summed over all frames
    pub reinjected: u64,
}

impl Animation {
    /// Create an animation of `frames` frames at `interval`
    pub fn new(frames: u64, interval: Duration) -> Self {
        Self { frames, interval }
    }

    /// Nominal playback length
    pub fn duration(&self) -> Duration {
        self.interval
            .saturating_mul(u32::try_from(self.frames).unwrap_or(u32::MAX))
    }

    /// Drive `field` for the configured number of frames.
    ///
    /// Calls `setup` once, `frame` after every step, then `finish`.
    pub fn run<R, A>(
        &self,
        overview: &Overview,
        field: &mut ParticleField<R>,
        adapter: &mut A,
    ) -> AnimationStats
    where
        R: Rng,
        A: RenderAdapter + ?Sized,
    {
        info!(
            frames = self.frames,
            interval_ms = self.interval.as_millis() as u64,
            particles = field.len(),
            "Starting animation"
        );
        adapter.setup(overview);

        let mut stats = AnimationStats::default();
        for _ in 0..self.frames {
            field.step();
            let frame = Frame {
                index: field.frame(),
                positions: field.positions(),
            };
            adapter.frame(&frame);

            stats.frames += 1;
            stats.reinjected += field.reinjected_last_step() as u64;
        }

        adapter.finish();
        debug!(
            frames = stats.frames,
            reinjected = stats.reinjected,
            "Animation finished"
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::RatePerSecond;
    use crate::core_types::{Domain, GeoPoint, Vec2};
    use crate::particles::ParticleFieldBuilder;
    use crate::render::RecordingAdapter;
    use crate::weather::WeatherReport;
    use crate::wind::VorticityResult;

    fn overview(domain: Domain) -> Overview {
        let vorticity = VorticityResult {
            omega_z: RatePerSecond::new(0.0),
            dv_dx: RatePerSecond::new(0.0),
            du_dy: RatePerSecond::new(0.0),
            mean_wind: Vec2::new(1.0, 0.0),
        };
        Overview {
            region: "Test".to_string(),
            center: domain.center(),
            domain,
            vorticity,
            report: WeatherReport::new(vorticity.omega_z),
            tint: 0.05,
        }
    }

    #[test]
    fn test_run_delivers_every_frame() {
        let domain = Domain::around(GeoPoint::new(0.0, 0.0), 1.0).unwrap();
        let mut field = ParticleFieldBuilder::new(domain)
            .count(12)
            .seed(4)
            .build()
            .unwrap();
        let mut recorder = RecordingAdapter::default();

        let stats = Animation::new(25, Duration::from_millis(10)).run(
            &overview(domain),
            &mut field,
            &mut recorder,
        );

        assert_eq!(stats.frames, 25);
        assert_eq!(recorder.frames.len(), 25);
        assert!(recorder.finished);
        assert_eq!(recorder.overview.as_ref().map(|o| o.region.as_str()), Some("Test"));
        assert!(recorder.frames.iter().all(|f| f.len() == 12));
        assert_eq!(field.frame(), 25);
    }

    #[test]
    fn test_defaults_and_duration() {
        let animation = Animation::default();
        assert_eq!(animation.frames, 200);
        assert_eq!(animation.interval, Duration::from_millis(50));
        assert_eq!(animation.duration(), Duration::from_secs(10));
    }
}
