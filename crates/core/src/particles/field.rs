//! Stochastic tracer advection.
//!
//! N tracers drift with a constant background wind plus Gaussian turbulence
//! inside a lon/lat box. Each [`ParticleField::step`] is one animation frame:
//!
//! 1. `position += velocity` (explicit Euler, one frame per step)
//! 2. `velocity += σ·N(0, 1)` per axis
//! 3. a tracer outside the box on any axis is re-injected at a uniformly random
//!    position; its velocity is kept
//!
//! Velocity is never damped or clamped, so the turbulent perturbations
//! accumulate as a random walk and long runs drift further and further from
//! the background wind. The per-step kick is also not multiplied by the speed
//! scale, so with the default settings it dominates the scaled drift after a
//! few frames. Both properties are kept as-is.

use crate::core_types::vec3::Vec2;
use crate::core_types::Domain;
use crate::error::{ConfigError, ConfigResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::Serialize;
use tracing::{debug, trace};

/// Default number of tracers
pub const DEFAULT_PARTICLE_COUNT: usize = 200;

/// Default turbulence standard deviation
pub const DEFAULT_TURBULENCE: f64 = 0.05;

/// Default m/s → map-degrees-per-frame scale
pub const DEFAULT_SPEED_SCALE: f64 = 0.0002;

/// Snapshot of one tracer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    /// (lon, lat)
    pub position: Vec2,
    /// Map-degrees per frame
    pub velocity: Vec2,
}

/// Builder for [`ParticleField`]
///
/// # Example
///
/// ```
/// use windvort_core::core_types::{Domain, GeoPoint, Vec2};
/// use windvort_core::particles::ParticleFieldBuilder;
///
/// let domain = Domain::around(GeoPoint::new(80.0, 25.0), 2.0).unwrap();
/// let mut field = ParticleFieldBuilder::new(domain)
///     .count(50)
///     .drift(Vec2::new(4.0, -1.5))
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let positions = field.step();
/// assert_eq!(positions.len(), 50);
/// assert!(positions.iter().all(|p| domain.contains(p)));
/// ```
#[derive(Debug, Clone)]
pub struct ParticleFieldBuilder {
    domain: Domain,
    count: usize,
    drift: Vec2,
    turbulence: f64,
    speed_scale: f64,
    seed: Option<u64>,
}

impl ParticleFieldBuilder {
    /// Start from the defaults: 200 tracers, no drift, σ = 0.05, scale 0.0002
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            count: DEFAULT_PARTICLE_COUNT,
            drift: Vec2::zeros(),
            turbulence: DEFAULT_TURBULENCE,
            speed_scale: DEFAULT_SPEED_SCALE,
            seed: None,
        }
    }

    /// Number of tracers
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Background wind (m/s)
    pub fn drift(mut self, drift: Vec2) -> Self {
        self.drift = drift;
        self
    }

    /// Standard deviation of the Gaussian velocity perturbation
    pub fn turbulence(mut self, sigma: f64) -> Self {
        self.turbulence = sigma;
        self
    }

    /// Multiplier from physical wind to map displacement per frame
    pub fn speed_scale(mut self, scale: f64) -> Self {
        self.speed_scale = scale;
        self
    }

    /// Seed for a reproducible [`StdRng`]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build with a [`StdRng`], seeded if [`seed`](Self::seed) was given and
    /// from OS entropy otherwise.
    ///
    /// # Errors
    ///
    /// See [`build_with_rng`](Self::build_with_rng).
    pub fn build(self) -> ConfigResult<ParticleField<StdRng>> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.build_with_rng(rng)
    }

    /// Build with a caller-supplied random generator.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyField`] when the count is zero
    /// - [`ConfigError::InvalidTurbulence`] for a negative or non-finite σ
    /// - [`ConfigError::InvalidSpeedScale`] for a non-positive or non-finite scale
    /// - [`ConfigError::NonFinite`] for a non-finite drift component
    pub fn build_with_rng<R: Rng>(self, mut rng: R) -> ConfigResult<ParticleField<R>> {
        self.validate()?;

        let mut positions = Vec::with_capacity(self.count);
        let mut velocities = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            positions.push(self.domain.sample(&mut rng));
            let jitter = gaussian_kick(&mut rng, self.turbulence);
            velocities.push((self.drift + jitter) * self.speed_scale);
        }

        debug!(
            count = self.count,
            drift_u = self.drift.x,
            drift_v = self.drift.y,
            turbulence = self.turbulence,
            speed_scale = self.speed_scale,
            "Initialized particle field"
        );

        Ok(ParticleField {
            positions,
            velocities,
            domain: self.domain,
            drift: self.drift,
            turbulence: self.turbulence,
            speed_scale: self.speed_scale,
            frame: 0,
            reinjected: 0,
            rng,
        })
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.count == 0 {
            return Err(ConfigError::EmptyField);
        }
        if !(self.turbulence.is_finite() && self.turbulence >= 0.0) {
            return Err(ConfigError::InvalidTurbulence {
                value: self.turbulence,
            });
        }
        if !(self.speed_scale.is_finite() && self.speed_scale > 0.0) {
            return Err(ConfigError::InvalidSpeedScale {
                value: self.speed_scale,
            });
        }
        ConfigError::ensure_finite("drift u", self.drift.x)?;
        ConfigError::ensure_finite("drift v", self.drift.y)?;
        Ok(())
    }
}

/// Independent σ·N(0, 1) draws for both axes
#[inline]
fn gaussian_kick<R: Rng>(rng: &mut R, sigma: f64) -> Vec2 {
    let du: f64 = rng.sample(StandardNormal);
    let dv: f64 = rng.sample(StandardNormal);
    Vec2::new(du, dv) * sigma
}

/// Fixed-size population of advected tracers
///
/// Tracer identity is the index; the population never grows or shrinks.
#[derive(Debug, Clone)]
pub struct ParticleField<R = StdRng> {
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
    domain: Domain,
    drift: Vec2,
    turbulence: f64,
    speed_scale: f64,
    frame: u64,
    reinjected: usize,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    /// Advance one frame and return every tracer position.
    ///
    /// All returned positions lie inside the domain.
    pub fn step(&mut self) -> &[Vec2] {
        assert_eq!(
            self.positions.len(),
            self.velocities.len(),
            "particle state arrays out of sync"
        );

        let mut reinjected = 0;
        for (position, velocity) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            *position += *velocity;
            *velocity += gaussian_kick(&mut self.rng, self.turbulence);

            if !self.domain.contains(position) {
                *position = self.domain.sample(&mut self.rng);
                reinjected += 1;
            }
        }

        self.frame += 1;
        self.reinjected = reinjected;
        trace!(frame = self.frame, reinjected, "Advanced particle field");

        &self.positions
    }
}

impl<R> ParticleField<R> {
    /// Current (lon, lat) of every tracer
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Current per-frame velocity of every tracer
    pub fn velocities(&self) -> &[Vec2] {
        &self.velocities
    }

    /// Iterate tracer snapshots in index order
    pub fn particles(&self) -> impl Iterator<Item = Particle> + '_ {
        self.positions
            .iter()
            .zip(&self.velocities)
            .map(|(&position, &velocity)| Particle { position, velocity })
    }

    /// Number of tracers (constant)
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; a field holds at least one tracer
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Steps taken so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Tracers re-injected during the most recent step
    pub fn reinjected_last_step(&self) -> usize {
        self.reinjected
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Background wind (m/s) the field was seeded with
    pub fn drift(&self) -> Vec2 {
        self.drift
    }

    pub fn turbulence(&self) -> f64 {
        self.turbulence
    }

    pub fn speed_scale(&self) -> f64 {
        self.speed_scale
    }

    /// Mean per-frame velocity across the population
    pub fn mean_velocity(&self) -> Vec2 {
        let sum: Vec2 = self.velocities.iter().sum();
        sum / self.velocities.len() as f64
    }
}
