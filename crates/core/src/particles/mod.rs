//! Tracer particles that visualise the mean wind.

pub mod field;
pub mod tint;

pub use field::{
    Particle, ParticleField, ParticleFieldBuilder, DEFAULT_PARTICLE_COUNT, DEFAULT_SPEED_SCALE,
    DEFAULT_TURBULENCE,
};
pub use tint::SpeedNorm;
