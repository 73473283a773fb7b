//! Wind Vorticity Core Library
//!
//! Estimates local vertical vorticity from four directional wind observations,
//! classifies the weather regime it implies, and animates the mean wind as a
//! field of drifting tracer particles.
//!
//! ## Pipeline
//!
//! - [`wind::convert`]: observation (km/h, "from" azimuth, elevation) → (u, v, w) m/s
//! - [`wind::estimate`]: four vectors + grid spacing → ω_z and mean wind
//! - [`weather::classify`]: ω_z → [`WeatherRegime`]
//! - [`ParticleField`]: tracers advected by the mean wind plus turbulence
//! - [`Animation`]: steps the field and feeds a [`RenderAdapter`]
//!
//! ```
//! use windvort_core::{CardinalObservations, Scenario, WindObservation};
//! use windvort_core::core_types::{GeoPoint, Kilometers};
//! use windvort_core::render::RecordingAdapter;
//!
//! let mut scenario = Scenario::new(
//!     "Demo",
//!     GeoPoint::new(80.0, 25.0),
//!     CardinalObservations::new(
//!         WindObservation::horizontal(20.0, 270.0),
//!         WindObservation::horizontal(20.0, 270.0),
//!         WindObservation::horizontal(30.0, 270.0),
//!         WindObservation::horizontal(10.0, 270.0),
//!     ),
//!     Kilometers::new(10.0),
//!     Kilometers::new(10.0),
//! );
//! scenario.particles.seed = Some(1);
//! scenario.animation.frames = 5;
//!
//! let mut recorder = RecordingAdapter::default();
//! let stats = scenario.run(&mut recorder).unwrap();
//! assert_eq!(stats.frames, 5);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Estimation and classification
pub mod weather;
pub mod wind;

// Tracer animation
pub mod animation;
pub mod particles;
pub mod render;
pub mod scenario;

// Re-export core types
pub use core_types::{CardinalObservations, Domain, GeoPoint, Vec2, Vec3, WindObservation};
pub use error::{ConfigError, ConfigResult};

// Re-export pipeline types
pub use animation::{Animation, AnimationStats};
pub use particles::{Particle, ParticleField, ParticleFieldBuilder};
pub use render::{Frame, Overview, RenderAdapter};
pub use scenario::{Analysis, Scenario};
pub use weather::{WeatherRegime, WeatherReport};
pub use wind::{GridSpacing, VorticityResult, WindVector};
