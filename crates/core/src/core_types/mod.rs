//! Core types and utilities

pub mod domain;
pub mod observation;
pub mod units;
pub mod vec3;

pub use domain::{Domain, GeoPoint};
pub use observation::{CardinalObservations, WindObservation};
pub use units::*;
pub use vec3::{Vec2, Vec3};
