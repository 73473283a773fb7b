//! Vector type aliases for wind components and map coordinates.

use nalgebra::{Vector2, Vector3};

/// 3D vector type for Cartesian wind (u east, v north, w up) in m/s.
///
/// This is a simple alias for `nalgebra::Vector3<f64>`, used by the vector
/// converter and the vorticity estimator.
pub type Vec3 = Vector3<f64>;

/// 2D vector type for horizontal wind and for particle state on the map.
///
/// Particle positions are (longitude, latitude) and particle velocities are
/// map-degrees per frame; the mean horizontal wind is (u, v) in m/s.
pub type Vec2 = Vector2<f64>;
