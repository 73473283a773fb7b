//! Wind observation processing.
//!
//! Turns four directional observations into Cartesian wind vectors and a
//! finite-difference estimate of vertical vorticity:
//!
//! ```text
//! ω_z = ∂v/∂x − ∂u/∂y ≈ (v_E − v_W) / 2Δx − (u_N − u_S) / 2Δy
//! ```
//!
//! on a cross-shaped stencil whose arms are Δx (east–west) and Δy
//! (north–south) from the centre point.

pub mod conversion;
pub mod vorticity;

pub use conversion::{convert, WindVector};
pub use vorticity::{estimate, GridSpacing, VorticityResult};
