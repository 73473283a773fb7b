//! Speed normalisation for tracer colouring.
//!
//! All tracers share one colour derived from the mean wind speed. The core
//! only produces the normalised fraction; the renderer owns the colour map.

use serde::{Deserialize, Serialize};

/// Linear map from a speed range onto [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedNorm {
    /// Speed mapped to 0.0 (m/s)
    pub vmin: f64,
    /// Speed mapped to 1.0 (m/s)
    pub vmax: f64,
}

impl Default for SpeedNorm {
    fn default() -> Self {
        Self {
            vmin: 0.0,
            vmax: 20.0,
        }
    }
}

impl SpeedNorm {
    /// Fraction of the range covered by `speed`, clamped to [0, 1].
    ///
    /// A degenerate range (vmax <= vmin) maps everything at or above vmin to 1.
    pub fn normalize(&self, speed: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return if speed >= self.vmin { 1.0 } else { 0.0 };
        }
        ((speed - self.vmin) / span).clamp(0.0, 1.0)
    }
}
