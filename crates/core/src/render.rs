//! Renderer-facing interface.
//!
//! The core does not draw anything. A renderer (map tiles, plotting backend,
//! terminal, file writer) implements [`RenderAdapter`] and receives one
//! [`Overview`] at setup followed by one [`Frame`] per animation step.

use crate::core_types::vec3::Vec2;
use crate::core_types::{Domain, GeoPoint};
use crate::weather::WeatherReport;
use crate::wind::VorticityResult;
use serde::Serialize;

/// Static scene content drawn once: extent, location marker, mean wind arrow
/// and the weather report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// Display name of the region
    pub region: String,
    /// Location marker position
    pub center: GeoPoint,
    /// Map extent
    pub domain: Domain,
    /// Vorticity estimate, including the mean wind (m/s)
    pub vorticity: VorticityResult,
    /// Classified regime; the marker takes its severity colour
    pub report: WeatherReport,
    /// Mean wind speed normalised for the tracer colour map, in [0, 1]
    pub tint: f64,
}

impl Overview {
    /// Mean horizontal wind (u, v) in m/s, drawn as the wind arrow
    pub fn mean_wind(&self) -> Vec2 {
        self.vorticity.mean_wind
    }

    /// Report line including the region name
    pub fn report_line(&self) -> String {
        self.report.for_region(&self.region)
    }
}

/// One animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    /// 1-based frame number (the field's frame counter after stepping)
    pub index: u64,
    /// (lon, lat) of every tracer
    pub positions: &'a [Vec2],
}

/// Consumer of the animation output
pub trait RenderAdapter {
    /// Draw static content before the first frame
    fn setup(&mut self, overview: &Overview);

    /// Draw one frame of tracer positions
    fn frame(&mut self, frame: &Frame<'_>);

    /// Called once after the last frame
    fn finish(&mut self) {}
}

/// Adapter that keeps every frame in memory
///
/// Useful for offline rendering and for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingAdapter {
    pub overview: Option<Overview>,
    pub frames: Vec<Vec<Vec2>>,
    pub finished: bool,
}

impl RenderAdapter for RecordingAdapter {
    fn setup(&mut self, overview: &Overview) {
        self.overview = Some(overview.clone());
    }

    fn frame(&mut self, frame: &Frame<'_>) {
        self.frames.push(frame.positions.to_vec());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
