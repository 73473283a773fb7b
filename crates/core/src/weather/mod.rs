//! Weather regime classification from vertical vorticity.
//!
//! Relative vorticity of the low-level wind is a rough proxy for the synoptic
//! regime: strong cyclonic rotation accompanies storms and tornadic
//! circulations, weak positive rotation accompanies fronts and rain bands,
//! near-zero rotation is settled weather, and anticyclonic (negative) rotation
//! accompanies high pressure and clear skies.

pub mod regime;
pub mod report;

pub use regime::{classify, vorticity_ranges, SeverityColor, WeatherRegime};
pub use report::WeatherReport;
