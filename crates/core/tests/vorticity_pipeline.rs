//! End-to-end checks from raw observations to the weather report.
//!
//! Run with: cargo test --test `vorticity_pipeline`

use approx::assert_relative_eq;
use windvort_core::core_types::{GeoPoint, Kilometers, Meters, RatePerSecond};
use windvort_core::render::RecordingAdapter;
use windvort_core::weather::{classify, vorticity_ranges, SeverityColor};
use windvort_core::wind::{estimate, WindVector};
use windvort_core::{
    CardinalObservations, ConfigError, GridSpacing, Scenario, WeatherRegime, WeatherReport,
    WindObservation,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn spacing_km(dx: f64, dy: f64) -> GridSpacing {
    GridSpacing::from_kilometers(Kilometers::new(dx), Kilometers::new(dy)).unwrap()
}

/// 18 km/h = 5 m/s
const FIVE_MPS: f64 = 18.0;

// ═══════════════════════════════════════════════════════════════════════════════
// Observation → vorticity
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_cyclonic_shear_is_high_positive() {
    // Wind from the south (270°) at the east sample, from the north (90°) at
    // the west sample: v = +5 east, v = -5 west.
    let observations = CardinalObservations::new(
        WindObservation::horizontal(0.0, 0.0),
        WindObservation::horizontal(0.0, 0.0),
        WindObservation::horizontal(FIVE_MPS, 270.0),
        WindObservation::horizontal(FIVE_MPS, 90.0),
    );

    let result = observations.estimate(&spacing_km(1.0, 1.0)).unwrap();
    assert_relative_eq!(*result.omega_z, 0.005, epsilon = 1e-12);
    assert_relative_eq!(*result.du_dy, 0.0, epsilon = 1e-12);

    let report = WeatherReport::new(result.omega_z);
    assert_eq!(report.regime, WeatherRegime::HighPositive);
    assert_eq!(report.color(), SeverityColor::Red);
    assert_eq!(
        report.to_string(),
        "ωz = 5.000000e-3 s⁻¹ → High positive vorticity → Possible cyclone, tornado, or turbulence."
    );
}

#[test]
fn test_purely_convergent_pattern_has_no_rotation() {
    // North sample blows north, south sample blows south, east blows east,
    // west blows west. Only v at east/west and u at north/south enter the
    // stencil, and all four are zero here.
    let observations = CardinalObservations::new(
        WindObservation::horizontal(FIVE_MPS, 270.0),
        WindObservation::horizontal(FIVE_MPS, 90.0),
        WindObservation::horizontal(FIVE_MPS, 180.0),
        WindObservation::horizontal(FIVE_MPS, 0.0),
    );

    let result = observations.estimate(&spacing_km(1.0, 1.0)).unwrap();
    assert!(result.omega_z.abs() < 1e-15, "omega_z = {}", result.omega_z);
    assert_relative_eq!(result.mean_speed(), 0.0, epsilon = 1e-12);
    assert_eq!(classify(result.omega_z), WeatherRegime::NearZero);
}

#[test]
fn test_radial_vectors_cancel_in_the_stencil() {
    // north=(0,5) south=(0,-5) east=(5,0) west=(-5,0): the stencil reads
    // u at north/south and v at east/west, all zero.
    let spacing = GridSpacing::new(Meters::new(1000.0), Meters::new(1000.0)).unwrap();
    let result = estimate(
        &WindVector::new(0.0, 5.0, 0.0),
        &WindVector::new(0.0, -5.0, 0.0),
        &WindVector::new(5.0, 0.0, 0.0),
        &WindVector::new(-5.0, 0.0, 0.0),
        &spacing,
    );
    assert_eq!(*result.du_dy, 0.0);
    assert_eq!(*result.dv_dx, 0.0);
    assert_eq!(classify(result.omega_z), WeatherRegime::NearZero);
}

#[test]
fn test_uniform_wind_is_calm_with_matching_mean() {
    // Same 36 km/h westerly everywhere: no shear, mean equals the wind
    let obs = WindObservation::horizontal(36.0, 180.0);
    let observations = CardinalObservations::new(obs, obs, obs, obs);

    let result = observations.estimate(&spacing_km(10.0, 10.0)).unwrap();
    assert_relative_eq!(*result.omega_z, 0.0, epsilon = 1e-15);
    assert_relative_eq!(result.mean_wind.x, 10.0, epsilon = 1e-9);
    assert_relative_eq!(result.mean_wind.y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_elevation_only_shrinks_horizontal_components() {
    let flat = CardinalObservations::new(
        WindObservation::horizontal(0.0, 0.0),
        WindObservation::horizontal(0.0, 0.0),
        WindObservation::horizontal(FIVE_MPS, 270.0),
        WindObservation::horizontal(FIVE_MPS, 90.0),
    );
    let tilted = CardinalObservations::new(
        flat.north,
        flat.south,
        WindObservation::new(FIVE_MPS, 270.0, 60.0),
        WindObservation::new(FIVE_MPS, 90.0, 60.0),
    );

    let spacing = spacing_km(1.0, 1.0);
    let flat = flat.estimate(&spacing).unwrap();
    let tilted = tilted.estimate(&spacing).unwrap();
    assert_relative_eq!(*tilted.omega_z, *flat.omega_z * 0.5, epsilon = 1e-12);
}

#[test]
fn test_spacing_scales_vorticity_inversely() {
    let observations = CardinalObservations::new(
        WindObservation::horizontal(FIVE_MPS, 0.0),
        WindObservation::horizontal(FIVE_MPS, 180.0),
        WindObservation::horizontal(FIVE_MPS, 270.0),
        WindObservation::horizontal(FIVE_MPS, 90.0),
    );

    let near = observations.estimate(&spacing_km(1.0, 1.0)).unwrap();
    let far = observations.estimate(&spacing_km(10.0, 10.0)).unwrap();
    assert_relative_eq!(*near.omega_z, *far.omega_z * 10.0, epsilon = 1e-12);
    // u_N = -5, u_S = +5 adds to the v shear: 0.005 + 0.005
    assert_relative_eq!(*near.omega_z, 0.01, epsilon = 1e-12);
}

#[test]
fn test_bad_inputs_are_rejected_before_estimation() {
    let good = WindObservation::horizontal(10.0, 0.0);
    let spacing = spacing_km(1.0, 1.0);

    let negative =
        CardinalObservations::new(good, good, WindObservation::horizontal(-1.0, 0.0), good);
    assert!(matches!(
        negative.estimate(&spacing),
        Err(ConfigError::NegativeSpeed { .. })
    ));

    let nan =
        CardinalObservations::new(WindObservation::new(10.0, f64::NAN, 0.0), good, good, good);
    assert!(matches!(
        nan.estimate(&spacing),
        Err(ConfigError::NonFinite {
            parameter: "azimuth",
            ..
        })
    ));

    assert!(matches!(
        GridSpacing::new(Meters::new(1000.0), Meters::new(-1.0)),
        Err(ConfigError::InvalidGridSpacing { axis: "dy", .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Classification boundaries
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_threshold_boundaries() {
    let cases = [
        (vorticity_ranges::HIGH_POSITIVE, WeatherRegime::Moderate),
        (1.0000001e-4, WeatherRegime::HighPositive),
        (vorticity_ranges::MODERATE, WeatherRegime::NearZero),
        (1.0000001e-5, WeatherRegime::Moderate),
        (0.0, WeatherRegime::NearZero),
        (-1e-5, WeatherRegime::NearZero),
        (-1.0000001e-5, WeatherRegime::Negative),
        (-1.0, WeatherRegime::Negative),
        (f64::INFINITY, WeatherRegime::HighPositive),
        (f64::NEG_INFINITY, WeatherRegime::Negative),
    ];

    for (omega, expected) in cases {
        assert_eq!(
            classify(RatePerSecond::new(omega)),
            expected,
            "omega = {omega:e}"
        );
    }
}

#[test]
fn test_classification_is_monotone() {
    let mut previous = WeatherRegime::Negative;
    let mut omega = -1e-3;
    while omega < 1e-3 {
        let regime = classify(RatePerSecond::new(omega));
        assert!(regime >= previous, "regime went down at {omega:e}");
        previous = regime;
        omega += 1e-6;
    }
    assert_eq!(previous, WeatherRegime::HighPositive);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Full scenario
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_from_json_runs_to_completion() {
    let json = r#"{
        "region": "Varanasi",
        "center": { "lon": 83.0, "lat": 25.3 },
        "observations": {
            "north": { "speed": 0.0, "azimuth": 0.0 },
            "south": { "speed": 0.0, "azimuth": 0.0 },
            "east":  { "speed": 18.0, "azimuth": 270.0 },
            "west":  { "speed": 18.0, "azimuth": 90.0 }
        },
        "dx_km": 1.0,
        "dy_km": 1.0,
        "particles": { "count": 40, "seed": 7 },
        "animation": { "frames": 30 }
    }"#;

    let scenario = Scenario::from_json_str(json).unwrap();
    let mut recorder = RecordingAdapter::default();
    let stats = scenario.run(&mut recorder).unwrap();

    assert_eq!(stats.frames, 30);
    assert_eq!(recorder.frames.len(), 30);
    assert!(recorder.finished);

    let overview = recorder.overview.expect("setup was called");
    assert_eq!(overview.report.regime, WeatherRegime::HighPositive);
    assert!(overview
        .report_line()
        .starts_with("Weather Report for Varanasi: ωz = 5.000000e-3"));

    for frame in &recorder.frames {
        assert_eq!(frame.len(), 40);
        assert!(frame.iter().all(|p| overview.domain.contains(p)));
    }
}

#[test]
fn test_scenario_runs_are_reproducible_with_seed() {
    let obs = WindObservation::horizontal(20.0, 200.0);
    let mut scenario = Scenario::new(
        "Seeded",
        GeoPoint::new(-60.0, -30.0),
        CardinalObservations::new(obs, obs, obs, obs),
        Kilometers::new(5.0),
        Kilometers::new(5.0),
    );
    scenario.particles.seed = Some(2024);
    scenario.animation.frames = 50;

    let mut first = RecordingAdapter::default();
    let mut second = RecordingAdapter::default();
    scenario.run(&mut first).unwrap();
    scenario.run(&mut second).unwrap();

    assert_eq!(first.frames, second.frames);
}
