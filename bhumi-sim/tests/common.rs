//! Shared fixtures for integration tests.

use bhumi_sim::scenario::ScenarioConfig;
use bhumi_sim::{ControllerConfig, DefectPatch, NoiseGenerator, SurfaceGrid};

/// Baseline noise amplitude used across fixtures (mm).
pub const NOISE_AMPLITUDE: f32 = 0.05;

/// Depth threshold used across fixtures (mm).
pub const DEPTH_THRESHOLD: f32 = -1.0;

/// A small pitch scenario that runs in well under a second.
///
/// 3m x 5m at 4 cells/m -> 12 x 20 cells; footprint half-size 2 with row
/// spacing 3 gives two cells of overlap between adjacent rows.
pub fn small_scenario(seed: u64) -> ScenarioConfig {
    let mut config = ScenarioConfig::default();
    config.name = "integration".to_string();
    config.seed = seed;
    config.pitch.width_m = 3.0;
    config.pitch.length_m = 5.0;
    config.pitch.cells_per_meter = 4.0;
    config.noise_amplitude = NOISE_AMPLITUDE;
    config.depth_threshold = DEPTH_THRESHOLD;
    config
}

/// Controller tuning matching [`small_scenario`].
pub fn default_controller() -> ControllerConfig {
    ControllerConfig {
        footprint_half: 2,
        depth_threshold: DEPTH_THRESHOLD,
        energy_move: 1.0,
        energy_repair: 10.0,
        noise_amplitude: NOISE_AMPLITUDE,
    }
}

/// A 20 x 8 grid with one 2x2 defect of the given depth at (9, 3).
///
/// The defect fits inside a single half-size-2 footprint centered on it.
pub fn single_defect_grid(depth: f32, noise: &mut NoiseGenerator) -> SurfaceGrid {
    let defect = DefectPatch {
        x: 9,
        y: 3,
        width: 2,
        height: 2,
        depth,
    };
    SurfaceGrid::generate(20, 8, NOISE_AMPLITUDE, &[defect], noise)
}
