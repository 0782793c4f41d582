//! Scenario configuration and end-to-end run harness.
//!
//! A scenario bundles everything needed for one reproducible run: pitch
//! dimensions, noise model, defect generation parameters, sweep geometry,
//! and controller tuning. Scenarios load from YAML files with per-field
//! defaults, are validated once at setup time, and then drive the core loop
//! to completion.

use crate::controller::{ControllerConfig, RepairController, RunLog};
use crate::coverage::CoverageTracker;
use crate::error::{BhumiError, Result};
use crate::metrics::RunSummary;
use crate::planner::{interpolate, plan_sweep, SweepConfig};
use crate::surface::{generate_defects, DefectParams, NoiseGenerator, SurfaceGrid};
use crate::core::PitchPoint;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Physical pitch dimensions and grid scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PitchConfig {
    /// Pitch length in meters
    #[serde(default = "default_pitch_length")]
    pub length_m: f32,
    /// Pitch width in meters
    #[serde(default = "default_pitch_width")]
    pub width_m: f32,
    /// Grid cells per meter
    #[serde(default = "default_cells_per_meter")]
    pub cells_per_meter: f32,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            length_m: default_pitch_length(),
            width_m: default_pitch_width(),
            cells_per_meter: default_cells_per_meter(),
        }
    }
}

impl PitchConfig {
    /// Grid width in cells (columns, across the pitch width).
    pub fn grid_width(&self) -> usize {
        (self.width_m * self.cells_per_meter).round() as usize
    }

    /// Grid length in cells (rows, along the pitch length).
    pub fn grid_length(&self) -> usize {
        (self.length_m * self.cells_per_meter).round() as usize
    }
}

/// Defect generation section.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DefectConfig {
    /// Number of defect patches to inject
    #[serde(default = "default_defect_count")]
    pub count: usize,
    /// Minimum patch side length in cells
    #[serde(default = "default_defect_min_size")]
    pub min_size: usize,
    /// Maximum patch side length in cells
    #[serde(default = "default_defect_max_size")]
    pub max_size: usize,
    /// Minimum depression depth in millimeters
    #[serde(default = "default_defect_min_depth")]
    pub min_depth: f32,
    /// Maximum depression depth in millimeters
    #[serde(default = "default_defect_max_depth")]
    pub max_depth: f32,
    /// Safety margin from the grid edge in cells
    #[serde(default = "default_defect_margin")]
    pub margin: usize,
}

impl Default for DefectConfig {
    fn default() -> Self {
        Self {
            count: default_defect_count(),
            min_size: default_defect_min_size(),
            max_size: default_defect_max_size(),
            min_depth: default_defect_min_depth(),
            max_depth: default_defect_max_depth(),
            margin: default_defect_margin(),
        }
    }
}

impl DefectConfig {
    fn params(&self) -> DefectParams {
        DefectParams {
            count: self.count,
            size_range: (self.min_size, self.max_size),
            depth_range: (self.min_depth, self.max_depth),
            margin: self.margin,
        }
    }
}

/// Robot sweep and sensing section.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Sensor footprint half-size in cells
    #[serde(default = "default_footprint_half")]
    pub footprint_half: usize,
    /// Sweep row spacing in cells; must stay below the footprint diameter
    /// so adjacent rows overlap
    #[serde(default = "default_row_spacing")]
    pub row_spacing: f32,
    /// Path margin from the grid edge in cells
    #[serde(default = "default_path_margin")]
    pub path_margin: f32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            footprint_half: default_footprint_half(),
            row_spacing: default_row_spacing(),
            path_margin: default_path_margin(),
        }
    }
}

/// Energy cost section.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Energy per movement step (Joules)
    #[serde(default = "default_energy_move")]
    pub move_cost: f32,
    /// Additional energy per repair actuation (Joules)
    #[serde(default = "default_energy_repair")]
    pub repair_cost: f32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            move_cost: default_energy_move(),
            repair_cost: default_energy_repair(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Scenario name (used for output files)
    #[serde(default = "default_name")]
    pub name: String,
    /// Pitch dimensions and grid scale
    #[serde(default)]
    pub pitch: PitchConfig,
    /// Base surface noise amplitude in millimeters
    #[serde(default = "default_noise_amplitude")]
    pub noise_amplitude: f32,
    /// RNG seed; 0 uses entropy
    #[serde(default)]
    pub seed: u64,
    /// Defect generation parameters
    #[serde(default)]
    pub defects: DefectConfig,
    /// Sweep and sensing geometry
    #[serde(default)]
    pub robot: RobotConfig,
    /// Energy costs
    #[serde(default)]
    pub energy: EnergyConfig,
    /// Depth threshold in millimeters (negative); footprint minima below
    /// this are classified as defects
    #[serde(default = "default_depth_threshold")]
    pub depth_threshold: f32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            pitch: PitchConfig::default(),
            noise_amplitude: default_noise_amplitude(),
            seed: 0,
            defects: DefectConfig::default(),
            robot: RobotConfig::default(),
            energy: EnergyConfig::default(),
            depth_threshold: default_depth_threshold(),
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ScenarioConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Reject invalid configurations before any grid is built.
    ///
    /// Everything checked here is a setup-time error by design; the core
    /// loop itself has no error path.
    pub fn validate(&self) -> Result<()> {
        let width = self.pitch.grid_width();
        let length = self.pitch.grid_length();

        if width == 0 || length == 0 || self.pitch.cells_per_meter <= 0.0 {
            return Err(BhumiError::Config(format!(
                "degenerate grid {}x{} (cells_per_meter {})",
                width, length, self.pitch.cells_per_meter
            )));
        }
        if self.robot.row_spacing <= 0.0 {
            return Err(BhumiError::Config(format!(
                "row spacing must be positive, got {}",
                self.robot.row_spacing
            )));
        }
        if 2.0 * self.robot.path_margin >= length as f32 {
            return Err(BhumiError::Config(format!(
                "path margin {} leaves no sweep rows on a {}-cell pitch",
                self.robot.path_margin, length
            )));
        }
        let footprint_diameter = (2 * self.robot.footprint_half + 1) as f32;
        if self.robot.row_spacing > footprint_diameter {
            return Err(BhumiError::Config(format!(
                "row spacing {} exceeds footprint diameter {}; rows would leave gaps",
                self.robot.row_spacing, footprint_diameter
            )));
        }
        if self.depth_threshold >= 0.0 {
            return Err(BhumiError::Config(format!(
                "depth threshold must be negative, got {}",
                self.depth_threshold
            )));
        }
        if self.noise_amplitude < 0.0 {
            return Err(BhumiError::Config(format!(
                "noise amplitude must be non-negative, got {}",
                self.noise_amplitude
            )));
        }
        if -self.depth_threshold <= self.noise_amplitude {
            return Err(BhumiError::Config(format!(
                "depth threshold {} sits inside the noise floor +/-{}; every step would repair",
                self.depth_threshold, self.noise_amplitude
            )));
        }
        // Defect fitting is re-checked by the generator; surface the error
        // at validation time as well so bad configs fail before running.
        if self.defects.count > 0
            && (2 * self.defects.margin + self.defects.max_size > width
                || 2 * self.defects.margin + self.defects.max_size > length)
        {
            return Err(BhumiError::Config(format!(
                "defect size {} with margin {} cannot fit a {}x{} grid",
                self.defects.max_size, self.defects.margin, width, length
            )));
        }
        Ok(())
    }

    fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            footprint_half: self.robot.footprint_half,
            depth_threshold: self.depth_threshold,
            energy_move: self.energy.move_cost,
            energy_repair: self.energy.repair_cost,
            noise_amplitude: self.noise_amplitude,
        }
    }

    fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            row_spacing: self.robot.row_spacing,
            margin: self.robot.path_margin,
        }
    }
}

/// Load a scenario configuration from a YAML file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let contents = std::fs::read_to_string(path)?;
    ScenarioConfig::from_yaml(&contents)
}

/// Everything a completed run exposes to its consumers.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Scenario name
    pub name: String,
    /// Final surface state, for rendering as a height map
    pub grid: SurfaceGrid,
    /// Planned sweep waypoints
    pub waypoints: Vec<PitchPoint>,
    /// Interpolated path that was driven
    pub path: Vec<PitchPoint>,
    /// Per-step log
    pub log: RunLog,
    /// Final aggregates
    pub summary: RunSummary,
}

/// Build and run a scenario to completion.
///
/// Deterministic for any fixed non-zero seed: the same configuration always
/// produces the same grid, path, log, and summary.
pub fn run_scenario(config: &ScenarioConfig) -> Result<RunReport> {
    config.validate()?;

    let width = config.pitch.grid_width();
    let length = config.pitch.grid_length();
    let mut noise = NoiseGenerator::new(config.seed);

    log::info!(
        "scenario '{}': {}x{} cells, {} defects, seed {}",
        config.name,
        width,
        length,
        config.defects.count,
        config.seed
    );

    let defects = generate_defects(width, length, &config.defects.params(), &mut noise)?;
    let mut grid = SurfaceGrid::generate(
        width,
        length,
        config.noise_amplitude,
        &defects,
        &mut noise,
    );

    let waypoints = plan_sweep(width as f32, length as f32, &config.sweep_config());
    let path = interpolate(&waypoints);

    let mut coverage = CoverageTracker::new(width, length);
    let mut controller = RepairController::new(config.controller_config());
    let run_log = controller.run(&path, &mut grid, &mut coverage, &mut noise);
    let summary = controller.summarize(&run_log, &grid);

    log::info!("scenario '{}': {}", config.name, summary.summary());

    Ok(RunReport {
        name: config.name.clone(),
        grid,
        waypoints,
        path,
        log: run_log,
        summary,
    })
}

fn default_name() -> String {
    "pitch_sweep".to_string()
}

fn default_pitch_length() -> f32 {
    20.0
}

fn default_pitch_width() -> f32 {
    3.0
}

fn default_cells_per_meter() -> f32 {
    4.0
}

fn default_noise_amplitude() -> f32 {
    0.05
}

fn default_defect_count() -> usize {
    6
}

fn default_defect_min_size() -> usize {
    2
}

fn default_defect_max_size() -> usize {
    4
}

fn default_defect_min_depth() -> f32 {
    2.0
}

fn default_defect_max_depth() -> f32 {
    5.0
}

fn default_defect_margin() -> usize {
    2
}

fn default_footprint_half() -> usize {
    2
}

fn default_row_spacing() -> f32 {
    3.0
}

fn default_path_margin() -> f32 {
    2.0
}

fn default_energy_move() -> f32 {
    1.0
}

fn default_energy_repair() -> f32 {
    10.0
}

fn default_depth_threshold() -> f32 {
    -1.0
}
