//! Configuration loading for RakshakNav

use crate::error::Result;
use bhumi_sim::scenario::{DefectConfig, EnergyConfig, PitchConfig, RobotConfig, ScenarioConfig};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RakshakConfig {
    #[serde(default)]
    pub pitch: PitchConfig,
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub energy: EnergyConfig,
    #[serde(default)]
    pub defects: DefectConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Simulation parameters not tied to a physical section
#[derive(Clone, Debug, Deserialize)]
pub struct SimulationConfig {
    /// Run name (used in report headers and output files)
    #[serde(default = "default_run_name")]
    pub name: String,

    /// RNG seed; 0 uses entropy (default: 0)
    #[serde(default)]
    pub seed: u64,

    /// Base surface noise amplitude in millimeters (default: 0.05)
    #[serde(default = "default_noise_amplitude")]
    pub noise_amplitude: f32,

    /// Defect classification threshold in millimeters (default: -1.0)
    #[serde(default = "default_depth_threshold")]
    pub depth_threshold: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            name: default_run_name(),
            seed: 0,
            noise_amplitude: default_noise_amplitude(),
            depth_threshold: default_depth_threshold(),
        }
    }
}

/// Output configuration
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Path to save the SVG height map
    #[serde(default = "default_svg_path")]
    pub svg_path: String,

    /// Path to save the per-step CSV log
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg_path: default_svg_path(),
            csv_path: default_csv_path(),
        }
    }
}

impl RakshakConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: RakshakConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Assemble the scenario the simulation core consumes.
    pub fn scenario(&self) -> ScenarioConfig {
        ScenarioConfig {
            name: self.simulation.name.clone(),
            pitch: self.pitch,
            noise_amplitude: self.simulation.noise_amplitude,
            seed: self.simulation.seed,
            defects: self.defects,
            robot: self.robot,
            energy: self.energy,
            depth_threshold: self.simulation.depth_threshold,
        }
    }
}

fn default_run_name() -> String {
    "pitch_sweep".to_string()
}

fn default_noise_amplitude() -> f32 {
    0.05
}

fn default_depth_threshold() -> f32 {
    -1.0
}

fn default_svg_path() -> String {
    "output/pitch.svg".to_string()
}

fn default_csv_path() -> String {
    "output/steps.csv".to_string()
}
