//! Inspect-and-repair controller.
//!
//! Drives the agent along the interpolated sweep path one sample at a time.
//! At each sample the controller clamps the position, marks coverage, reads
//! the sensor footprint, and applies the depth-threshold decision rule: a
//! minimum depth below the threshold classifies the footprint as a defect
//! and triggers a repair actuation (flatten with baseline noise) in the same
//! step. Natural surface noise is zero-mean and small, while defects carry
//! materially larger negative offsets, so the one-sided minimum-depth rule
//! separates the two as long as the threshold sits below the noise floor.
//!
//! The controller owns the run state exclusively; the grid and the coverage
//! mask are mutated only from inside this loop.

use crate::core::{CellCoord, PitchPoint};
use crate::coverage::CoverageTracker;
use crate::metrics::{duty_cycle, RoughnessSample, RunSummary};
use crate::surface::{NoiseGenerator, SurfaceGrid};
use serde::{Deserialize, Serialize};

/// Per-step agent state.
///
/// `Repairing` is transient: the decision is made and the actuation applied
/// within a single step, after which the agent is back to `Moving`. It is
/// recorded per step rather than persisted as a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentState {
    /// Sweeping along the path, no defect under the sensor.
    Moving,
    /// Defect detected this step; repair actuation applied.
    Repairing,
}

impl AgentState {
    /// Get a short description of the state.
    pub fn name(&self) -> &'static str {
        match self {
            AgentState::Moving => "Moving",
            AgentState::Repairing => "Repairing",
        }
    }
}

/// Controller tuning.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Sensor footprint half-size in cells (footprint is `2*half + 1` wide)
    pub footprint_half: usize,
    /// Depth threshold in millimeters; footprint minima below this value
    /// are classified as defects. Always negative.
    pub depth_threshold: f32,
    /// Energy cost of one movement step (Joules)
    pub energy_move: f32,
    /// Additional energy cost of one repair actuation (Joules)
    pub energy_repair: f32,
    /// Baseline noise amplitude restored by a repair (mm)
    pub noise_amplitude: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            footprint_half: 2,
            depth_threshold: -1.0,
            energy_move: 1.0,
            energy_repair: 10.0,
            noise_amplitude: 0.05,
        }
    }
}

/// Record of a single processed path sample.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step index (position in the path)
    pub step: usize,
    /// Ideal path sample position
    pub position: PitchPoint,
    /// Achievable (rounded and clamped) grid cell the agent actually occupied
    pub cell: CellCoord,
    /// Whether a repair was actuated this step
    pub repaired: bool,
    /// Minimum footprint depth observed before any repair (mm)
    pub min_depth: f32,
    /// Cumulative energy after this step (Joules)
    pub energy_total: f32,
    /// Coverage percentage after this step
    pub coverage_percent: f32,
    /// Whole-grid roughness after this step
    pub roughness: RoughnessSample,
}

/// Ordered per-step log of a run; grows by exactly one record per sample.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunLog {
    /// One record per processed path sample, in path order
    pub steps: Vec<StepRecord>,
}

impl RunLog {
    /// Number of processed samples.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether any samples were processed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Cells where a repair was actuated, in step order.
    pub fn repair_cells(&self) -> Vec<CellCoord> {
        self.steps
            .iter()
            .filter(|s| s.repaired)
            .map(|s| s.cell)
            .collect()
    }
}

/// The inspect-and-repair controller.
pub struct RepairController {
    config: ControllerConfig,
    state: AgentState,
    energy_total: f32,
    repair_events: usize,
}

impl RepairController {
    /// Create a controller with the given tuning.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: AgentState::Moving,
            energy_total: 0.0,
            repair_events: 0,
        }
    }

    /// Current per-step state.
    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Cumulative energy spent so far (Joules).
    #[inline]
    pub fn energy_total(&self) -> f32 {
        self.energy_total
    }

    /// Repair actuations so far.
    #[inline]
    pub fn repair_events(&self) -> usize {
        self.repair_events
    }

    /// Process one path sample.
    ///
    /// Out-of-range sample positions are defensively clamped, never
    /// rejected; the controller is total over any finite path.
    pub fn step(
        &mut self,
        step_index: usize,
        sample: PitchPoint,
        grid: &mut SurfaceGrid,
        coverage: &mut CoverageTracker,
        noise: &mut NoiseGenerator,
    ) -> StepRecord {
        let cell = grid.clamp_center(sample, self.config.footprint_half);
        let fp = grid.footprint(cell, self.config.footprint_half);

        coverage.mark(&fp);

        let min_depth = grid.min_depth(&fp);
        let mut cost = self.config.energy_move;

        self.state = if min_depth < self.config.depth_threshold {
            grid.flatten(&fp, self.config.noise_amplitude, noise);
            self.repair_events += 1;
            cost += self.config.energy_repair;
            log::debug!(
                "repair at ({}, {}): min depth {:.2} mm below threshold {:.2} mm",
                cell.x,
                cell.y,
                min_depth,
                self.config.depth_threshold
            );
            AgentState::Repairing
        } else {
            AgentState::Moving
        };

        self.energy_total += cost;

        StepRecord {
            step: step_index,
            position: sample,
            cell,
            repaired: self.state == AgentState::Repairing,
            min_depth,
            energy_total: self.energy_total,
            coverage_percent: coverage.percent(),
            roughness: RoughnessSample::compute(grid),
        }
    }

    /// Run the full path to completion and return the per-step log.
    ///
    /// The path is finite and consumed exactly once; there is no abort path
    /// out of the loop.
    pub fn run(
        &mut self,
        path: &[PitchPoint],
        grid: &mut SurfaceGrid,
        coverage: &mut CoverageTracker,
        noise: &mut NoiseGenerator,
    ) -> RunLog {
        let mut log = RunLog::default();
        log.steps.reserve(path.len());

        for (i, &sample) in path.iter().enumerate() {
            log.steps.push(self.step(i, sample, grid, coverage, noise));
        }

        log::info!(
            "run complete: {} steps, {} repairs, {:.1} J",
            log.len(),
            self.repair_events,
            self.energy_total
        );
        log
    }

    /// Final aggregates for a completed log.
    pub fn summarize(&self, log: &RunLog, grid: &SurfaceGrid) -> RunSummary {
        RunSummary {
            steps: log.len(),
            total_energy: self.energy_total,
            repair_events: self.repair_events,
            duty_cycle: duty_cycle(self.repair_events, log.len()),
            final_roughness: RoughnessSample::compute(grid),
            coverage_percent: log.steps.last().map(|s| s.coverage_percent).unwrap_or(0.0),
        }
    }
}
