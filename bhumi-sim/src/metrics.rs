//! Surface roughness statistics and run aggregates.
//!
//! Roughness is recomputed fresh from the full surface state at every step
//! rather than maintained incrementally, so the per-step log can never drift
//! from the grid it describes. Both statistics are pure functions of the
//! current grid.

use crate::surface::{Footprint, SurfaceGrid};
use serde::{Deserialize, Serialize};

/// Mean of absolute height values over the whole grid, in millimeters.
pub fn mean_absolute_roughness(grid: &SurfaceGrid) -> f32 {
    let heights = grid.heights();
    if heights.is_empty() {
        return 0.0;
    }
    let sum: f32 = heights.iter().map(|v| v.abs()).sum();
    sum / heights.len() as f32
}

/// Root-mean-square of height values over the whole grid, in millimeters.
pub fn rms_roughness(grid: &SurfaceGrid) -> f32 {
    let heights = grid.heights();
    if heights.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = heights.iter().map(|v| v * v).sum();
    (sum_sq / heights.len() as f32).sqrt()
}

/// Root-mean-square of height values inside a footprint.
pub fn rms_over(grid: &SurfaceGrid, fp: &Footprint) -> f32 {
    let mut sum_sq = 0.0f32;
    for y in fp.y_min..=fp.y_max {
        for x in fp.x_min..=fp.x_max {
            if let Some(v) = grid.get(x, y) {
                sum_sq += v * v;
            }
        }
    }
    (sum_sq / fp.cell_count() as f32).sqrt()
}

/// Roughness snapshot taken after a step.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct RoughnessSample {
    /// Mean absolute deviation (mm)
    pub mean_abs: f32,
    /// Root mean square (mm)
    pub rms: f32,
}

impl RoughnessSample {
    /// Compute both statistics from the current grid state.
    pub fn compute(grid: &SurfaceGrid) -> Self {
        Self {
            mean_abs: mean_absolute_roughness(grid),
            rms: rms_roughness(grid),
        }
    }
}

/// Final aggregates of a completed run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total path samples processed
    pub steps: usize,
    /// Cumulative energy spent (Joules)
    pub total_energy: f32,
    /// Number of repair actuations
    pub repair_events: usize,
    /// Repair duty cycle: repairs / steps * 100, in [0, 100]
    pub duty_cycle: f32,
    /// Whole-grid roughness after the last step
    pub final_roughness: RoughnessSample,
    /// Coverage percentage after the last step
    pub coverage_percent: f32,
}

impl RunSummary {
    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{} steps, {:.1} J, {} repairs (duty {:.1}%), final RMS {:.3} mm, coverage {:.1}%",
            self.steps,
            self.total_energy,
            self.repair_events,
            self.duty_cycle,
            self.final_roughness.rms,
            self.coverage_percent
        )
    }
}

/// Duty cycle in percent from raw counters.
pub fn duty_cycle(repair_events: usize, total_steps: usize) -> f32 {
    if total_steps == 0 {
        return 0.0;
    }
    repair_events as f32 / total_steps as f32 * 100.0
}
