//! Defect patches and randomized defect generation.
//!
//! A defect is a rectangular depression subtracted from the surface during
//! generation. Patches are ephemeral setup data; once the grid is built they
//! are not retained.

use super::noise::NoiseGenerator;
use crate::error::{BhumiError, Result};

/// A rectangular depression applied during surface generation.
///
/// Position and size are in cells; `depth` is the depression magnitude in
/// millimeters (positive value, subtracted from the surface).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefectPatch {
    /// First column of the patch
    pub x: usize,
    /// First row of the patch
    pub y: usize,
    /// Patch width in cells
    pub width: usize,
    /// Patch height in cells
    pub height: usize,
    /// Depression depth in millimeters (positive magnitude)
    pub depth: f32,
}

/// Parameters for randomized defect placement.
#[derive(Clone, Copy, Debug)]
pub struct DefectParams {
    /// Number of patches to generate
    pub count: usize,
    /// Patch side length range in cells (inclusive)
    pub size_range: (usize, usize),
    /// Depression depth range in millimeters, positive magnitudes (inclusive)
    pub depth_range: (f32, f32),
    /// Safety margin from the grid edge in cells
    pub margin: usize,
}

/// Generate randomly placed defect patches, each fully inside the grid
/// with the configured safety margin.
///
/// Placement that cannot fit is a configuration error and is rejected here,
/// before the grid is built; the core loop never sees invalid patches.
pub fn generate_defects(
    width: usize,
    length: usize,
    params: &DefectParams,
    noise: &mut NoiseGenerator,
) -> Result<Vec<DefectPatch>> {
    let (min_size, max_size) = params.size_range;
    if min_size == 0 || min_size > max_size {
        return Err(BhumiError::Config(format!(
            "invalid defect size range: {}..={}",
            min_size, max_size
        )));
    }
    if params.depth_range.0 < 0.0 || params.depth_range.0 > params.depth_range.1 {
        return Err(BhumiError::Config(format!(
            "invalid defect depth range: {}..={}",
            params.depth_range.0, params.depth_range.1
        )));
    }
    if 2 * params.margin + max_size > width || 2 * params.margin + max_size > length {
        return Err(BhumiError::Config(format!(
            "defect of size {} with margin {} cannot fit a {}x{} grid",
            max_size, params.margin, width, length
        )));
    }

    let mut patches = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let w = noise.uniform_usize(min_size, max_size);
        let h = noise.uniform_usize(min_size, max_size);
        let x = noise.uniform_usize(params.margin, width - params.margin - w);
        let y = noise.uniform_usize(params.margin, length - params.margin - h);
        let depth = noise.uniform_range(params.depth_range.0, params.depth_range.1);
        patches.push(DefectPatch {
            x,
            y,
            width: w,
            height: h,
            depth,
        });
    }

    log::debug!(
        "generated {} defect patches ({}x{} grid, margin {})",
        patches.len(),
        width,
        length,
        params.margin
    );
    Ok(patches)
}
