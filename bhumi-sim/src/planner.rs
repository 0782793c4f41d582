//! Coverage path planning for the pitch sweep.
//!
//! Generates a boustrophedon (back-and-forth) sweep over the grid and
//! interpolates it into unit-resolution path samples. Row spacing must be
//! chosen smaller than the sensor footprint diameter so adjacent sweep rows
//! overlap; the overlap is what guarantees a defect narrower than the
//! footprint cannot hide between rows.

use crate::core::PitchPoint;
use serde::{Deserialize, Serialize};

/// Sweep geometry, in cell units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Distance between adjacent sweep rows.
    ///
    /// Must be below the sensor footprint diameter (`2 * half + 1`); the
    /// difference is the overlap margin between rows.
    pub row_spacing: f32,
    /// Margin kept from every grid edge.
    pub margin: f32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            row_spacing: 3.0,
            margin: 2.0,
        }
    }
}

/// Generate boustrophedon sweep waypoints for a `width x length` grid.
///
/// Rows run at `y = margin, margin + spacing, ...` up to `length - margin`;
/// even rows go left to right, odd rows right to left, so consecutive rows
/// connect without a long transit. When the spacing does not evenly divide
/// the sweep span the final row lands at an irregular position short of
/// `length - margin`; the remaining gap is always less than one spacing.
pub fn plan_sweep(width: f32, length: f32, config: &SweepConfig) -> Vec<PitchPoint> {
    let mut waypoints = Vec::new();
    let x_left = config.margin;
    let x_right = width - config.margin;
    let y_max = length - config.margin;

    if x_right < x_left || y_max < config.margin || config.row_spacing <= 0.0 {
        return waypoints;
    }

    let mut y = config.margin;
    let mut row = 0usize;
    while y <= y_max + 1e-4 {
        if row % 2 == 0 {
            waypoints.push(PitchPoint::new(x_left, y));
            waypoints.push(PitchPoint::new(x_right, y));
        } else {
            waypoints.push(PitchPoint::new(x_right, y));
            waypoints.push(PitchPoint::new(x_left, y));
        }
        y += config.row_spacing;
        row += 1;
    }

    log::debug!(
        "planned sweep: {} rows, {} waypoints ({}x{} grid, spacing {}, margin {})",
        row,
        waypoints.len(),
        width,
        length,
        config.row_spacing,
        config.margin
    );
    waypoints
}

/// Interpolate waypoints into unit-resolution path samples.
///
/// Each consecutive pair contributes `round(distance)` samples (minimum 1)
/// by linear interpolation, so no two consecutive samples are more than one
/// cell apart. Duplicate waypoints degrade to a single sample rather than
/// dividing by zero. The final waypoint is appended so the path actually
/// reaches its last corner.
pub fn interpolate(waypoints: &[PitchPoint]) -> Vec<PitchPoint> {
    let mut samples = Vec::new();
    for pair in waypoints.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let steps = (a.distance(&b).round() as usize).max(1);
        for i in 0..steps {
            samples.push(a.lerp(&b, i as f32 / steps as f32));
        }
    }
    if let Some(last) = waypoints.last() {
        samples.push(*last);
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_alternate_direction() {
        let config = SweepConfig {
            row_spacing: 4.0,
            margin: 2.0,
        };
        let wps = plan_sweep(20.0, 20.0, &config);

        // Rows at y = 2, 6, 10, 14, 18 -> 5 rows, 2 waypoints each
        assert_eq!(wps.len(), 10);
        // Row 0: left to right
        assert_eq!(wps[0], PitchPoint::new(2.0, 2.0));
        assert_eq!(wps[1], PitchPoint::new(18.0, 2.0));
        // Row 1: right to left
        assert_eq!(wps[2], PitchPoint::new(18.0, 6.0));
        assert_eq!(wps[3], PitchPoint::new(2.0, 6.0));
    }

    #[test]
    fn test_rows_respect_margin() {
        let config = SweepConfig {
            row_spacing: 3.0,
            margin: 2.0,
        };
        let wps = plan_sweep(12.0, 40.0, &config);
        for wp in &wps {
            assert!(wp.x >= 2.0 && wp.x <= 10.0);
            assert!(wp.y >= 2.0 && wp.y <= 38.0);
        }
    }

    #[test]
    fn test_irregular_last_row() {
        // Span is 40 - 2*2 = 36, spacing 5 -> rows at 2,7,...,37; last row 37
        // with 38 - 37 = 1 cell of slack, less than one spacing.
        let config = SweepConfig {
            row_spacing: 5.0,
            margin: 2.0,
        };
        let wps = plan_sweep(12.0, 40.0, &config);
        let last_y = wps.last().unwrap().y;
        assert!(last_y <= 38.0);
        assert!(38.0 - last_y < 5.0);
    }

    #[test]
    fn test_degenerate_span_yields_empty_plan() {
        let config = SweepConfig {
            row_spacing: 3.0,
            margin: 6.0,
        };
        // 2 * margin > length: no achievable rows
        let wps = plan_sweep(10.0, 10.0, &config);
        assert!(wps.is_empty());
        assert!(interpolate(&wps).is_empty());
    }

    #[test]
    fn test_interpolation_unit_spacing() {
        let wps = vec![
            PitchPoint::new(2.0, 2.0),
            PitchPoint::new(18.0, 2.0),
            PitchPoint::new(18.0, 5.0),
            PitchPoint::new(2.0, 5.0),
        ];
        let path = interpolate(&wps);
        for pair in path.windows(2) {
            assert!(
                pair[0].distance(&pair[1]) <= 1.0 + 1e-4,
                "gap {} between {:?} and {:?}",
                pair[0].distance(&pair[1]),
                pair[0],
                pair[1]
            );
        }
        // Path ends at the final waypoint
        assert_eq!(*path.last().unwrap(), PitchPoint::new(2.0, 5.0));
    }

    #[test]
    fn test_interpolation_sample_counts() {
        let wps = vec![PitchPoint::new(0.0, 0.0), PitchPoint::new(10.0, 0.0)];
        // round(10) = 10 samples for the pair, plus the appended endpoint
        let path = interpolate(&wps);
        assert_eq!(path.len(), 11);
        assert_eq!(path[0], PitchPoint::new(0.0, 0.0));
        assert_eq!(path[10], PitchPoint::new(10.0, 0.0));
    }

    #[test]
    fn test_duplicate_waypoints_emit_single_sample() {
        let wps = vec![PitchPoint::new(3.0, 3.0), PitchPoint::new(3.0, 3.0)];
        let path = interpolate(&wps);
        // One sample for the zero-distance pair, plus the appended endpoint
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], path[1]);
    }
}
