//! End-to-end property tests for the sweep-and-repair loop.
//!
//! These exercise the planner, controller, coverage tracker, and metrics
//! together over full runs and check the invariants the simulation
//! guarantees to its consumers.

mod common;

use bhumi_sim::scenario::run_scenario;
use bhumi_sim::{
    interpolate, plan_sweep, rms_over, CellCoord, CoverageTracker, NoiseGenerator, PitchPoint,
    RepairController, SweepConfig,
};

/// Noise-floor RMS bound for a repaired footprint (mm).
const REPAIRED_RMS_BOUND: f32 = 0.1;

#[test]
fn test_coverage_is_monotone_over_run() {
    let report = run_scenario(&common::small_scenario(42)).unwrap();

    let mut last = 0.0f32;
    for record in &report.log.steps {
        assert!(
            record.coverage_percent >= last,
            "coverage dropped from {} to {} at step {}",
            last,
            record.coverage_percent,
            record.step
        );
        last = record.coverage_percent;
    }
    assert!(last > 0.0);
}

#[test]
fn test_energy_identity() {
    let report = run_scenario(&common::small_scenario(42)).unwrap();
    let summary = &report.summary;

    let moves = summary.steps - summary.repair_events;
    let expected = moves as f32 * 1.0 + summary.repair_events as f32 * (1.0 + 10.0);
    assert!(
        (summary.total_energy - expected).abs() < 1e-3,
        "energy {} does not match identity {}",
        summary.total_energy,
        expected
    );

    // Cumulative energy never decreases
    for pair in report.log.steps.windows(2) {
        assert!(pair[1].energy_total >= pair[0].energy_total);
    }
}

#[test]
fn test_duty_cycle_exact_and_bounded() {
    let report = run_scenario(&common::small_scenario(7)).unwrap();
    let summary = &report.summary;

    assert!(summary.duty_cycle >= 0.0 && summary.duty_cycle <= 100.0);
    let expected = summary.repair_events as f32 / summary.steps as f32 * 100.0;
    assert!((summary.duty_cycle - expected).abs() < 1e-6);
}

#[test]
fn test_interpolated_path_spacing() {
    let config = SweepConfig {
        row_spacing: 3.0,
        margin: 2.0,
    };
    let waypoints = plan_sweep(12.0, 20.0, &config);
    let path = interpolate(&waypoints);

    assert!(!path.is_empty());
    for pair in path.windows(2) {
        let gap = pair[0].distance(&pair[1]);
        assert!(gap <= 1.0 + 1e-4, "gap {} exceeds unit spacing", gap);
    }
}

#[test]
fn test_sweep_pass_repairs_single_defect() {
    // 20x8 grid, one -3mm defect inside a single footprint, threshold -1mm.
    let mut noise = NoiseGenerator::new(42);
    let mut grid = common::single_defect_grid(3.0, &mut noise);
    let mut coverage = CoverageTracker::new(grid.width(), grid.length());
    let mut controller = RepairController::new(common::default_controller());

    let defect_fp = grid.footprint(CellCoord::new(9, 4), 2);
    assert!(grid.min_depth(&defect_fp) < -1.0);

    let waypoints = plan_sweep(
        grid.width() as f32,
        grid.length() as f32,
        &SweepConfig {
            row_spacing: 3.0,
            margin: 2.0,
        },
    );
    let path = interpolate(&waypoints);
    let log = controller.run(&path, &mut grid, &mut coverage, &mut noise);

    assert!(controller.repair_events() >= 1);
    assert!(log.repair_cells().len() == controller.repair_events());

    // The repaired footprint is back at baseline roughness
    assert!(
        rms_over(&grid, &defect_fp) < REPAIRED_RMS_BOUND,
        "footprint RMS {} still above noise floor",
        rms_over(&grid, &defect_fp)
    );
    assert!(grid.min_depth(&defect_fp) >= -common::NOISE_AMPLITUDE);
}

#[test]
fn test_zero_defects_means_zero_repairs() {
    let mut config = common::small_scenario(42);
    config.defects.count = 0;

    let report = run_scenario(&config).unwrap();
    assert_eq!(report.summary.repair_events, 0);
    assert_eq!(report.summary.duty_cycle, 0.0);
    assert!(report.log.steps.iter().all(|s| !s.repaired));
}

#[test]
fn test_overlapping_sweep_reaches_full_coverage() {
    // Footprint half-size 2 (diameter 5) against row spacing 3: every cell
    // of the 12x20 grid falls inside at least one footprint.
    let report = run_scenario(&common::small_scenario(42)).unwrap();
    assert!(
        report.summary.coverage_percent >= 100.0 - 1e-3,
        "coverage only reached {}%",
        report.summary.coverage_percent
    );
}

#[test]
fn test_corner_footprint_is_clamped_and_nonempty() {
    let mut noise = NoiseGenerator::new(42);
    let grid = common::single_defect_grid(3.0, &mut noise);

    let center = grid.clamp_center(PitchPoint::new(0.0, 0.0), 2);
    let fp = grid.footprint(center, 2);

    assert!(fp.cell_count() > 0);
    assert!(fp.x_max < grid.width());
    assert!(fp.y_max < grid.length());
    // Clamped center keeps the full footprint inside the grid
    assert_eq!(fp.cell_count(), 25);
}

#[test]
fn test_roughness_improves_on_defective_pitch() {
    use bhumi_sim::{rms_roughness, DefectPatch, SurfaceGrid};

    let mut noise = NoiseGenerator::new(42);
    let defect = DefectPatch {
        x: 7,
        y: 14,
        width: 3,
        height: 3,
        depth: 4.0,
    };
    let mut grid = SurfaceGrid::generate(12, 20, common::NOISE_AMPLITUDE, &[defect], &mut noise);
    let initial_rms = rms_roughness(&grid);

    let mut coverage = CoverageTracker::new(12, 20);
    let mut controller = RepairController::new(common::default_controller());
    let waypoints = plan_sweep(
        12.0,
        20.0,
        &SweepConfig {
            row_spacing: 3.0,
            margin: 2.0,
        },
    );
    let path = interpolate(&waypoints);
    controller.run(&path, &mut grid, &mut coverage, &mut noise);

    assert!(controller.repair_events() >= 1);
    let final_rms = rms_roughness(&grid);
    assert!(
        final_rms < initial_rms,
        "RMS did not improve: {} -> {}",
        initial_rms,
        final_rms
    );
}
