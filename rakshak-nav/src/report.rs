//! End-of-run reporting: summary table and per-step CSV log.

use bhumi_sim::{RunLog, RunReport};
use std::io::Write;
use std::path::Path;

/// Print a formatted run summary.
pub fn print_summary(report: &RunReport) {
    let summary = &report.summary;

    println!("\n=== Run Summary: {} ===", report.name);
    println!("{:<24} | {:>12}", "Metric", "Value");
    println!("{}", "-".repeat(39));
    println!("{:<24} | {:>12}", "Steps", summary.steps);
    println!("{:<24} | {:>12}", "Waypoints", report.waypoints.len());
    println!(
        "{:<24} | {:>12}",
        "Total energy",
        format!("{:.1} J", summary.total_energy)
    );
    println!("{:<24} | {:>12}", "Repair events", summary.repair_events);
    println!(
        "{:<24} | {:>12}",
        "Duty cycle",
        format!("{:.2} %", summary.duty_cycle)
    );
    println!(
        "{:<24} | {:>12}",
        "Final RMS",
        format!("{:.3} mm", summary.final_roughness.rms)
    );
    println!(
        "{:<24} | {:>12}",
        "Final mean |dev|",
        format!("{:.3} mm", summary.final_roughness.mean_abs)
    );
    println!(
        "{:<24} | {:>12}",
        "Coverage",
        format!("{:.1} %", summary.coverage_percent)
    );
    println!("{}", "-".repeat(39));
}

/// Write the per-step log as CSV.
pub fn write_step_log(path: &Path, log: &RunLog) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(
        file,
        "step,x,y,repaired,min_depth_mm,energy_j,rms_mm,mean_abs_mm,coverage_pct"
    )?;
    for record in &log.steps {
        writeln!(
            file,
            "{},{:.2},{:.2},{},{:.4},{:.2},{:.4},{:.4},{:.2}",
            record.step,
            record.position.x,
            record.position.y,
            record.repaired as u8,
            record.min_depth,
            record.energy_total,
            record.roughness.rms,
            record.roughness.mean_abs,
            record.coverage_percent
        )?;
    }
    Ok(())
}
