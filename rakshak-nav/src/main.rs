//! RakshakNav - Pitch Sweep-and-Repair Runner
//!
//! Runs the BhumiSim simulation to completion: generates a defective pitch
//! surface, plans a boustrophedon sweep, drives the inspect-and-repair
//! controller over it, then reports the run and saves the height map and
//! per-step log.

mod config;
mod error;
mod report;

use bhumi_sim::scenario::{load_scenario, run_scenario, ScenarioConfig};
use bhumi_sim::{RunReport, SvgConfig, SvgRenderer};
use clap::Parser;
use config::{OutputConfig, RakshakConfig};
use error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Pitch sweep-and-repair simulation runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file (default: rakshak.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML scenario file; overrides the simulation sections of the config
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// RNG seed override (0 = entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip writing the SVG height map
    #[arg(long)]
    no_svg: bool,

    /// Skip writing the per-step CSV log
    #[arg(long)]
    no_csv: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rakshak_nav=info".parse().unwrap())
                .add_directive("bhumi_sim=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = if let Some(path) = &args.config {
        info!("Loading configuration from {:?}", path);
        RakshakConfig::load(path)?
    } else if Path::new("rakshak.toml").exists() {
        info!("Loading configuration from rakshak.toml");
        RakshakConfig::load(Path::new("rakshak.toml"))?
    } else {
        info!("Using default configuration");
        RakshakConfig::default()
    };

    let mut scenario: ScenarioConfig = if let Some(path) = &args.scenario {
        info!("Loading scenario from {:?}", path);
        load_scenario(path)?
    } else {
        config.scenario()
    };

    if let Some(seed) = args.seed {
        info!("Seed override: {}", seed);
        scenario.seed = seed;
    }

    info!("RakshakNav v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Pitch: {:.1}m x {:.1}m at {:.0} cells/m ({} x {} cells)",
        scenario.pitch.length_m,
        scenario.pitch.width_m,
        scenario.pitch.cells_per_meter,
        scenario.pitch.grid_width(),
        scenario.pitch.grid_length()
    );
    info!(
        "Sweep: row spacing {:.1}, margin {:.1}, footprint half-size {}",
        scenario.robot.row_spacing, scenario.robot.path_margin, scenario.robot.footprint_half
    );

    let run_report = run_scenario(&scenario)?;

    report::print_summary(&run_report);
    save_outputs(&config.output, &run_report, args.no_svg, args.no_csv)?;

    info!("RakshakNav finished");
    Ok(())
}

/// Save the height map and step log to files.
fn save_outputs(
    output: &OutputConfig,
    run_report: &RunReport,
    no_svg: bool,
    no_csv: bool,
) -> Result<()> {
    if !no_svg {
        let svg_path = Path::new(&output.svg_path);
        if let Some(parent) = svg_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let renderer = SvgRenderer::new(run_report.grid.clone(), SvgConfig::default())
            .with_title(format!("RakshakNav: {}", run_report.name))
            .with_path(run_report.path.clone())
            .with_repairs(run_report.log.repair_cells());
        renderer.save(svg_path)?;
        info!("Height map saved to {:?}", svg_path);
    }

    if !no_csv {
        let csv_path = Path::new(&output.csv_path);
        if let Some(parent) = csv_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        report::write_step_log(csv_path, &run_report.log)?;
        info!("Step log saved to {:?}", csv_path);
    }

    Ok(())
}
