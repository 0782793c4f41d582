//! # Bhumi-Sim: Pitch Sweep-and-Repair Simulation
//!
//! Simulates an autonomous ground agent sweeping a rectangular cricket
//! pitch, detecting localized depth defects through a downward sensor
//! footprint, and actuating a repair mechanism where a defect is found.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bhumi_sim::scenario::{run_scenario, ScenarioConfig};
//!
//! let mut config = ScenarioConfig::default();
//! config.seed = 42;
//!
//! let report = run_scenario(&config).expect("valid scenario");
//! println!("{}", report.summary.summary());
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types (PitchPoint, CellCoord)
//! - [`surface`]: Height-map storage, noise model, defect injection
//! - [`planner`]: Boustrophedon sweep planning and path interpolation
//! - [`coverage`]: Append-only coverage mask over grid cells
//! - [`controller`]: Inspect-and-repair decision loop and run log
//! - [`metrics`]: Roughness statistics and run aggregates
//! - [`scenario`]: YAML scenario configs and the end-to-end harness
//! - [`render`]: SVG rendering of the final surface state
//!
//! ## Data Flow
//!
//! ```text
//!   ┌──────────────┐      ┌───────────────┐
//!   │ SweepPlanner │      │  SurfaceGrid  │◄── noise + defects
//!   │ (waypoints + │      │ (height map)  │
//!   │  interpolate)│      └───────┬───────┘
//!   └──────┬───────┘              │ footprint read
//!          │ path samples         ▼
//!          │            ┌──────────────────┐
//!          └───────────►│ RepairController │──► flatten on detection
//!                       │  (per-step loop) │
//!                       └────────┬─────────┘
//!                  marks │       │ recompute
//!                        ▼       ▼
//!              ┌──────────────┐ ┌──────────────┐
//!              │  Coverage    │ │   Metrics    │
//!              │  Tracker     │ │ (RMS, |mean|)│
//!              └──────────────┘ └──────┬───────┘
//!                                      ▼
//!                              per-step RunLog + RunSummary
//! ```
//!
//! Control flow is a single sequential loop over path samples; the grid and
//! the logs are owned by the run loop and mutated nowhere else.

pub mod controller;
pub mod core;
pub mod coverage;
pub mod error;
pub mod metrics;
pub mod planner;
pub mod render;
pub mod scenario;
pub mod surface;

// Re-export main types at crate root
pub use controller::{AgentState, ControllerConfig, RepairController, RunLog, StepRecord};
pub use self::core::{CellCoord, PitchPoint};
pub use coverage::CoverageTracker;
pub use error::{BhumiError, Result};
pub use metrics::{
    duty_cycle, mean_absolute_roughness, rms_over, rms_roughness, RoughnessSample, RunSummary,
};
pub use planner::{interpolate, plan_sweep, SweepConfig};
pub use render::{SvgConfig, SvgRenderer};
pub use scenario::{load_scenario, run_scenario, RunReport, ScenarioConfig};
pub use surface::{
    generate_defects, DefectParams, DefectPatch, Footprint, NoiseGenerator, SurfaceGrid,
};
