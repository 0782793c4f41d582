//! Fundamental types shared across the simulator.

mod point;

pub use point::{CellCoord, PitchPoint};
