//! Pitch surface model: height-map storage, noise, and defect injection.

mod defect;
mod noise;
mod storage;

pub use defect::{generate_defects, DefectParams, DefectPatch};
pub use noise::NoiseGenerator;
pub use storage::{Footprint, SurfaceGrid};
