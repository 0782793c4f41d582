//! Rendering of run results for external consumers.

mod svg;

pub use svg::{SvgColorScheme, SvgConfig, SvgRenderer};
