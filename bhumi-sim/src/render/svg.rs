//! SVG visualization of the final surface state.
//!
//! Renders the height map as a grayscale raster (darker = deeper), with the
//! driven sweep path and repair locations overlaid. The SVG is an audit
//! artifact for a completed run; the core loop never depends on it.

use crate::core::{CellCoord, PitchPoint};
use crate::surface::SurfaceGrid;
use std::fmt::Write;
use std::path::Path;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Sweep path color
    pub path: &'static str,
    /// Repair marker color
    pub repair: &'static str,
    /// Raster border color
    pub border: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            path: "#2222AA",
            repair: "#22AA22",
            border: "#333333",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per grid cell
    pub cell_px: f32,
    /// Padding around the raster in pixels
    pub padding: f32,
    /// Sweep path line width
    pub path_width: f32,
    /// Repair marker radius
    pub marker_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_px: 8.0,
            padding: 20.0,
            path_width: 1.5,
            marker_radius: 4.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG visualization builder
pub struct SvgRenderer {
    config: SvgConfig,
    grid: SurfaceGrid,
    path: Option<Vec<PitchPoint>>,
    repairs: Vec<CellCoord>,
    title: Option<String>,
}

impl SvgRenderer {
    /// Create a renderer for a final grid state.
    pub fn new(grid: SurfaceGrid, config: SvgConfig) -> Self {
        Self {
            config,
            grid,
            path: None,
            repairs: Vec::new(),
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add the driven sweep path as a polyline
    pub fn with_path(mut self, path: Vec<PitchPoint>) -> Self {
        if !path.is_empty() {
            self.path = Some(path);
        }
        self
    }

    /// Add repair locations as markers
    pub fn with_repairs(mut self, repairs: Vec<CellCoord>) -> Self {
        self.repairs = repairs;
        self
    }

    /// Render the SVG document to a string.
    pub fn render(&self) -> String {
        let pad = self.config.padding;
        let cell = self.config.cell_px;
        let raster_w = self.grid.width() as f32 * cell;
        let raster_h = self.grid.length() as f32 * cell;
        let total_w = raster_w + 2.0 * pad;
        let total_h = raster_h + 2.0 * pad + if self.title.is_some() { 24.0 } else { 0.0 };

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            total_w, total_h, total_w, total_h
        );

        if let Some(title) = &self.title {
            let _ = writeln!(
                svg,
                r#"  <text x="{:.0}" y="16" font-family="sans-serif" font-size="14">{}</text>"#,
                pad, title
            );
        }
        let y_off = pad + if self.title.is_some() { 24.0 } else { 0.0 };

        self.render_raster(&mut svg, pad, y_off);
        self.render_path(&mut svg, pad, y_off);
        self.render_repairs(&mut svg, pad, y_off);

        let _ = writeln!(
            svg,
            r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="{}" stroke-width="1"/>"#,
            pad, y_off, raster_w, raster_h, self.config.colors.border
        );
        svg.push_str("</svg>\n");
        svg
    }

    /// Render and save to a file.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }

    fn render_raster(&self, svg: &mut String, x_off: f32, y_off: f32) {
        let cell = self.config.cell_px;
        let (lo, hi) = height_range(&self.grid);
        let span = (hi - lo).max(1e-6);

        for y in 0..self.grid.length() {
            for x in 0..self.grid.width() {
                let v = self.grid.get(x, y).unwrap_or(0.0);
                // Darker = deeper
                let shade = (((v - lo) / span) * 255.0).clamp(0.0, 255.0) as u8;
                let _ = writeln!(
                    svg,
                    r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="rgb({s},{s},{s})"/>"#,
                    x_off + x as f32 * cell,
                    y_off + y as f32 * cell,
                    cell,
                    cell,
                    s = shade
                );
            }
        }
    }

    fn render_path(&self, svg: &mut String, x_off: f32, y_off: f32) {
        let Some(path) = &self.path else {
            return;
        };
        let cell = self.config.cell_px;
        let mut points = String::new();
        for p in path {
            let _ = write!(
                points,
                "{:.1},{:.1} ",
                x_off + (p.x + 0.5) * cell,
                y_off + (p.y + 0.5) * cell
            );
        }
        let _ = writeln!(
            svg,
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-opacity="0.6"/>"#,
            points.trim_end(),
            self.config.colors.path,
            self.config.path_width
        );
    }

    fn render_repairs(&self, svg: &mut String, x_off: f32, y_off: f32) {
        let cell = self.config.cell_px;
        for r in &self.repairs {
            let _ = writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
                x_off + (r.x as f32 + 0.5) * cell,
                y_off + (r.y as f32 + 0.5) * cell,
                self.config.marker_radius,
                self.config.colors.repair
            );
        }
    }
}

/// Min and max height over the grid.
fn height_range(grid: &SurfaceGrid) -> (f32, f32) {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for &v in grid.heights() {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    if lo > hi {
        (0.0, 0.0)
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::NoiseGenerator;

    #[test]
    fn test_render_contains_raster_and_overlays() {
        let mut noise = NoiseGenerator::new(42);
        let grid = SurfaceGrid::generate(8, 8, 0.05, &[], &mut noise);

        let svg = SvgRenderer::new(grid, SvgConfig::default())
            .with_title("test run")
            .with_path(vec![PitchPoint::new(1.0, 1.0), PitchPoint::new(6.0, 1.0)])
            .with_repairs(vec![CellCoord::new(3, 3)])
            .render();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("test run"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("<circle"));
        // One rect per cell plus the border
        assert_eq!(svg.matches("<rect").count(), 8 * 8 + 1);
    }

    #[test]
    fn test_flat_grid_renders_without_nan() {
        let grid = SurfaceGrid::flat(4, 4);
        let svg = SvgRenderer::new(grid, SvgConfig::default()).render();
        assert!(!svg.contains("NaN"));
    }
}
