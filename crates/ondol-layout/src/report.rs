//! Structured layout report.
//!
//! The numbers an installer works from: grid line counts, floor
//! coverage, pipe totals, and path endpoints. Computed once beside the
//! layout so rendering to text or JSON never re-runs any geometry.

use serde::{Deserialize, Serialize};

use crate::metrics::{self, Coverage};
use crate::path::synthesize_path;
use crate::types::{LayoutConfig, LayoutError, PipeLayout, Point};

/// Report for a synthesized layout.
///
/// Serializable for machine consumption; [`LayoutReport::report`]
/// renders the human-readable text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Grid line counts and spacing.
    pub grid: GridReport,
    /// Floor coverage of the heated band.
    pub coverage: Coverage,
    /// Pipe totals.
    pub pipe: PipeReport,
    /// Path endpoints and extents.
    pub path: PathReport,
}

/// Grid section of the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridReport {
    /// Number of vertical lines the pipe runs along.
    pub vertical_lines: usize,
    /// Number of horizontal lines the pipe turns on.
    pub horizontal_lines: usize,
    /// Center-to-center pipe spacing in meters.
    pub spacing: f64,
}

/// Pipe section of the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeReport {
    /// Total pipe length in meters.
    pub total_length: f64,
    /// Pipe length per square meter of room floor.
    pub length_per_sqm: f64,
}

/// Path section of the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathReport {
    /// Number of coordinate points in the deduplicated run.
    pub point_count: usize,
    /// First point of the run (supply end).
    pub start: Point,
    /// Last point of the run (return end).
    pub end: Point,
    /// Smallest and largest x the grid reaches.
    pub x_range: (f64, f64),
    /// Smallest and largest y the grid reaches.
    pub y_range: (f64, f64),
}

impl LayoutReport {
    /// Build the report for a synthesized layout.
    ///
    /// Coverage uses the same inset rule the path was drawn with, so
    /// the covered area is the rectangle the run actually sweeps.
    #[must_use]
    pub fn for_layout(config: &LayoutConfig, layout: &PipeLayout) -> Self {
        let inset = config.path_inset.resolve(config.pipe_spacing);
        let coverage = metrics::coverage(config.room_length, config.room_width, inset);

        let points = layout.path.points();
        let start = points.first().copied().unwrap_or(Point::new(0.0, 0.0));
        let end = points.last().copied().unwrap_or(start);

        let length_per_sqm = if coverage.room_area > 0.0 {
            layout.total_length / coverage.room_area
        } else {
            0.0
        };

        Self {
            grid: GridReport {
                vertical_lines: layout.grid.x_count(),
                horizontal_lines: layout.grid.y_count(),
                spacing: config.pipe_spacing,
            },
            coverage,
            pipe: PipeReport {
                total_length: layout.total_length,
                length_per_sqm,
            },
            path: PathReport {
                point_count: layout.path.len(),
                start,
                end,
                x_range: axis_range(&layout.grid.x_positions),
                y_range: axis_range(&layout.grid.y_positions),
            },
        }
    }

    /// Format the report as human-readable text.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Layout Report\n{}", "=".repeat(60)));
        lines.push(String::new());

        lines.push("Grid Information:".to_string());
        lines.push(format!("  Vertical lines: {}", self.grid.vertical_lines));
        lines.push(format!("  Horizontal lines: {}", self.grid.horizontal_lines));
        lines.push(format!("  Grid spacing: {}m", self.grid.spacing));
        lines.push(String::new());

        lines.push("Coverage Information:".to_string());
        lines.push(format!("  Room area: {:.2}m²", self.coverage.room_area));
        lines.push(format!("  Covered area: {:.2}m²", self.coverage.covered_area));
        lines.push(format!(
            "  Coverage percentage: {:.1}%",
            self.coverage.coverage_percent,
        ));
        lines.push(String::new());

        lines.push("Pipe Information:".to_string());
        lines.push(format!(
            "  Total pipe length: {:.2}m",
            self.pipe.total_length,
        ));
        lines.push(format!(
            "  Pipe length per m² of room: {:.2}m/m²",
            self.pipe.length_per_sqm,
        ));
        lines.push(String::new());

        lines.push("Path Information:".to_string());
        lines.push(format!(
            "  Generated {} coordinate points",
            self.path.point_count,
        ));
        lines.push(format!(
            "  Path starts at: ({:.2}, {:.2})",
            self.path.start.x, self.path.start.y,
        ));
        lines.push(format!(
            "  Path ends at: ({:.2}, {:.2})",
            self.path.end.x, self.path.end.y,
        ));
        lines.push(format!(
            "  Coverage: x range [{:.2}, {:.2}], y range [{:.2}, {:.2}]",
            self.path.x_range.0, self.path.x_range.1, self.path.y_range.0, self.path.y_range.1,
        ));

        lines.join("\n")
    }
}

/// First and last element of a sorted grid axis.
fn axis_range(positions: &[f64]) -> (f64, f64) {
    match (positions.first(), positions.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0.0, 0.0),
    }
}

/// Synthesize a layout and build its report in one call.
///
/// Callers wanting advisory handling run
/// [`crate::validate::validate`] first; `plan` itself only re-detects
/// geometry the pipe cannot fit into.
///
/// # Errors
///
/// Propagates every error [`synthesize_path`] returns.
///
/// # Examples
///
/// ```
/// use ondol_layout::{LayoutConfig, plan};
///
/// let config = LayoutConfig::new(10.0, 10.0, 1.0);
/// let (layout, report) = plan(&config)?;
/// assert_eq!(report.path.point_count, 72);
/// assert!((layout.total_length - 71.0).abs() < 1e-9);
/// # Ok::<(), ondol_layout::LayoutError>(())
/// ```
pub fn plan(config: &LayoutConfig) -> Result<(PipeLayout, LayoutReport), LayoutError> {
    let layout = synthesize_path(config)?;
    let report = LayoutReport::for_layout(config, &layout);
    Ok((layout, report))
}
