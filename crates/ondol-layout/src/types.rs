//! Shared types for the ondol layout pipeline.

use serde::{Deserialize, Serialize};

/// A 2D point in room coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (meters from the left wall).
    pub x: f64,
    /// Vertical position (meters from the bottom wall).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// A sequence of connected points forming a pipe run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline(Vec<Point>);

impl Polyline {
    /// Create a new polyline from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the polyline has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the polyline.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the polyline and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Total Euclidean length of the polyline, summed segment by
    /// segment.
    ///
    /// Polylines with fewer than two points have no segments and a
    /// length of zero.
    #[must_use]
    pub fn length(&self) -> f64 {
        crate::metrics::path_length(&self.0)
    }
}

/// How far the outermost grid lines sit from the room walls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InsetRule {
    /// Inset by the configured pipe spacing, so the boundary clearance
    /// scales with pipe density.
    Spacing,
    /// Inset by a fixed margin in meters, independent of spacing.
    Fixed(f64),
}

impl InsetRule {
    /// Resolve the rule to a concrete inset in meters.
    #[must_use]
    pub const fn resolve(self, spacing: f64) -> f64 {
        match self {
            Self::Spacing => spacing,
            Self::Fixed(margin) => margin,
        }
    }
}

/// Configuration for the layout pipeline.
///
/// There is no `Default`: every room has its own dimensions and pipe
/// spacing carries real installation cost, so all three are required
/// constructor arguments rather than defaulted fields.
///
/// # Validation
///
/// Fields are public and nothing is enforced at construction time.
/// Run [`crate::validate::validate`] before handing a config to the
/// grid or path stages; the stages themselves only re-detect geometry
/// that cannot fit two pipe runs ([`LayoutError::RoomTooSmall`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Room length in meters (vertical extent).
    pub room_length: f64,

    /// Room width in meters (horizontal extent).
    pub room_width: f64,

    /// Center-to-center distance between adjacent pipe runs in meters.
    pub pipe_spacing: f64,

    /// Inset rule for standalone grid derivation ([`crate::grid::build_grid`]).
    pub grid_inset: InsetRule,

    /// Inset rule for path synthesis ([`crate::path::synthesize_path`]).
    ///
    /// Deliberately distinct from `grid_inset`: the pipe run keeps a
    /// fixed service margin from the walls regardless of how dense the
    /// grid is, while the standalone grid keeps one spacing of
    /// clearance. Unifying the two would silently move every
    /// coordinate one convention produces.
    pub path_inset: InsetRule,
}

impl LayoutConfig {
    /// Fixed wall clearance, in meters, used by the conventional path
    /// inset rule.
    pub const CONVENTIONAL_PATH_INSET: f64 = 1.0;

    /// Spacings below this many meters are flagged as impractical to
    /// install by [`crate::validate::validate`].
    pub const PRACTICAL_MIN_SPACING: f64 = 0.1;

    /// Create a configuration with the conventional inset rules.
    #[must_use]
    pub const fn new(room_length: f64, room_width: f64, pipe_spacing: f64) -> Self {
        Self {
            room_length,
            room_width,
            pipe_spacing,
            grid_inset: InsetRule::Spacing,
            path_inset: InsetRule::Fixed(Self::CONVENTIONAL_PATH_INSET),
        }
    }
}

/// Evenly spaced interior grid lines derived from the room dimensions.
///
/// Positions are strictly increasing along each axis. The vertical
/// line count is always even so a serpentine traversal finishes on the
/// same side it started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// X coordinates of the vertical grid lines.
    pub x_positions: Vec<f64>,
    /// Y coordinates of the horizontal grid lines.
    pub y_positions: Vec<f64>,
}

impl Grid {
    /// Number of vertical grid lines.
    #[must_use]
    pub const fn x_count(&self) -> usize {
        self.x_positions.len()
    }

    /// Number of horizontal grid lines.
    #[must_use]
    pub const fn y_count(&self) -> usize {
        self.y_positions.len()
    }
}

/// Result of path synthesis.
///
/// Contains the single continuous pipe run, the grid its coordinates
/// were drawn from, and the total pipe length. Downstream consumers
/// (report formatting, SVG export) read from this without recomputing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeLayout {
    /// The serpentine pipe run, supply end first.
    pub path: Polyline,

    /// Grid lines the path coordinates are drawn from.
    ///
    /// Derived with [`LayoutConfig::path_inset`], so it can differ from
    /// the grid [`crate::grid::build_grid`] returns for the same config.
    pub grid: Grid,

    /// Total pipe length in meters.
    pub total_length: f64,
}

impl PipeLayout {
    /// Index of the first path point on the rightmost vertical line.
    ///
    /// Splits the path into its supply leg (start through the returned
    /// index) and return leg (the returned index through the end). The
    /// legs share the transition point, so rendering them separately
    /// leaves no gap. Returns 0 for an empty path.
    #[must_use]
    pub fn supply_return_split(&self) -> usize {
        let points = self.path.points();
        let Some(max_x) = points.iter().map(|p| p.x).reduce(f64::max) else {
            return 0;
        };
        points.iter().position(|p| p.x >= max_x).unwrap_or(0)
    }
}

/// Errors that can occur during validation, grid derivation, or path
/// synthesis.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A room dimension is zero or negative.
    #[error("room {name} must be greater than 0 meters (got {value}m)")]
    InvalidDimension {
        /// Which dimension failed ("length" or "width").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The pipe spacing is zero or negative.
    #[error("pipe spacing must be greater than 0 meters (got {spacing}m)")]
    InvalidSpacing {
        /// The rejected value.
        spacing: f64,
    },

    /// The spacing cannot fit at least two pipe runs across the
    /// narrower room dimension.
    #[error(
        "pipe spacing ({spacing}m) is too large for the room dimensions: must be less than {max_allowed:.2}m"
    )]
    SpacingTooLarge {
        /// The rejected spacing.
        spacing: f64,
        /// Exclusive upper bound: half the narrower room dimension.
        max_allowed: f64,
    },

    /// The usable area yields fewer than two grid lines on an axis.
    #[error("room too small for {spacing}m pipe spacing")]
    RoomTooSmall {
        /// The spacing that did not fit.
        spacing: f64,
    },
}
