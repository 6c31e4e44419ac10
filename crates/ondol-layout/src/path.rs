//! Serpentine path synthesis.
//!
//! Walks the grid lines into one continuous supply-and-return run:
//! up the full height of the first vertical line, then column by
//! column across the room, alternating a descent to the second
//! horizontal line with a climb back to the top. The last column drops
//! to the bottom line and the run returns along it, stopping one
//! spacing short of the start so both ends can meet a manifold.

use crate::grid::build_grid_with_inset;
use crate::metrics::path_length;
use crate::types::{Grid, LayoutConfig, LayoutError, PipeLayout, Point, Polyline};

/// Synthesize the serpentine pipe run for a room.
///
/// Grid coordinates come from [`LayoutConfig::path_inset`], so the
/// grid carried in the result can differ from the one
/// [`crate::grid::build_grid`] returns for the same config.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidSpacing`] for a non-positive spacing
/// and [`LayoutError::RoomTooSmall`] when the inset area has room for
/// fewer than two grid lines on either axis.
pub fn synthesize_path(config: &LayoutConfig) -> Result<PipeLayout, LayoutError> {
    let grid = build_grid_with_inset(config, config.path_inset)?;
    let path = serpentine(&grid);
    let total_length = path_length(path.points());
    Ok(PipeLayout {
        path,
        grid,
        total_length,
    })
}

/// Walk the grid in serpentine order.
///
/// Expects at least two lines per axis. Column handoffs revisit the
/// intersection they turn on; the final dedup collapses those repeats
/// so every remaining segment has nonzero length.
fn serpentine(grid: &Grid) -> Polyline {
    let xs = &grid.x_positions;
    let ys = &grid.y_positions;
    let top = ys.len() - 1;

    let mut coords: Vec<Point> = Vec::with_capacity(xs.len() * ys.len() + 2 * xs.len());

    // First column: bottom to top, every row.
    for &y in ys {
        coords.push(Point::new(xs[0], y));
    }

    // Remaining columns alternate direction. Odd columns descend to
    // the second row, even columns climb back to the top; each one
    // hands off to the next at the row where it finished.
    for i in 1..xs.len() {
        let x = xs[i];
        if i % 2 == 1 {
            coords.push(Point::new(x, ys[top]));
            for &y in ys[1..].iter().rev() {
                coords.push(Point::new(x, y));
            }
            if i < xs.len() - 1 {
                coords.push(Point::new(xs[i + 1], ys[1]));
            }
        } else {
            for &y in &ys[1..] {
                coords.push(Point::new(x, y));
            }
            if i < xs.len() - 1 {
                coords.push(Point::new(xs[i + 1], ys[top]));
            }
        }
    }

    // Drop from the last column to the bottom line, then return along
    // it. The first and last columns are skipped so the run ends one
    // spacing away from the start instead of closing the loop.
    coords.push(Point::new(xs[xs.len() - 1], ys[0]));
    for &x in xs[1..xs.len() - 1].iter().rev() {
        coords.push(Point::new(x, ys[0]));
    }

    coords.dedup();

    Polyline::new(coords)
}
