//! Length and coverage metrics for finished layouts.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Total Euclidean length of a path, summed segment by segment.
///
/// Paths with fewer than two points have no segments and a length of
/// zero.
#[must_use]
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .sum()
}

/// How much of the room floor the heated band reaches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    /// Full room area in square meters.
    pub room_area: f64,
    /// Area of the inset rectangle the pipe run sweeps, in square
    /// meters.
    pub covered_area: f64,
    /// `covered_area` as a percentage of `room_area`.
    pub coverage_percent: f64,
}

/// Coverage of the rectangle left after shrinking the room by `inset`
/// on every side.
#[must_use]
pub fn coverage(room_length: f64, room_width: f64, inset: f64) -> Coverage {
    let room_area = room_length * room_width;
    let covered_area = (room_width - 2.0 * inset) * (room_length - 2.0 * inset);
    let coverage_percent = if room_area > 0.0 {
        covered_area / room_area * 100.0
    } else {
        0.0
    };
    Coverage {
        room_area,
        covered_area,
        coverage_percent,
    }
}
