//! Grid derivation.
//!
//! Lays evenly spaced interior lines over the room: pipe runs follow
//! the vertical lines and turn on the horizontal ones. Both axes keep
//! an inset from the walls (see [`InsetRule`]) and no position ever
//! crosses the far inset boundary.

use crate::types::{Grid, InsetRule, LayoutConfig, LayoutError};

/// Derive the interior grid for a room using the config's
/// [`LayoutConfig::grid_inset`] rule.
///
/// Each axis gets `floor(span / spacing) + 1` lines, where `span` is
/// the room dimension minus the inset on both sides. The vertical
/// count is then reduced to the nearest even number (never padded) so
/// a serpentine traversal over the lines ends beside where it began.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidSpacing`] for a non-positive spacing
/// and [`LayoutError::RoomTooSmall`] when either axis has room for
/// fewer than two lines.
pub fn build_grid(config: &LayoutConfig) -> Result<Grid, LayoutError> {
    build_grid_with_inset(config, config.grid_inset)
}

/// Shared axis derivation behind both inset conventions.
pub(crate) fn build_grid_with_inset(
    config: &LayoutConfig,
    inset_rule: InsetRule,
) -> Result<Grid, LayoutError> {
    let spacing = config.pipe_spacing;
    if spacing <= 0.0 {
        return Err(LayoutError::InvalidSpacing { spacing });
    }
    let inset = inset_rule.resolve(spacing);

    let x_count = line_count(config.room_width, spacing, inset);
    let y_count = line_count(config.room_length, spacing, inset);
    if x_count < 2 || y_count < 2 {
        return Err(LayoutError::RoomTooSmall { spacing });
    }

    let x_count = if x_count % 2 == 0 { x_count } else { x_count - 1 };

    let mut x_positions = axis_positions(config.room_width, spacing, inset, x_count);
    let y_positions = axis_positions(config.room_length, spacing, inset, y_count);

    // The clamp in axis_positions only ever discards a position that
    // floating-point error pushed past the far boundary. If that broke
    // the even vertical count, restore it.
    if x_positions.len() % 2 != 0 {
        x_positions.pop();
    }
    if x_positions.len() < 2 || y_positions.len() < 2 {
        return Err(LayoutError::RoomTooSmall { spacing });
    }

    Ok(Grid {
        x_positions,
        y_positions,
    })
}

/// Number of lines that fit on one axis: `floor(span / spacing) + 1`,
/// clamped at zero when the insets leave no usable span.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn line_count(dimension: f64, spacing: f64, inset: f64) -> usize {
    let span = dimension - 2.0 * inset;
    let count = (span / spacing).floor() + 1.0;
    count.max(0.0) as usize
}

/// Positions `inset + i * spacing`, clamped to the far inset boundary.
#[allow(clippy::cast_precision_loss)]
fn axis_positions(dimension: f64, spacing: f64, inset: f64, count: usize) -> Vec<f64> {
    let limit = dimension - inset;
    (0..count)
        .map(|i| (i as f64).mul_add(spacing, inset))
        .filter(|&position| position <= limit)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ten_by_ten_room_at_one_meter() {
        let config = LayoutConfig::new(10.0, 10.0, 1.0);
        let grid = build_grid(&config).unwrap();
        // Nine lines fit per axis; the vertical count drops to eight.
        assert_eq!(
            grid.x_positions,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        );
        assert_eq!(
            grid.y_positions,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        );
    }

    #[test]
    fn grid_inset_defaults_to_spacing() {
        let config = LayoutConfig::new(10.0, 10.0, 0.5);
        let grid = build_grid(&config).unwrap();
        assert_eq!(grid.x_count(), 18);
        assert_eq!(grid.y_count(), 19);
        assert!((grid.x_positions[0] - 0.5).abs() < 1e-9);
        assert!((grid.y_positions[18] - 9.5).abs() < 1e-9);
    }

    #[test]
    fn fixed_inset_narrows_the_usable_span() {
        let config = LayoutConfig::new(10.0, 10.0, 0.5);
        let grid = build_grid_with_inset(&config, InsetRule::Fixed(1.0)).unwrap();
        assert_eq!(grid.x_count(), 16);
        assert_eq!(grid.y_count(), 17);
        assert!((grid.x_positions[0] - 1.0).abs() < 1e-9);
        assert!((grid.x_positions[15] - 8.5).abs() < 1e-9);
        assert!((grid.y_positions[16] - 9.0).abs() < 1e-9);
    }

    #[test]
    fn one_by_one_room_is_too_small() {
        let config = LayoutConfig::new(1.0, 1.0, 0.6);
        assert!(matches!(
            build_grid(&config),
            Err(LayoutError::RoomTooSmall { .. }),
        ));
    }

    #[test]
    fn one_cramped_axis_fails_the_whole_grid() {
        // Length has plenty of room; width fits only one line.
        let config = LayoutConfig::new(10.0, 2.2, 1.0);
        assert!(matches!(
            build_grid(&config),
            Err(LayoutError::RoomTooSmall { .. }),
        ));
    }

    #[test]
    fn non_positive_spacing_rejected_without_validation() {
        for spacing in [0.0, -1.0] {
            let config = LayoutConfig::new(10.0, 10.0, spacing);
            assert!(matches!(
                build_grid(&config),
                Err(LayoutError::InvalidSpacing { .. }),
            ));
        }
    }

    #[test]
    fn vertical_count_always_even_across_configs() {
        for (length, width) in [(10.0, 10.0), (7.3, 5.1), (12.0, 8.0)] {
            for spacing in [0.15, 0.2, 0.25, 0.4, 1.0] {
                let config = LayoutConfig::new(length, width, spacing);
                let grid = build_grid(&config).unwrap();
                assert_eq!(grid.x_count() % 2, 0, "{length}x{width} at {spacing}");
                assert!(grid.x_count() >= 2);
                assert!(grid.y_count() >= 2);
            }
        }
    }

    #[test]
    fn positions_start_at_inset_and_step_by_spacing() {
        for (length, width) in [(10.0, 10.0), (7.3, 5.1), (12.0, 8.0)] {
            for spacing in [0.15, 0.2, 0.25, 0.4] {
                let config = LayoutConfig::new(length, width, spacing);
                let grid = build_grid(&config).unwrap();

                assert!((grid.x_positions[0] - spacing).abs() < 1e-9);
                assert!((grid.y_positions[0] - spacing).abs() < 1e-9);
                for pair in grid.x_positions.windows(2) {
                    assert!((pair[1] - pair[0] - spacing).abs() < 1e-9);
                }
                for pair in grid.y_positions.windows(2) {
                    assert!((pair[1] - pair[0] - spacing).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn positions_never_cross_the_far_inset() {
        for (length, width) in [(10.0, 10.0), (7.3, 5.1), (12.0, 8.0)] {
            for spacing in [0.15, 0.2, 0.25, 0.4, 1.0] {
                let config = LayoutConfig::new(length, width, spacing);
                let grid = build_grid(&config).unwrap();

                let x_limit = width - spacing;
                let y_limit = length - spacing;
                assert!(grid.x_positions.iter().all(|&x| x <= x_limit + 1e-9));
                assert!(grid.y_positions.iter().all(|&y| y <= y_limit + 1e-9));
            }
        }
    }
}
