//! ondol-layout: pure serpentine pipe layout pipeline (sans-IO).
//!
//! Turns a room description into a single continuous heating loop
//! through: validate -> derive grid lines -> walk the serpentine ->
//! length and coverage metrics.
//!
//! This crate has **no I/O dependencies** -- it maps a [`LayoutConfig`]
//! to structured data. Console and file interaction live in the
//! `ondol` binary; drawing lives in `ondol-export`.

pub mod grid;
pub mod metrics;
pub mod path;
pub mod report;
pub mod types;
pub mod validate;

pub use grid::build_grid;
pub use metrics::{Coverage, coverage, path_length};
pub use path::synthesize_path;
pub use report::{GridReport, LayoutReport, PathReport, PipeReport, plan};
pub use types::{Grid, InsetRule, LayoutConfig, LayoutError, PipeLayout, Point, Polyline};
pub use validate::{Advisory, Verdict, validate};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn validate_then_plan_round_trip() {
        let config = LayoutConfig::new(10.0, 10.0, 1.0);
        assert!(validate(&config).unwrap().is_pass());

        let (layout, report) = plan(&config).unwrap();
        assert_eq!(layout.path.len(), report.path.point_count);
        assert_eq!(layout.path.first(), Some(&Point::new(1.0, 1.0)));
        assert_eq!(layout.path.last(), Some(&Point::new(2.0, 1.0)));
        assert!((layout.total_length - 71.0).abs() < 1e-9);
    }

    #[test]
    fn plan_rejects_rooms_the_pipe_cannot_enter() {
        let config = LayoutConfig::new(2.5, 10.0, 1.0);
        assert!(matches!(
            plan(&config),
            Err(LayoutError::RoomTooSmall { .. }),
        ));
    }

    #[test]
    fn grid_and_path_follow_different_insets() {
        // At 0.5m spacing the standalone grid insets by the spacing
        // while the path keeps its fixed 1m margin.
        let config = LayoutConfig::new(10.0, 10.0, 0.5);
        let standalone = build_grid(&config).unwrap();
        let (layout, _) = plan(&config).unwrap();

        assert!((standalone.x_positions[0] - 0.5).abs() < 1e-9);
        assert!((layout.grid.x_positions[0] - 1.0).abs() < 1e-9);
        assert_ne!(standalone.x_count(), layout.grid.x_count());
    }

    #[test]
    fn tight_spacing_flows_from_advisory_to_plan() {
        let config = LayoutConfig::new(10.0, 8.0, 0.05);
        assert!(matches!(validate(&config), Ok(Verdict::Advisory(_))));
        // Once acknowledged, the advisory does not block synthesis.
        let (layout, _) = plan(&config).unwrap();
        assert!(layout.path.len() > 2);
    }
}
