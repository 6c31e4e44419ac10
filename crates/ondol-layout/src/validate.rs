//! Input validation for layout configurations.
//!
//! Rejects geometry the later stages cannot work with before any grid
//! or path computation happens. Hard failures return [`LayoutError`];
//! a spacing that is legal but impractically tight returns
//! [`Verdict::Advisory`] so interactive callers can ask before
//! continuing instead of silently producing an unbuildable plan.

use std::fmt;

use crate::types::{LayoutConfig, LayoutError};

/// Outcome of validating a [`LayoutConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// All checks passed.
    Pass,
    /// The configuration is usable but questionable. The caller must
    /// explicitly acknowledge the advisory before synthesizing.
    Advisory(Advisory),
}

impl Verdict {
    /// Returns `true` when no caller acknowledgement is required.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "all checks passed"),
            Self::Advisory(advisory) => advisory.fmt(f),
        }
    }
}

/// Non-fatal conditions the caller should confirm before proceeding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// Spacing below [`LayoutConfig::PRACTICAL_MIN_SPACING`]. The
    /// layout is computable but the pipe density is rarely installable.
    TightSpacing {
        /// The configured spacing.
        spacing: f64,
        /// The practical minimum it fell below.
        threshold: f64,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TightSpacing { spacing, threshold } => write!(
                f,
                "pipe spacing of {spacing}m is below {threshold}m and may be impractical to install",
            ),
        }
    }
}

/// Validate a layout configuration.
///
/// Checks run in order: room length, room width, spacing positivity,
/// then spacing against half the narrower room dimension. A spacing
/// below [`LayoutConfig::PRACTICAL_MIN_SPACING`] that survives the
/// hard checks yields [`Verdict::Advisory`] rather than an error.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidDimension`] for a non-positive room
/// dimension, [`LayoutError::InvalidSpacing`] for a non-positive
/// spacing, and [`LayoutError::SpacingTooLarge`] when the spacing
/// reaches half the narrower room dimension.
pub fn validate(config: &LayoutConfig) -> Result<Verdict, LayoutError> {
    if config.room_length <= 0.0 {
        return Err(LayoutError::InvalidDimension {
            name: "length",
            value: config.room_length,
        });
    }
    if config.room_width <= 0.0 {
        return Err(LayoutError::InvalidDimension {
            name: "width",
            value: config.room_width,
        });
    }
    if config.pipe_spacing <= 0.0 {
        return Err(LayoutError::InvalidSpacing {
            spacing: config.pipe_spacing,
        });
    }

    let min_dimension = config.room_length.min(config.room_width);
    if config.pipe_spacing >= min_dimension / 2.0 {
        return Err(LayoutError::SpacingTooLarge {
            spacing: config.pipe_spacing,
            max_allowed: min_dimension / 2.0,
        });
    }

    if config.pipe_spacing < LayoutConfig::PRACTICAL_MIN_SPACING {
        return Ok(Verdict::Advisory(Advisory::TightSpacing {
            spacing: config.pipe_spacing,
            threshold: LayoutConfig::PRACTICAL_MIN_SPACING,
        }));
    }

    Ok(Verdict::Pass)
}
