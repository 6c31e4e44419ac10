//! ondol-export: Pure format serializers (sans-IO)
//!
//! Converts a finished pipe layout into output formats. Currently
//! supports SVG. Future formats: DXF, PDF install sheet.

pub mod svg;

pub use svg::{SvgMetadata, to_svg};
