//! SVG export serializer.
//!
//! Draws a finished [`PipeLayout`] as an installer-readable plan using
//! the [`svg`] crate for document construction, XML escaping, and path
//! data formatting: the room outline, the grid the pipe follows, the
//! pipe offset boundary, and the supply and return legs in their
//! conventional colors.
//!
//! Layout coordinates put +y at the top wall while SVG puts +y at the
//! bottom of the viewport, so every y coordinate is flipped here at the
//! export boundary. The rest of the workspace never needs to know.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Description, Element, Group, Line, Path, Rectangle, Title};
use svg::node::{Node, Text, Value};

use ondol_layout::{LayoutConfig, PipeLayout, Point};

/// Stroke width of the pipe legs, in meters (the viewBox is meter-based).
const PIPE_STROKE_WIDTH: f64 = 0.1;
/// Stroke width of the grid lines, in meters.
const GRID_STROKE_WIDTH: f64 = 0.02;
/// Stroke width of the pipe offset boundary, in meters.
const BOUNDARY_STROKE_WIDTH: f64 = 0.05;

/// Metadata to embed in the SVG document.
///
/// All fields are optional.  When present, a `<title>` and/or `<desc>`
/// element is emitted immediately after the opening `<svg>` tag.  These
/// are standard SVG accessibility elements and are surfaced by some file
/// managers and screen readers.
///
/// Text values are XML-escaped automatically by the `svg` crate.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title — emitted as `<title>`.
    pub title: Option<&'a str>,

    /// Document description — emitted as `<desc>`.
    ///
    /// Typically the room dimensions and spacing so exported files are
    /// distinguishable.
    pub description: Option<&'a str>,

    /// Structured layout configuration JSON — emitted inside a
    /// `<metadata>` element wrapped in a namespaced `<ondol:layout>`
    /// element.
    ///
    /// When present, the full serialized [`LayoutConfig`] is embedded
    /// so exported files carry machine-parseable settings for
    /// reproducibility.  The human-readable `description` is retained
    /// separately.
    pub config_json: Option<&'a str>,
}

/// Build an SVG path `d` attribute string for one pipe leg.
///
/// Uses `M` for the first point and `L` for subsequent points, flipping
/// each y coordinate into SVG's top-left coordinate system.  Returns an
/// empty string for legs with fewer than 2 points.
fn leg_path_data(points: &[Point], room_length: f64) -> String {
    if points.len() < 2 {
        return String::new();
    }

    let first = &points[0];
    let mut data = Data::new().move_to((first.x, room_length - first.y));
    for p in &points[1..] {
        data = data.line_to((p.x, room_length - p.y));
    }
    String::from(Value::from(data))
}

/// Serialize a pipe layout into an SVG document string.
///
/// The `viewBox` spans the room plus one pipe spacing of padding on
/// every side, in meters.  The drawing contains, in order: the room
/// outline (light gray fill), the grid lines the pipe follows (dotted),
/// the pipe offset boundary at one spacing from the walls (dashed red),
/// the supply leg (red), and the return leg (blue).  The two legs share
/// the transition point at [`PipeLayout::supply_return_split`], so the
/// drawing has no gap.
///
/// If [`SvgMetadata::title`] or [`SvgMetadata::description`] is
/// provided, the corresponding `<title>` / `<desc>` element is emitted
/// after the opening `<svg>` tag.  If [`SvgMetadata::config_json`] is
/// provided, a `<metadata>` element is emitted containing the JSON
/// wrapped in a namespaced `<ondol:layout>` element.
///
/// # Examples
///
/// ```
/// use ondol_export::{SvgMetadata, to_svg};
/// use ondol_layout::{LayoutConfig, synthesize_path};
///
/// let config = LayoutConfig::new(10.0, 10.0, 1.0);
/// let layout = synthesize_path(&config)?;
/// let metadata = SvgMetadata {
///     title: Some("living room"),
///     ..SvgMetadata::default()
/// };
/// let svg = to_svg(&layout, &config, &metadata);
/// assert!(svg.contains("<title>living room</title>"));
/// assert!(svg.contains(r#"id="supply""#));
/// # Ok::<(), ondol_layout::LayoutError>(())
/// ```
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn to_svg(layout: &PipeLayout, config: &LayoutConfig, metadata: &SvgMetadata<'_>) -> String {
    let width = config.room_width;
    let length = config.room_length;
    let padding = config.pipe_spacing;
    let vb_width = 2.0f64.mul_add(padding, width);
    let vb_height = 2.0f64.mul_add(padding, length);

    let mut doc = Document::new()
        .set("width", vb_width)
        .set("height", vb_height)
        .set(
            "viewBox",
            format!("{} {} {vb_width} {vb_height}", -padding, -padding),
        );

    // Optional <title> element
    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }

    // Optional <desc> element
    if let Some(description) = metadata.description {
        doc = doc.add(Description::new().add(Text::new(description)));
    }

    // Optional <metadata> element with structured layout config
    if let Some(config_json) = metadata.config_json {
        let mut layout_el = Element::new("ondol:layout");
        layout_el.assign("xmlns:ondol", "https://ondol.dev/ns/1");
        layout_el.append(Text::new(config_json));
        let mut metadata_el = Element::new("metadata");
        metadata_el.append(layout_el);
        doc = doc.add(metadata_el);
    }

    // Room outline.
    let room = Rectangle::new()
        .set("id", "room")
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", length)
        .set("fill", "gray")
        .set("fill-opacity", 0.1);
    doc = doc.add(room);

    // Grid lines spanning the full room, one per axis position.
    let mut grid = Group::new()
        .set("id", "grid")
        .set("stroke", "black")
        .set("stroke-opacity", 0.2)
        .set("stroke-width", GRID_STROKE_WIDTH)
        .set("stroke-dasharray", "0.05 0.15");
    for &x in &layout.grid.x_positions {
        grid = grid.add(
            Line::new()
                .set("x1", x)
                .set("y1", 0)
                .set("x2", x)
                .set("y2", length),
        );
    }
    for &y in &layout.grid.y_positions {
        let flipped = length - y;
        grid = grid.add(
            Line::new()
                .set("x1", 0)
                .set("y1", flipped)
                .set("x2", width)
                .set("y2", flipped),
        );
    }
    doc = doc.add(grid);

    // Pipe offset boundary at one spacing from every wall.
    let boundary = Rectangle::new()
        .set("id", "boundary")
        .set("x", padding)
        .set("y", padding)
        .set("width", width - 2.0 * padding)
        .set("height", length - 2.0 * padding)
        .set("fill", "none")
        .set("stroke", "red")
        .set("stroke-opacity", 0.5)
        .set("stroke-width", BOUNDARY_STROKE_WIDTH)
        .set("stroke-dasharray", "0.2 0.2");
    doc = doc.add(boundary);

    // Supply and return legs, split where the run reaches the rightmost
    // line. Both slices include the transition point.
    let points = layout.path.points();
    let split = layout.supply_return_split();
    let legs = [
        ("supply", "red", points.get(..=split).unwrap_or(points)),
        ("return", "blue", points.get(split..).unwrap_or(&[])),
    ];
    for (id, color, leg) in legs {
        let d = leg_path_data(leg, length);
        if d.is_empty() {
            continue;
        }
        let path = Path::new()
            .set("id", id)
            .set("d", d)
            .set("fill", "none")
            .set("stroke", color)
            .set("stroke-width", PIPE_STROKE_WIDTH)
            .set("stroke-linejoin", "round");
        doc = doc.add(path);
    }

    // The svg crate omits the XML declaration, so we prepend it.
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ondol_layout::{Grid, Polyline, synthesize_path};

    use super::*;

    fn ten_by_ten() -> (LayoutConfig, PipeLayout) {
        let config = LayoutConfig::new(10.0, 10.0, 1.0);
        let layout = synthesize_path(&config).unwrap();
        (config, layout)
    }

    /// Shorthand: no metadata (most tests don't care about it).
    fn no_meta() -> SvgMetadata<'static> {
        SvgMetadata::default()
    }

    // --- SVG structure ---

    #[test]
    fn svg_has_xml_declaration() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    }

    #[test]
    fn svg_has_xmlns_namespace_and_closing_tag() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn viewbox_pads_the_room_by_one_spacing() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());
        assert!(svg.contains(r#"viewBox="-1 -1 12 12""#));
    }

    // --- Drawing content ---

    #[test]
    fn room_rect_covers_the_full_room() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());
        assert!(svg.contains(r#"id="room""#));
        assert!(svg.contains(r#"width="10""#));
        assert!(svg.contains(r#"height="10""#));
        assert!(svg.contains(r#"fill="gray""#));
    }

    #[test]
    fn one_grid_line_per_axis_position() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());
        // 8 vertical + 9 horizontal lines.
        assert_eq!(svg.matches("<line").count(), 17);
    }

    #[test]
    fn boundary_rect_sits_one_spacing_inside() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());
        assert!(svg.contains(r#"id="boundary""#));
        assert!(svg.contains(r#"stroke="red""#));
        assert!(svg.contains(r#"stroke-dasharray="0.2 0.2""#));
        assert!(svg.contains(r#"x="1""#));
        assert!(svg.contains(r#"width="8""#));
    }

    #[test]
    fn supply_leg_starts_at_the_flipped_start_point() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());
        // Start (1, 1) flips to (1, 9) in a 10m room.
        assert!(svg.contains(r#"d="M1,9 "#), "got:\n{svg}");
    }

    #[test]
    fn legs_share_the_transition_point() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());
        // The split lands on (8, 9), flipped to (8, 1): the supply leg
        // ends there and the return leg begins there.
        assert!(svg.contains("L8,1\""));
        assert!(svg.contains(r#"d="M8,1 "#));
    }

    #[test]
    fn supply_is_red_and_return_is_blue() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());

        let supply_pos = svg.find(r#"id="supply""#).unwrap();
        let return_pos = svg.find(r#"id="return""#).unwrap();
        assert!(supply_pos < return_pos);

        let supply_el = &svg[supply_pos..return_pos];
        assert!(supply_el.contains(r#"stroke="red""#));
        let return_el = &svg[return_pos..];
        assert!(return_el.contains(r#"stroke="blue""#));
    }

    #[test]
    fn degenerate_path_omits_the_pipe_legs() {
        let config = LayoutConfig::new(10.0, 10.0, 1.0);
        let layout = PipeLayout {
            path: Polyline::new(vec![Point::new(1.0, 1.0)]),
            grid: Grid {
                x_positions: vec![1.0],
                y_positions: vec![1.0],
            },
            total_length: 0.0,
        };
        let svg = to_svg(&layout, &config, &no_meta());
        assert!(!svg.contains("<path"));
        // The room and boundary still render.
        assert!(svg.contains(r#"id="room""#));
        assert!(svg.contains(r#"id="boundary""#));
    }

    // --- Metadata ---

    #[test]
    fn title_and_desc_emitted_when_present() {
        let (config, layout) = ten_by_ten();
        let meta = SvgMetadata {
            title: Some("living room"),
            description: Some("10m x 10m at 1m spacing"),
            ..SvgMetadata::default()
        };
        let svg = to_svg(&layout, &config, &meta);
        assert!(svg.contains("<title>living room</title>"));
        assert!(svg.contains("<desc>10m x 10m at 1m spacing</desc>"));
    }

    #[test]
    fn title_and_desc_omitted_when_none() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());
        assert!(!svg.contains("<title>"));
        assert!(!svg.contains("<desc>"));
    }

    #[test]
    fn special_characters_in_title_are_escaped() {
        let (config, layout) = ten_by_ten();
        let meta = SvgMetadata {
            title: Some("A <B> & C"),
            ..SvgMetadata::default()
        };
        let svg = to_svg(&layout, &config, &meta);
        assert!(svg.contains("<title>A &lt;B&gt; &amp; C</title>"));
    }

    #[test]
    fn metadata_element_wraps_the_config_json() {
        let (config, layout) = ten_by_ten();
        let json = serde_json::to_string(&config).unwrap();
        let meta = SvgMetadata {
            config_json: Some(&json),
            ..SvgMetadata::default()
        };
        let svg = to_svg(&layout, &config, &meta);
        assert!(svg.contains("<metadata>"));
        assert!(svg.contains(r#"<ondol:layout xmlns:ondol="https://ondol.dev/ns/1">"#));
        assert!(svg.contains("</ondol:layout>"));
        assert!(svg.contains("</metadata>"));
        assert!(svg.contains("room_length"));
    }

    #[test]
    fn metadata_element_omitted_when_config_json_none() {
        let (config, layout) = ten_by_ten();
        let svg = to_svg(&layout, &config, &no_meta());
        assert!(!svg.contains("<metadata>"));
    }

    #[test]
    fn metadata_appears_before_the_drawing() {
        let (config, layout) = ten_by_ten();
        let meta = SvgMetadata {
            title: Some("test"),
            description: Some("desc"),
            config_json: Some("{}"),
        };
        let svg = to_svg(&layout, &config, &meta);

        let title_pos = svg.find("<title>").unwrap();
        let desc_pos = svg.find("<desc>").unwrap();
        let metadata_pos = svg.find("<metadata>").unwrap();
        let room_pos = svg.find(r#"id="room""#).unwrap();
        assert!(title_pos < desc_pos, "title should come before desc");
        assert!(desc_pos < metadata_pos, "desc should come before metadata");
        assert!(metadata_pos < room_pos, "metadata should come before drawing");
    }

    // --- Non-square rooms ---

    #[test]
    fn rectangular_room_flips_y_around_its_own_length() {
        let config = LayoutConfig::new(12.0, 8.0, 1.0);
        let layout = synthesize_path(&config).unwrap();
        let svg = to_svg(&layout, &config, &no_meta());

        assert!(svg.contains(r#"viewBox="-1 -1 10 14""#));
        // Start (1, 1) flips to (1, 11) in a 12m-long room.
        assert!(svg.contains(r#"d="M1,11 "#), "got:\n{svg}");
    }
}
