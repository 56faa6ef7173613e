//! SVG heatmap rendering via quick-xml.

use std::fmt::Display;
use std::io::Write;

use pydeps_core::errors::RenderError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::dependency_graph::{AdjacencyMatrix, BuiltGraph};

use super::options::RenderOptions;
use super::traits::MatrixRenderer;

const PX_PER_INCH: f64 = 72.0;
/// Approximate glyph advance relative to the font size.
const CHAR_WIDTH: f64 = 0.6;
const COLOR_BAR_WIDTH: f64 = 60.0;
const EMPTY_COLOR: &str = "#440154";
const SET_COLOR: &str = "#fde725";

/// Heatmap of the adjacency matrix as a standalone SVG document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl MatrixRenderer for SvgRenderer {
    fn default_extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, graph: &BuiltGraph, options: &RenderOptions) -> Result<String, RenderError> {
        render_svg(graph.matrix(), options)
    }
}

struct Layout {
    width: f64,
    height: f64,
    left: f64,
    top: f64,
    cell_width: f64,
    cell_height: f64,
    font: f64,
}

impl Layout {
    fn new(matrix: &AdjacencyMatrix, options: &RenderOptions) -> Self {
        let font = f64::from(options.font_size.max(1));
        let width = f64::from(options.figure_size.0.max(1)) * PX_PER_INCH;
        let height = f64::from(options.figure_size.1.max(1)) * PX_PER_INCH;
        let longest = |labels: &[String]| labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;

        let left = longest(matrix.rows()) * font * CHAR_WIDTH + 3.0 * font + 10.0;
        let top = 3.0 * font + 10.0;
        let tick_depth = if options.rotation == 0 { 1.0 } else { longest(matrix.columns()) };
        let bottom = tick_depth * font * CHAR_WIDTH + 3.0 * font + 10.0;
        let right = if options.color_bar { COLOR_BAR_WIDTH + 20.0 } else { 20.0 };

        let (rows, columns) = matrix.dims();
        let cell_width = ((width - left - right) / columns.max(1) as f64).max(1.0);
        let cell_height = ((height - top - bottom) / rows.max(1) as f64).max(1.0);
        Self {
            width,
            height,
            left,
            top,
            cell_width,
            cell_height,
            font,
        }
    }

    fn grid_right(&self, columns: usize) -> f64 {
        self.left + self.cell_width * columns as f64
    }

    fn grid_bottom(&self, rows: usize) -> f64 {
        self.top + self.cell_height * rows as f64
    }
}

/// Render `matrix` as an SVG document.
pub fn render_svg(matrix: &AdjacencyMatrix, options: &RenderOptions) -> Result<String, RenderError> {
    let layout = Layout::new(matrix, options);
    let (rows, columns) = matrix.dims();
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(encoding)?;
    start(
        &mut writer,
        "svg",
        &[
            ("xmlns", "http://www.w3.org/2000/svg".to_string()),
            ("width", num(layout.width)),
            ("height", num(layout.height)),
            ("viewBox", format!("0 0 {} {}", num(layout.width), num(layout.height))),
            ("font-family", "sans-serif".to_string()),
            ("font-size", num(layout.font)),
        ],
    )?;

    text(
        &mut writer,
        &[
            ("x", num(layout.width / 2.0)),
            ("y", num(layout.font * 2.0)),
            ("text-anchor", "middle".to_string()),
            ("font-size", num(layout.font * 1.5)),
        ],
        &options.title,
    )?;

    for (i, row) in matrix.rows().iter().enumerate() {
        let y = layout.top + layout.cell_height * i as f64;
        for j in 0..columns {
            let x = layout.left + layout.cell_width * j as f64;
            let value = matrix.get(i, j).unwrap_or(0);
            empty(
                &mut writer,
                "rect",
                &[
                    ("x", num(x)),
                    ("y", num(y)),
                    ("width", num(layout.cell_width)),
                    ("height", num(layout.cell_height)),
                    ("fill", cell_color(value).to_string()),
                ],
            )?;
            text(
                &mut writer,
                &[
                    ("x", num(x + layout.cell_width / 2.0)),
                    ("y", num(y + layout.cell_height / 2.0)),
                    ("text-anchor", "middle".to_string()),
                    ("dominant-baseline", "central".to_string()),
                    ("fill", if value == 1 { "black" } else { "white" }.to_string()),
                ],
                &value.to_string(),
            )?;
        }
        text(
            &mut writer,
            &[
                ("x", num(layout.left - 4.0)),
                ("y", num(y + layout.cell_height / 2.0)),
                ("text-anchor", "end".to_string()),
                ("dominant-baseline", "central".to_string()),
            ],
            row,
        )?;
    }

    let tick_y = layout.grid_bottom(rows) + layout.font;
    for (j, column) in matrix.columns().iter().enumerate() {
        let x = layout.left + layout.cell_width * (j as f64 + 0.5);
        let mut attrs = vec![("x", num(x)), ("y", num(tick_y))];
        if options.rotation != 0 {
            attrs.push(("text-anchor", "end".to_string()));
            attrs.push(("transform", format!("rotate({} {} {})", -options.rotation, num(x), num(tick_y))));
        } else {
            attrs.push(("text-anchor", "middle".to_string()));
        }
        text(&mut writer, &attrs, column)?;
    }

    text(
        &mut writer,
        &[
            ("x", num((layout.left + layout.grid_right(columns)) / 2.0)),
            ("y", num(layout.height - layout.font)),
            ("text-anchor", "middle".to_string()),
        ],
        &options.x_label,
    )?;
    let y_label_y = (layout.top + layout.grid_bottom(rows)) / 2.0;
    text(
        &mut writer,
        &[
            ("x", num(layout.font)),
            ("y", num(y_label_y)),
            ("text-anchor", "middle".to_string()),
            ("transform", format!("rotate(-90 {} {})", num(layout.font), num(y_label_y))),
        ],
        &options.y_label,
    )?;

    if options.color_bar {
        write_color_bar(&mut writer, &layout, columns, rows)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(encoding)?;
    String::from_utf8(writer.into_inner()).map_err(encoding)
}

fn write_color_bar<W: Write>(writer: &mut Writer<W>, layout: &Layout, columns: usize, rows: usize) -> Result<(), RenderError> {
    let x = layout.grid_right(columns) + 20.0;
    let bar_width = COLOR_BAR_WIDTH / 3.0;
    let half = (layout.grid_bottom(rows) - layout.top) / 2.0;
    for (offset, value) in [(0.0, 1u8), (half, 0u8)] {
        let y = layout.top + offset;
        empty(
            writer,
            "rect",
            &[
                ("x", num(x)),
                ("y", num(y)),
                ("width", num(bar_width)),
                ("height", num(half)),
                ("fill", cell_color(value).to_string()),
            ],
        )?;
        text(
            writer,
            &[
                ("x", num(x + bar_width + 4.0)),
                ("y", num(y + half / 2.0)),
                ("dominant-baseline", "central".to_string()),
            ],
            &value.to_string(),
        )?;
    }
    Ok(())
}

fn cell_color(value: u8) -> &'static str {
    if value == 1 {
        SET_COLOR
    } else {
        EMPTY_COLOR
    }
}

fn num(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

fn element<'a>(name: &'a str, attrs: &[(&str, String)]) -> BytesStart<'a> {
    let mut element = BytesStart::new(name);
    for (key, value) in attrs {
        element.push_attribute((*key, value.as_str()));
    }
    element
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, String)]) -> Result<(), RenderError> {
    writer.write_event(Event::Start(element(name, attrs))).map_err(encoding)
}

fn empty<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, String)]) -> Result<(), RenderError> {
    writer.write_event(Event::Empty(element(name, attrs))).map_err(encoding)
}

fn text<W: Write>(writer: &mut Writer<W>, attrs: &[(&str, String)], content: &str) -> Result<(), RenderError> {
    writer.write_event(Event::Start(element("text", attrs))).map_err(encoding)?;
    writer.write_event(Event::Text(BytesText::new(content))).map_err(encoding)?;
    writer.write_event(Event::End(BytesEnd::new("text"))).map_err(encoding)
}

fn encoding(err: impl Display) -> RenderError {
    RenderError::Encoding {
        message: err.to_string(),
    }
}
