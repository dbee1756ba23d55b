//! Button and keypad rendering.
//!
//! Every button is drawn in its own local frame with (0, 0) at its top-left
//! corner; [`render_keypad`] pairs each drawing with the cell origin from
//! the [`Layout`].

use crate::design::KeypadDesign;
use crate::geometry::Layout;
use crate::model::{ButtonOverride, ContentType, GridSpec, ResolvedStyle};
use crate::shapes::{
    FillRule, LineCap, Paint, Primitive, Stroke, TextAnchor, TextLine, TextRun, Transform,
};
use keypadkit_core::{Color, Point, Rect, Size};

/// Symbols occupy this fraction of the button.
const SYMBOL_SCALE: f64 = 0.5;
/// Symbol outlines are this much heavier than the button border.
const SYMBOL_STROKE_FACTOR: f64 = 1.5;
const LINE_HEIGHT_FACTOR: f64 = 1.2;
/// Separator for stacked label lines.
pub const LINE_SEPARATOR: char = '|';

/// Gear outline on a 48×48 reference frame. The hub is cut out by the
/// even-odd rule.
pub const GEAR_PATH: &str = "M 20.51 8.9 L 21.22 4.19 L 26.78 4.19 L 27.49 8.9 \
L 32.21 10.86 L 36.04 8.03 L 39.97 11.96 L 37.14 15.79 L 39.1 20.51 L 43.81 21.22 \
L 43.81 26.78 L 39.1 27.49 L 37.14 32.21 L 39.97 36.04 L 36.04 39.97 L 32.21 37.14 \
L 27.49 39.1 L 26.78 43.81 L 21.22 43.81 L 20.51 39.1 L 15.79 37.14 L 11.96 39.97 \
L 8.03 36.04 L 10.86 32.21 L 8.9 27.49 L 4.19 26.78 L 4.19 21.22 L 8.9 20.51 \
L 10.86 15.79 L 8.03 11.96 L 11.96 8.03 L 15.79 10.86 Z \
M 31 24 A 7 7 0 1 0 17 24 A 7 7 0 1 0 31 24 Z";
pub const GEAR_REFERENCE_SIZE: f64 = 48.0;
const GEAR_SCALE: f64 = 0.8;

/// Rendering choices that are not part of the design itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub font_family: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_family: "Arial, sans-serif".to_string(),
        }
    }
}

/// Content of one button with only the parameters its kind needs.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonContent {
    Text { label: String, font_size: f64 },
    Circle,
    Triangle,
    Square,
    Play,
    Stop,
    Menu,
    Gear,
}

impl ButtonContent {
    /// Builds the content for a cell; font size is already resolved.
    pub fn from_cell(cell: &ButtonOverride, style: &ResolvedStyle) -> Self {
        match cell.content_type {
            ContentType::Text => ButtonContent::Text {
                label: cell.text.clone(),
                font_size: style.font_size,
            },
            ContentType::Circle => ButtonContent::Circle,
            ContentType::Triangle => ButtonContent::Triangle,
            ContentType::Square => ButtonContent::Square,
            ContentType::Play => ButtonContent::Play,
            ContentType::Stop => ButtonContent::Stop,
            ContentType::Menu => ButtonContent::Menu,
            ContentType::Gear => ButtonContent::Gear,
        }
    }
}

/// Border and content of one button in local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonDrawing {
    pub border: Primitive,
    pub content: Vec<Primitive>,
}

/// A button drawing placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedButton {
    pub row: usize,
    pub col: usize,
    pub origin: Point,
    pub drawing: ButtonDrawing,
}

/// Everything needed to emit a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub canvas: Size,
    pub device_size: Size,
    pub frame: Primitive,
    pub buttons: Vec<PlacedButton>,
}

/// Rounded rectangle inset by half the border width, so the stroked
/// outline covers exactly `button_size`.
pub fn render_border(spec: &GridSpec, style: &ResolvedStyle) -> Primitive {
    let inset = spec.border_width / 2.0;
    let adjusted = spec.button_size - spec.border_width;
    Primitive::Rect {
        rect: Rect::new(inset, inset, adjusted, adjusted),
        corner_radius: (spec.corner_radius - inset).max(0.0),
        fill: Paint::Color(style.fill),
        stroke: Some(Stroke::new(style.border, spec.border_width)),
    }
}

/// Symbol or text centred in a button of `spec.button_size`.
pub fn render_content(
    spec: &GridSpec,
    content: &ButtonContent,
    color: Color,
    options: &RenderOptions,
) -> Vec<Primitive> {
    let size = spec.button_size;
    let c = Point::new(size / 2.0, size / 2.0);
    let s = size * SYMBOL_SCALE;
    let outline = Some(Stroke::new(color, spec.border_width * SYMBOL_STROKE_FACTOR));

    match content {
        ButtonContent::Circle => vec![Primitive::Circle {
            center: c,
            radius: s / 2.0,
            fill: Paint::None,
            stroke: outline,
        }],
        ButtonContent::Triangle => vec![Primitive::Polygon {
            points: vec![
                c.offset(0.0, -0.4 * s),
                c.offset(0.4 * s, 0.3 * s),
                c.offset(-0.4 * s, 0.3 * s),
            ],
            fill: Paint::None,
            stroke: outline,
        }],
        ButtonContent::Square => vec![Primitive::Rect {
            rect: Rect::new(c.x - s / 2.0, c.y - s / 2.0, s, s),
            corner_radius: 0.0,
            fill: Paint::None,
            stroke: outline,
        }],
        ButtonContent::Play => vec![Primitive::Polygon {
            points: vec![
                c.offset(-0.3 * s, -0.4 * s),
                c.offset(0.4 * s, 0.0),
                c.offset(-0.3 * s, 0.4 * s),
            ],
            fill: Paint::Color(color),
            stroke: None,
        }],
        ButtonContent::Stop => vec![Primitive::Rect {
            rect: Rect::new(c.x - s / 2.0, c.y - s / 2.0, s, s),
            corner_radius: 0.0,
            fill: Paint::Color(color),
            stroke: None,
        }],
        ButtonContent::Menu => {
            let stroke = Stroke::new(color, spec.border_width * SYMBOL_STROKE_FACTOR)
                .with_cap(LineCap::Round);
            let half_len = 0.4 * s;
            [-0.25 * s, 0.0, 0.25 * s]
                .iter()
                .map(|dy| Primitive::Line {
                    from: c.offset(-half_len, *dy),
                    to: c.offset(half_len, *dy),
                    stroke,
                })
                .collect()
        }
        ButtonContent::Gear => {
            let scale = size * GEAR_SCALE / GEAR_REFERENCE_SIZE;
            let half_ref = GEAR_REFERENCE_SIZE / 2.0 * scale;
            vec![Primitive::Path {
                data: GEAR_PATH.to_string(),
                fill: Paint::Color(color),
                fill_rule: FillRule::EvenOdd,
                transform: Some(Transform {
                    translate: c.offset(-half_ref, -half_ref),
                    scale,
                }),
            }]
        }
        ButtonContent::Text { label, font_size } => {
            vec![Primitive::Text(layout_text(label, *font_size, c, color, options))]
        }
    }
}

/// Splits on `|` and stacks the lines as a block centred on `center`.
fn layout_text(
    label: &str,
    font_size: f64,
    center: Point,
    color: Color,
    options: &RenderOptions,
) -> TextRun {
    let parts: Vec<&str> = label.split(LINE_SEPARATOR).collect();
    let line_height = font_size * LINE_HEIGHT_FACTOR;
    let block_height = (parts.len() - 1) as f64 * line_height;
    let start_y = center.y - block_height / 2.0;

    TextRun {
        x: center.x,
        lines: parts
            .iter()
            .enumerate()
            .map(|(i, text)| TextLine {
                y: start_y + i as f64 * line_height,
                text: (*text).to_string(),
            })
            .collect(),
        font_size,
        font_family: options.font_family.clone(),
        fill: color,
        anchor: TextAnchor::Middle,
    }
}

/// Border plus content for one cell after override fallback.
pub fn render_button(spec: &GridSpec, cell: &ButtonOverride, options: &RenderOptions) -> ButtonDrawing {
    let style = cell.resolve(spec);
    let content = ButtonContent::from_cell(cell, &style);
    ButtonDrawing {
        border: render_border(spec, &style),
        content: render_content(spec, &content, style.symbol, options),
    }
}

/// Renders the frame and every button.
///
/// Only cells present in both the declared dimensions and the grid are
/// drawn, so a grid that disagrees with `rows`/`cols` under-renders
/// instead of failing.
pub fn render_keypad(design: &KeypadDesign, options: &RenderOptions) -> Drawing {
    let spec = design.spec();
    let frame_spec = design.frame();
    let layout = Layout::compute(spec, frame_spec);

    let frame = Primitive::Rect {
        rect: layout.container,
        corner_radius: frame_spec.corner_radius,
        fill: Paint::Color(frame_spec.background_color),
        stroke: (frame_spec.border_width > 0.0)
            .then(|| Stroke::new(frame_spec.border_color, frame_spec.border_width)),
    };

    let buttons: Vec<PlacedButton> = layout
        .cells()
        .filter_map(|(row, col, origin)| {
            design.grid().get(row, col).map(|cell| PlacedButton {
                row,
                col,
                origin,
                drawing: render_button(spec, cell, options),
            })
        })
        .collect();

    let expected = layout.rows() * layout.cols();
    if buttons.len() != expected {
        tracing::warn!(
            "Grid shape {:?} disagrees with {}x{}; rendered {} of {} buttons",
            design.grid().dimensions(),
            layout.rows(),
            layout.cols(),
            buttons.len(),
            expected
        );
    }
    tracing::debug!(
        "Rendered {} buttons on a {:.2} x {:.2} mm canvas",
        buttons.len(),
        layout.canvas.width,
        layout.canvas.height
    );

    Drawing {
        canvas: layout.canvas,
        device_size: layout.device_size(),
        frame,
        buttons,
    }
}
