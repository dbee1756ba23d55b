//! Layout of the button grid inside the outer frame.
//!
//! All values are millimetres. The canvas is laid out from the outside in:
//!
//! ```text
//! canvas
//!   └── outer frame stroke offset (outerBorderWidth on every side)
//!         └── container (frame rectangle)
//!               └── user padding (per side)
//!                     └── anti-clip inset (0.5 mm)
//!                           └── buttons, `spacing` apart
//! ```

use crate::model::{GridSpec, OuterFrameSpec};
use keypadkit_core::units::mm_to_px;
use keypadkit_core::{Point, Rect, Size};

/// Fixed inset around the buttons so their strokes never touch the
/// container edge.
pub const ANTI_CLIP_INSET: f64 = 0.5;

/// Computed placement of the frame and every button.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    button_size: f64,
    pitch: f64,
    /// Size of the button block alone.
    pub content: Size,
    /// The outer frame rectangle, offset so its centred stroke stays on the canvas.
    pub container: Rect,
    /// Full exported coordinate space.
    pub canvas: Size,
    /// Top-left of button (0, 0).
    pub first_cell: Point,
}

impl Layout {
    pub fn compute(spec: &GridSpec, frame: &OuterFrameSpec) -> Self {
        let padding = &frame.padding;
        let content = Size::new(
            span(spec.cols, spec.button_size, spec.spacing),
            span(spec.rows, spec.button_size, spec.spacing),
        );

        let container_width =
            content.width + 2.0 * ANTI_CLIP_INSET + padding.left + padding.right;
        let container_height =
            content.height + 2.0 * ANTI_CLIP_INSET + padding.top + padding.bottom;

        let stroke_offset = frame.border_width;
        let container = Rect::new(stroke_offset, stroke_offset, container_width, container_height);
        let canvas = Size::new(
            container_width + 2.0 * stroke_offset,
            container_height + 2.0 * stroke_offset,
        );
        let first_cell = Point::new(
            stroke_offset + padding.left + ANTI_CLIP_INSET,
            stroke_offset + padding.top + ANTI_CLIP_INSET,
        );

        Self {
            rows: spec.rows,
            cols: spec.cols,
            button_size: spec.button_size,
            pitch: spec.button_size + spec.spacing,
            content,
            container,
            canvas,
            first_cell,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn button_size(&self) -> f64 {
        self.button_size
    }

    /// Top-left corner of button (row, col) in canvas coordinates.
    /// Rows grow downward, columns grow rightward.
    pub fn cell_origin(&self, row: usize, col: usize) -> Point {
        self.first_cell
            .offset(col as f64 * self.pitch, row as f64 * self.pitch)
    }

    /// Footprint of button (row, col), borders included.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let origin = self.cell_origin(row, col);
        Rect::new(origin.x, origin.y, self.button_size, self.button_size)
    }

    /// All `(row, col, origin)` triples in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Point)> + '_ {
        (0..self.rows)
            .flat_map(move |i| (0..self.cols).map(move |j| (i, j, self.cell_origin(i, j))))
    }

    /// Canvas size in device units for the root element.
    pub fn device_size(&self) -> Size {
        Size::new(mm_to_px(self.canvas.width), mm_to_px(self.canvas.height))
    }
}

/// Length of `count` buttons with spacing only between neighbours.
fn span(count: usize, size: f64, spacing: f64) -> f64 {
    let gaps = count.saturating_sub(1) as f64;
    count as f64 * size + gaps * spacing
}
