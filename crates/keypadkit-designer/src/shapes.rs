//! Drawing primitives produced by the renderer.
//!
//! Primitives are plain data in millimetres; [`crate::svg_renderer`] turns
//! them into markup.

use keypadkit_core::{Color, Point, Rect};

/// Fill of a closed shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    None,
    Color(Color),
}

/// End cap of stroked lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Translate, then uniformly scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Point,
    pub scale: f64,
}

/// Horizontal text alignment relative to the run's x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

/// One line of a text run, vertically centred on `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub y: f64,
    pub text: String,
}

/// Stacked lines sharing font, colour, and x position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f64,
    pub lines: Vec<TextLine>,
    pub font_size: f64,
    pub font_family: String,
    pub fill: Color,
    pub anchor: TextAnchor,
}

/// Enum wrapper for all drawable primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        rect: Rect,
        corner_radius: f64,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<Point>,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Path {
        data: String,
        fill: Paint,
        fill_rule: FillRule,
        transform: Option<Transform>,
    },
    Text(TextRun),
}

impl Primitive {
    /// Extent including half of the stroke on each side. `None` for paths
    /// and text, whose outline is not known here.
    pub fn stroked_bounds(&self) -> Option<Rect> {
        let half = |stroke: &Option<Stroke>| stroke.map_or(0.0, |s| s.width / 2.0);
        match self {
            Primitive::Rect { rect, stroke, .. } => {
                let h = half(stroke);
                Some(Rect::new(
                    rect.origin.x - h,
                    rect.origin.y - h,
                    rect.size.width + 2.0 * h,
                    rect.size.height + 2.0 * h,
                ))
            }
            Primitive::Circle {
                center,
                radius,
                stroke,
                ..
            } => {
                let r = radius + half(stroke);
                Some(Rect::new(center.x - r, center.y - r, 2.0 * r, 2.0 * r))
            }
            Primitive::Polygon { points, stroke, .. } => {
                bounds_of(points).map(|b| inflate(b, half(stroke)))
            }
            Primitive::Line { from, to, stroke } => {
                bounds_of(&[*from, *to]).map(|b| inflate(b, stroke.width / 2.0))
            }
            Primitive::Path { .. } | Primitive::Text(_) => None,
        }
    }
}

fn bounds_of(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

fn inflate(rect: Rect, by: f64) -> Rect {
    Rect::new(
        rect.origin.x - by,
        rect.origin.y - by,
        rect.size.width + 2.0 * by,
        rect.size.height + 2.0 * by,
    )
}
