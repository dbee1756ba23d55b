//! SVG document output for keypad drawings.
//!
//! The root element is sized in device units (96 DPI) while the view box
//! stays in millimetres, so printing at 100% scale reproduces the exact
//! physical size.

use crate::renderer::{Drawing, PlacedButton};
use crate::shapes::{FillRule, LineCap, Paint, Primitive, Stroke, TextAnchor, TextRun};
use std::fmt::Write;

/// Formats a number with at most four decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let mut s = format!("{:.4}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Escapes text content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn paint_attr(paint: &Paint) -> String {
    match paint {
        Paint::None => "none".to_string(),
        Paint::Color(c) => c.to_hex(),
    }
}

fn stroke_attrs(stroke: &Option<Stroke>) -> String {
    match stroke {
        None => r#" stroke="none""#.to_string(),
        Some(s) => {
            let mut attrs = format!(
                r#" stroke="{}" stroke-width="{}""#,
                s.color.to_hex(),
                fmt_num(s.width)
            );
            if s.cap == LineCap::Round {
                attrs.push_str(r#" stroke-linecap="round""#);
            }
            attrs
        }
    }
}

/// Render a single primitive as an SVG element
pub fn render_primitive(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Rect {
            rect,
            corner_radius,
            fill,
            stroke,
        } => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" fill="{}"{} />"#,
            fmt_num(rect.origin.x),
            fmt_num(rect.origin.y),
            fmt_num(rect.size.width),
            fmt_num(rect.size.height),
            fmt_num(*corner_radius),
            fmt_num(*corner_radius),
            paint_attr(fill),
            stroke_attrs(stroke)
        ),
        Primitive::Circle {
            center,
            radius,
            fill,
            stroke,
        } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{} />"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(*radius),
            paint_attr(fill),
            stroke_attrs(stroke)
        ),
        Primitive::Polygon {
            points,
            fill,
            stroke,
        } => {
            let pts = points
                .iter()
                .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                r#"<polygon points="{}" fill="{}"{} />"#,
                pts,
                paint_attr(fill),
                stroke_attrs(stroke)
            )
        }
        Primitive::Line { from, to, stroke } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{} />"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            stroke_attrs(&Some(*stroke))
        ),
        Primitive::Path {
            data,
            fill,
            fill_rule,
            transform,
        } => {
            let mut el = format!(r#"<path d="{}" fill="{}""#, data, paint_attr(fill));
            if *fill_rule == FillRule::EvenOdd {
                el.push_str(r#" fill-rule="evenodd""#);
            }
            if let Some(t) = transform {
                let _ = write!(
                    el,
                    r#" transform="translate({}, {}) scale({})""#,
                    fmt_num(t.translate.x),
                    fmt_num(t.translate.y),
                    fmt_num(t.scale)
                );
            }
            el.push_str(" />");
            el
        }
        Primitive::Text(run) => render_text(run),
    }
}

fn render_text(run: &TextRun) -> String {
    let anchor = match run.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let head = format!(
        r#"<text x="{}" text-anchor="{}" font-family="{}" font-size="{}" fill="{}""#,
        fmt_num(run.x),
        anchor,
        escape_xml(&run.font_family),
        fmt_num(run.font_size),
        run.fill.to_hex()
    );

    match &run.lines[..] {
        [line] => format!(
            r#"{} y="{}" dominant-baseline="central">{}</text>"#,
            head,
            fmt_num(line.y),
            escape_xml(&line.text)
        ),
        lines => {
            let mut el = format!("{}>", head);
            for line in lines {
                let _ = write!(
                    el,
                    r#"<tspan x="{}" y="{}" dominant-baseline="central">{}</tspan>"#,
                    fmt_num(run.x),
                    fmt_num(line.y),
                    escape_xml(&line.text)
                );
            }
            el.push_str("</text>");
            el
        }
    }
}

fn render_button_group(button: &PlacedButton) -> String {
    let mut group = format!(
        r#"  <g data-row="{}" data-col="{}" transform="translate({}, {})">"#,
        button.row,
        button.col,
        fmt_num(button.origin.x),
        fmt_num(button.origin.y)
    );
    group.push('\n');
    let _ = writeln!(group, "    {}", render_primitive(&button.drawing.border));
    for part in &button.drawing.content {
        let _ = writeln!(group, "    {}", render_primitive(part));
    }
    group.push_str("  </g>\n");
    group
}

/// Render a complete standalone SVG document
pub fn render_document(drawing: &Drawing) -> String {
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        fmt_num(drawing.device_size.width),
        fmt_num(drawing.device_size.height),
        fmt_num(drawing.canvas.width),
        fmt_num(drawing.canvas.height)
    );
    let _ = writeln!(svg, "  {}", render_primitive(&drawing.frame));
    for button in &drawing.buttons {
        svg.push_str(&render_button_group(button));
    }
    svg.push_str("</svg>\n");
    svg
}
