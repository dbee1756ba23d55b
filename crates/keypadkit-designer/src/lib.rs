//! # KeypadKit Designer
//!
//! Layout and rendering engine for printable membrane keypad overlays.
//!
//! ## Core Components
//!
//! - **Model**: grid-wide defaults, outer frame, and per-button overrides
//! - **Design**: the editable working state with setters and grid resizing
//! - **Geometry**: exact millimetre placement of frame and buttons
//! - **Renderer**: border and content primitives for each button
//! - **SVG output**: standalone documents that print at 100% scale
//!
//! ## Architecture
//!
//! ```text
//! KeypadDesign (GridSpec + OuterFrameSpec + Grid)
//!   └── Layout (container, canvas, cell origins)
//!         └── render_keypad → Drawing (frame + placed buttons)
//!               └── svg_renderer::render_document → SVG text
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use keypadkit_designer::{render_keypad, svg_renderer, KeypadDesign, RenderOptions};
//!
//! let mut design = KeypadDesign::new();
//! design.set_dimensions(2, 3);
//! design.set_button_text(0, 0, "Zero|Probe").unwrap();
//!
//! let drawing = render_keypad(&design, &RenderOptions::default());
//! let svg = svg_renderer::render_document(&drawing);
//! assert!(svg.contains("<tspan"));
//! ```

pub mod design;
pub mod geometry;
pub mod model;
pub mod renderer;
pub mod shapes;
pub mod summary;
pub mod svg_renderer;

pub use design::KeypadDesign;
pub use geometry::{Layout, ANTI_CLIP_INSET};
pub use model::{
    ButtonOverride, ContentType, Grid, GridSpec, OuterFrameSpec, Padding, ResolvedStyle,
};
pub use renderer::{
    render_border, render_button, render_content, render_keypad, ButtonContent, ButtonDrawing,
    Drawing, PlacedButton, RenderOptions,
};
pub use shapes::{FillRule, LineCap, Paint, Primitive, Stroke, TextAnchor, TextLine, TextRun};
pub use summary::{config_file_name, overlay_file_name, DesignSummary};
