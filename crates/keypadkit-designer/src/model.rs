//! Design model for keypad overlays.
//!
//! Grid-wide defaults live in [`GridSpec`] and [`OuterFrameSpec`]. Each cell
//! owns a [`ButtonOverride`] whose optional attributes shadow the grid
//! defaults. Fallback is resolved at render time, so changing a default
//! affects every cell that has not overridden it.

use keypadkit_core::Color;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grid-wide button defaults. All lengths are millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    pub button_size: f64,
    pub spacing: f64,
    pub corner_radius: f64,
    pub font_size: f64,
    pub border_width: f64,
    pub button_color: Color,
    pub border_color: Color,
    pub text_color: Color,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            button_size: 15.0,
            spacing: 2.0,
            corner_radius: 2.0,
            font_size: 8.0,
            border_width: 0.5,
            button_color: Color::WHITE,
            border_color: Color::BLACK,
            text_color: Color::BLACK,
        }
    }
}

/// User-configured padding between the outer frame and the button area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Padding {
    pub const DEFAULT_MM: f64 = 5.0;

    /// Same padding on every side.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_MM)
    }
}

/// The printed frame and background around the button grid.
#[derive(Debug, Clone, PartialEq)]
pub struct OuterFrameSpec {
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
    pub padding: Padding,
    pub background_color: Color,
}

impl Default for OuterFrameSpec {
    fn default() -> Self {
        Self {
            border_width: 0.0,
            border_color: Color::BLACK,
            corner_radius: 0.0,
            padding: Padding::default(),
            background_color: Color::WHITE,
        }
    }
}

/// What is drawn inside a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Circle,
    Triangle,
    Square,
    Play,
    Stop,
    Menu,
    Gear,
}

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        ContentType::Text,
        ContentType::Circle,
        ContentType::Triangle,
        ContentType::Square,
        ContentType::Play,
        ContentType::Stop,
        ContentType::Menu,
        ContentType::Gear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::Play => "play",
            Self::Stop => "stop",
            Self::Menu => "menu",
            Self::Gear => "gear",
        }
    }

    /// Lenient lookup used when reading documents: anything unknown
    /// renders as text.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown content type '{}', falling back to text", tag);
            Self::Text
        })
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ct| ct.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown content type: {}", s))
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Per-cell label, content type, and optional style overrides.
///
/// Serialized with the document field names; unset overrides are written
/// as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonOverride {
    pub text: String,
    pub content_type: ContentType,
    pub font_size: Option<f64>,
    pub button_color: Option<Color>,
    pub border_color: Option<Color>,
    pub text_color: Option<Color>,
}

impl ButtonOverride {
    /// A text button with the given label and no overrides.
    pub fn labeled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Clears every style override, keeping label and content type.
    pub fn reset_overrides(&mut self) {
        self.font_size = None;
        self.button_color = None;
        self.border_color = None;
        self.text_color = None;
    }

    pub fn has_overrides(&self) -> bool {
        self.font_size.is_some()
            || self.button_color.is_some()
            || self.border_color.is_some()
            || self.text_color.is_some()
    }

    /// Resolves each attribute independently against the grid defaults.
    pub fn resolve(&self, spec: &GridSpec) -> ResolvedStyle {
        ResolvedStyle {
            fill: self.button_color.unwrap_or(spec.button_color),
            border: self.border_color.unwrap_or(spec.border_color),
            symbol: self.text_color.unwrap_or(spec.text_color),
            font_size: self.font_size.unwrap_or(spec.font_size),
        }
    }
}

/// Style of one button after override fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub fill: Color,
    pub border: Color,
    /// Colour of text and symbols.
    pub symbol: Color,
    pub font_size: f64,
}

/// Rectangular mapping from (row, col) to the cell's [`ButtonOverride`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<Vec<ButtonOverride>>,
}

impl Grid {
    /// A grid of default cells labeled `1..=rows*cols` in row-major order.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = (0..rows)
            .map(|i| (0..cols).map(|j| Self::default_cell(i, j, cols)).collect())
            .collect();
        Self { cells }
    }

    /// Wraps existing rows without checking their shape.
    pub fn from_rows(cells: Vec<Vec<ButtonOverride>>) -> Self {
        Self { cells }
    }

    fn default_cell(row: usize, col: usize, cols: usize) -> ButtonOverride {
        ButtonOverride::labeled((row * cols + col + 1).to_string())
    }

    /// Resizes in place. Cells inside both the old and new bounds keep their
    /// contents; new cells get fresh defaults; cells outside are dropped.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let mut old = std::mem::take(&mut self.cells);
        self.cells = (0..rows)
            .map(|i| {
                (0..cols)
                    .map(|j| {
                        old.get_mut(i)
                            .and_then(|row| row.get_mut(j))
                            .map(std::mem::take)
                            .unwrap_or_else(|| Self::default_cell(i, j, cols))
                    })
                    .collect()
            })
            .collect();
        tracing::debug!("Resized button grid to {}x{}", rows, cols);
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&ButtonOverride> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut ButtonOverride> {
        self.cells.get_mut(row).and_then(|r| r.get_mut(col))
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Column count of the first row; `0` for an empty grid.
    pub fn col_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.row_count(), self.col_count())
    }

    /// True when every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        let cols = self.col_count();
        self.cells.iter().all(|row| row.len() == cols)
    }

    pub fn rows(&self) -> &[Vec<ButtonOverride>] {
        &self.cells
    }

    /// Iterates `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &ButtonOverride)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, cell)| (i, j, cell)))
    }
}
