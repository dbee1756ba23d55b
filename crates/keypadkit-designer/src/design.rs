//! Working state of a keypad overlay design.
//!
//! [`KeypadDesign`] is the mutable copy an editor works on. It has no link
//! back to any document it was loaded from. Numeric setters store whatever
//! they are given; [`KeypadDesign::validate`] is offered to input layers
//! that want to range-check before rendering.

use crate::model::{ButtonOverride, ContentType, Grid, GridSpec, OuterFrameSpec, Padding};
use keypadkit_core::{Color, CoreError, Result};

/// Accepted input ranges, in millimetres unless noted.
pub mod limits {
    use std::ops::RangeInclusive;

    pub const ROWS: RangeInclusive<usize> = 1..=8;
    pub const COLS: RangeInclusive<usize> = 1..=8;
    pub const BUTTON_SIZE: RangeInclusive<f64> = 5.0..=50.0;
    pub const SPACING: RangeInclusive<f64> = 0.0..=20.0;
    pub const CORNER_RADIUS: RangeInclusive<f64> = 0.0..=10.0;
    pub const FONT_SIZE: RangeInclusive<f64> = 3.0..=20.0;
    pub const BORDER_WIDTH: RangeInclusive<f64> = 0.0..=5.0;
    pub const OUTER_BORDER_WIDTH: RangeInclusive<f64> = 0.0..=10.0;
    pub const OUTER_CORNER_RADIUS: RangeInclusive<f64> = 0.0..=20.0;
    pub const PADDING: RangeInclusive<f64> = 0.0..=50.0;
}

/// Complete editable state: grid defaults, outer frame, and cells.
#[derive(Debug, Clone, PartialEq)]
pub struct KeypadDesign {
    spec: GridSpec,
    frame: OuterFrameSpec,
    grid: Grid,
}

impl Default for KeypadDesign {
    fn default() -> Self {
        let spec = GridSpec::default();
        let grid = Grid::new(spec.rows, spec.cols);
        Self {
            spec,
            frame: OuterFrameSpec::default(),
            grid,
        }
    }
}

impl KeypadDesign {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a design from parts. The grid is taken as-is, even when
    /// its shape disagrees with `spec.rows`/`spec.cols`.
    pub fn from_parts(spec: GridSpec, frame: OuterFrameSpec, grid: Grid) -> Self {
        Self { spec, frame, grid }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn frame(&self) -> &OuterFrameSpec {
        &self.frame
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn button(&self, row: usize, col: usize) -> Option<&ButtonOverride> {
        self.grid.get(row, col)
    }

    // Grid dimensions. These always resize the cell grid.

    pub fn set_rows(&mut self, rows: usize) {
        self.set_dimensions(rows, self.spec.cols);
    }

    pub fn set_cols(&mut self, cols: usize) {
        self.set_dimensions(self.spec.rows, cols);
    }

    pub fn set_dimensions(&mut self, rows: usize, cols: usize) {
        self.spec.rows = rows;
        self.spec.cols = cols;
        self.grid.resize(rows, cols);
    }

    // Grid-wide defaults

    pub fn set_button_size(&mut self, value: f64) {
        self.spec.button_size = value;
    }

    pub fn set_spacing(&mut self, value: f64) {
        self.spec.spacing = value;
    }

    pub fn set_corner_radius(&mut self, value: f64) {
        self.spec.corner_radius = value;
    }

    pub fn set_font_size(&mut self, value: f64) {
        self.spec.font_size = value;
    }

    pub fn set_border_width(&mut self, value: f64) {
        self.spec.border_width = value;
    }

    pub fn set_default_button_color(&mut self, color: Color) {
        self.spec.button_color = color;
    }

    pub fn set_default_border_color(&mut self, color: Color) {
        self.spec.border_color = color;
    }

    pub fn set_default_text_color(&mut self, color: Color) {
        self.spec.text_color = color;
    }

    // Outer frame

    pub fn set_outer_border_width(&mut self, value: f64) {
        self.frame.border_width = value;
    }

    pub fn set_outer_border_color(&mut self, color: Color) {
        self.frame.border_color = color;
    }

    pub fn set_outer_corner_radius(&mut self, value: f64) {
        self.frame.corner_radius = value;
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.frame.padding = padding;
    }

    pub fn set_padding_top(&mut self, value: f64) {
        self.frame.padding.top = value;
    }

    pub fn set_padding_bottom(&mut self, value: f64) {
        self.frame.padding.bottom = value;
    }

    pub fn set_padding_left(&mut self, value: f64) {
        self.frame.padding.left = value;
    }

    pub fn set_padding_right(&mut self, value: f64) {
        self.frame.padding.right = value;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.frame.background_color = color;
    }

    // Per-cell overrides

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut ButtonOverride> {
        let (rows, cols) = self.grid.dimensions();
        self.grid
            .get_mut(row, col)
            .ok_or(CoreError::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            })
    }

    /// Replaces the label. `|` separates stacked lines.
    pub fn set_button_text(&mut self, row: usize, col: usize, text: impl Into<String>) -> Result<()> {
        self.cell_mut(row, col)?.text = text.into();
        Ok(())
    }

    pub fn set_button_content_type(
        &mut self,
        row: usize,
        col: usize,
        content_type: ContentType,
    ) -> Result<()> {
        self.cell_mut(row, col)?.content_type = content_type;
        Ok(())
    }

    pub fn set_button_font_size(&mut self, row: usize, col: usize, size: Option<f64>) -> Result<()> {
        self.cell_mut(row, col)?.font_size = size;
        Ok(())
    }

    pub fn set_button_color(&mut self, row: usize, col: usize, color: Option<Color>) -> Result<()> {
        self.cell_mut(row, col)?.button_color = color;
        Ok(())
    }

    pub fn set_button_border_color(
        &mut self,
        row: usize,
        col: usize,
        color: Option<Color>,
    ) -> Result<()> {
        self.cell_mut(row, col)?.border_color = color;
        Ok(())
    }

    pub fn set_button_text_color(
        &mut self,
        row: usize,
        col: usize,
        color: Option<Color>,
    ) -> Result<()> {
        self.cell_mut(row, col)?.text_color = color;
        Ok(())
    }

    /// Drops all style overrides of one cell.
    pub fn reset_button(&mut self, row: usize, col: usize) -> Result<()> {
        self.cell_mut(row, col)?.reset_overrides();
        Ok(())
    }

    /// Range-checks every numeric input. The layout engine never calls this.
    pub fn validate(&self) -> Result<()> {
        let s = &self.spec;
        let f = &self.frame;

        check_count("rows", s.rows, limits::ROWS)?;
        check_count("cols", s.cols, limits::COLS)?;
        check_mm("buttonSize", s.button_size, limits::BUTTON_SIZE)?;
        check_mm("spacing", s.spacing, limits::SPACING)?;
        check_mm("cornerRadius", s.corner_radius, limits::CORNER_RADIUS)?;
        check_mm("fontSize", s.font_size, limits::FONT_SIZE)?;
        check_mm("borderWidth", s.border_width, limits::BORDER_WIDTH)?;
        check_mm("outerBorderWidth", f.border_width, limits::OUTER_BORDER_WIDTH)?;
        check_mm("outerBorderRadius", f.corner_radius, limits::OUTER_CORNER_RADIUS)?;
        check_mm("outerBorderPaddingTop", f.padding.top, limits::PADDING)?;
        check_mm("outerBorderPaddingBottom", f.padding.bottom, limits::PADDING)?;
        check_mm("outerBorderPaddingLeft", f.padding.left, limits::PADDING)?;
        check_mm("outerBorderPaddingRight", f.padding.right, limits::PADDING)?;

        if s.border_width >= s.button_size {
            return Err(CoreError::invalid_parameter(
                "borderWidth",
                s.border_width,
                "must be smaller than the button size",
            ));
        }

        for (row, col, cell) in self.grid.iter() {
            if let Some(size) = cell.font_size {
                check_mm(&format!("buttons[{}][{}].fontSize", row, col), size, limits::FONT_SIZE)?;
            }
        }

        Ok(())
    }
}

fn check_count(name: &str, value: usize, range: std::ops::RangeInclusive<usize>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::invalid_parameter(
            name,
            value as f64,
            format!("must be between {} and {}", range.start(), range.end()),
        ))
    }
}

fn check_mm(name: &str, value: f64, range: std::ops::RangeInclusive<f64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::invalid_parameter(
            name,
            value,
            format!("must be between {} and {} mm", range.start(), range.end()),
        ))
    }
}
