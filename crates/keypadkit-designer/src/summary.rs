//! Human-readable size summary and export file names.

use crate::design::KeypadDesign;
use crate::geometry::Layout;
use keypadkit_core::units::{format_length, get_unit_label};
use keypadkit_core::{MeasurementSystem, Size};
use std::fmt;

/// Physical dimensions of a design.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSummary {
    pub rows: usize,
    pub cols: usize,
    pub button_size: f64,
    pub content: Size,
    pub container: Size,
    pub canvas: Size,
    pub device: Size,
    pub system: MeasurementSystem,
}

impl DesignSummary {
    pub fn new(design: &KeypadDesign, system: MeasurementSystem) -> Self {
        let spec = design.spec();
        let layout = Layout::compute(spec, design.frame());
        Self {
            rows: spec.rows,
            cols: spec.cols,
            button_size: spec.button_size,
            content: layout.content,
            container: layout.container.size,
            canvas: layout.canvas,
            device: layout.device_size(),
            system,
        }
    }

    pub fn button_count(&self) -> usize {
        self.rows * self.cols
    }

    fn size_line(&self, size: &Size) -> String {
        format!(
            "{} × {} {}",
            format_length(size.width, self.system),
            format_length(size.height, self.system),
            get_unit_label(self.system)
        )
    }
}

impl fmt::Display for DesignSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid: {} × {} ({} buttons)", self.rows, self.cols, self.button_count())?;
        writeln!(f, "Buttons: {}", self.size_line(&self.content))?;
        writeln!(f, "Frame: {}", self.size_line(&self.container))?;
        writeln!(f, "Canvas: {}", self.size_line(&self.canvas))?;
        write!(
            f,
            "Each button is exactly {} {} (borders included)",
            format_length(self.button_size, self.system),
            get_unit_label(self.system)
        )
    }
}

/// Default file name for an exported overlay.
pub fn overlay_file_name(design: &KeypadDesign) -> String {
    format!("keypad-overlay-{}x{}.svg", design.spec().rows, design.spec().cols)
}

/// Default file name for a saved configuration.
pub fn config_file_name(design: &KeypadDesign) -> String {
    format!("keypad-config-{}x{}.json", design.spec().rows, design.spec().cols)
}
