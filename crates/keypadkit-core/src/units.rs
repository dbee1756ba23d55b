//! Unit conversion utilities
//!
//! Layout is computed in millimetres. SVG consumers size the root element
//! in CSS pixels at 96 DPI, so printing "at 100% scale" reproduces the
//! millimetre dimensions exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Reference resolution of CSS pixels
pub const CSS_DPI: f64 = 96.0;

/// Millimetre to device unit scale factor (96 / 25.4 ≈ 3.7795275591)
pub const MM_TO_PX: f64 = CSS_DPI / MM_PER_INCH;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Convert millimetres to device units (CSS pixels)
pub fn mm_to_px(value_mm: f64) -> f64 {
    value_mm * MM_TO_PX
}

/// Convert millimetres to inches
pub fn mm_to_inch(value_mm: f64) -> f64 {
    value_mm / MM_PER_INCH
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1}", value_mm),
        MeasurementSystem::Imperial => format!("{:.3}", mm_to_inch(value_mm)),
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
