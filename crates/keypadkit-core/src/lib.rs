//! # KeypadKit Core
//!
//! Core types, units, and error definitions shared by the KeypadKit crates.
//! Every length in KeypadKit is expressed in millimetres; conversion to
//! device units happens only at the document boundary.

pub mod color;
pub mod data;
pub mod error;
pub mod units;

pub use color::Color;
pub use data::{Point, Rect, Size};
pub use error::{CoreError, Result};
pub use units::{MeasurementSystem, CSS_DPI, MM_PER_INCH, MM_TO_PX};
