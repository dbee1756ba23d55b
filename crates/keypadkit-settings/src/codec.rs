//! Configuration document codec.
//!
//! A document is the only durable form of a design:
//!
//! ```json
//! {
//!   "version": "1.1",
//!   "settings": { "rows": 4, "cols": 4, "buttonSize": 15, ... },
//!   "buttons": [[{ "text": "1", "contentType": "text", "fontSize": null, ... }]]
//! }
//! ```
//!
//! Loading checks the top-level structure, runs the [`MigrationChain`],
//! decodes the typed document, and only then builds a [`KeypadDesign`].
//! Nothing is assigned to an existing design unless every stage succeeds.

use crate::error::{CodecError, CodecResult};
use crate::migration::{MigrationChain, MigrationReport};
use keypadkit_core::Color;
use keypadkit_designer::{Grid, GridSpec, KeypadDesign, OuterFrameSpec, Padding};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Document format version written by this build
pub const CURRENT_VERSION: &str = "1.1";

/// Complete configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: String,
    pub settings: DocumentSettings,
    pub buttons: Grid,
}

/// Flat settings block. Missing fields take the design defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentSettings {
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
    pub outer_border_width: f64,
    pub outer_border_color: Color,
    pub outer_border_radius: f64,
    pub outer_border_padding_top: f64,
    pub outer_border_padding_bottom: f64,
    pub outer_border_padding_left: f64,
    pub outer_border_padding_right: f64,
    pub outer_background_color: Color,
}

impl DocumentSettings {
    /// Every key of the current settings schema.
    pub const KEYS: [&'static str; 18] = [
        "rows",
        "cols",
        "buttonSize",
        "spacing",
        "cornerRadius",
        "fontSize",
        "borderWidth",
        "buttonColor",
        "borderColor",
        "textColor",
        "outerBorderWidth",
        "outerBorderColor",
        "outerBorderRadius",
        "outerBorderPaddingTop",
        "outerBorderPaddingBottom",
        "outerBorderPaddingLeft",
        "outerBorderPaddingRight",
        "outerBackgroundColor",
    ];

    pub fn from_parts(spec: &GridSpec, frame: &OuterFrameSpec) -> Self {
        Self {
            rows: spec.rows,
            cols: spec.cols,
            button_size: spec.button_size,
            spacing: spec.spacing,
            corner_radius: spec.corner_radius,
            font_size: spec.font_size,
            border_width: spec.border_width,
            button_color: spec.button_color,
            border_color: spec.border_color,
            text_color: spec.text_color,
            outer_border_width: frame.border_width,
            outer_border_color: frame.border_color,
            outer_border_radius: frame.corner_radius,
            outer_border_padding_top: frame.padding.top,
            outer_border_padding_bottom: frame.padding.bottom,
            outer_border_padding_left: frame.padding.left,
            outer_border_padding_right: frame.padding.right,
            outer_background_color: frame.background_color,
        }
    }

    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            rows: self.rows,
            cols: self.cols,
            button_size: self.button_size,
            spacing: self.spacing,
            corner_radius: self.corner_radius,
            font_size: self.font_size,
            border_width: self.border_width,
            button_color: self.button_color,
            border_color: self.border_color,
            text_color: self.text_color,
        }
    }

    pub fn frame_spec(&self) -> OuterFrameSpec {
        OuterFrameSpec {
            border_width: self.outer_border_width,
            border_color: self.outer_border_color,
            corner_radius: self.outer_border_radius,
            padding: Padding {
                top: self.outer_border_padding_top,
                bottom: self.outer_border_padding_bottom,
                left: self.outer_border_padding_left,
                right: self.outer_border_padding_right,
            },
            background_color: self.outer_background_color,
        }
    }
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self::from_parts(&GridSpec::default(), &OuterFrameSpec::default())
    }
}

impl Document {
    /// Snapshot of a design at the current version
    pub fn from_design(design: &KeypadDesign) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            settings: DocumentSettings::from_parts(design.spec(), design.frame()),
            buttons: design.grid().clone(),
        }
    }

    /// Convert to a design, rejecting grids that disagree with the settings
    pub fn into_design(self) -> CodecResult<KeypadDesign> {
        check_grid_shape(&self.buttons, self.settings.rows, self.settings.cols)?;
        Ok(KeypadDesign::from_parts(
            self.settings.grid_spec(),
            self.settings.frame_spec(),
            self.buttons,
        ))
    }
}

fn check_grid_shape(grid: &Grid, rows: usize, cols: usize) -> CodecResult<()> {
    let expected = grid.col_count();
    if let Some((row, cells)) = grid
        .rows()
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != expected)
    {
        return Err(CodecError::RaggedGrid {
            row,
            len: cells.len(),
            expected,
        });
    }

    let found_rows = grid.row_count();
    let shape_ok = found_rows == rows && (rows == 0 || expected == cols);
    if !shape_ok {
        return Err(CodecError::GridMismatch {
            rows,
            cols,
            found_rows,
            found_cols: expected,
        });
    }
    Ok(())
}

/// A successfully loaded document.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDesign {
    pub design: KeypadDesign,
    pub migration: MigrationReport,
}

/// Serialize the full working state
pub fn serialize(design: &KeypadDesign) -> Document {
    Document::from_design(design)
}

/// Serialize to JSON text
pub fn to_json(design: &KeypadDesign, pretty: bool) -> CodecResult<String> {
    let document = serialize(design);
    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Parse JSON text into a design
pub fn parse(json: &str) -> CodecResult<KeypadDesign> {
    load(json).map(|loaded| loaded.design)
}

/// Parse JSON text, also reporting which migrations ran
pub fn load(json: &str) -> CodecResult<LoadedDesign> {
    let value: Value = serde_json::from_str(json)?;
    load_value(value)
}

/// Parse an already-decoded JSON tree into a design
pub fn parse_value(value: Value) -> CodecResult<KeypadDesign> {
    load_value(value).map(|loaded| loaded.design)
}

/// Structural check, migration, typed decode, shape check
pub fn load_value(value: Value) -> CodecResult<LoadedDesign> {
    let Value::Object(mut object) = value else {
        return Err(CodecError::NotAnObject);
    };
    for section in ["settings", "buttons"] {
        if !object.contains_key(section) {
            return Err(CodecError::MissingSection(section));
        }
    }

    let migration = MigrationChain::standard().run(&mut object)?;
    warn_missing_settings(&object);

    let document: Document = serde_json::from_value(Value::Object(object))?;
    let design = document.into_design()?;
    tracing::debug!(
        "Loaded {}x{} design (source version {:?}, {} migration steps)",
        design.spec().rows,
        design.spec().cols,
        migration.source_version,
        migration.applied.len()
    );

    Ok(LoadedDesign { design, migration })
}

fn warn_missing_settings(object: &serde_json::Map<String, Value>) {
    let Some(settings) = object.get("settings").and_then(Value::as_object) else {
        return;
    };
    let missing: Vec<&str> = DocumentSettings::KEYS
        .iter()
        .copied()
        .filter(|key| !settings.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        tracing::warn!("Settings missing from document, using defaults: {}", missing.join(", "));
    }
}

/// Replace `design` with the parsed document. On error `design` is unchanged.
pub fn apply_to(design: &mut KeypadDesign, json: &str) -> CodecResult<MigrationReport> {
    let loaded = load(json)?;
    *design = loaded.design;
    Ok(loaded.migration)
}
