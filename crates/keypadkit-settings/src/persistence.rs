//! File I/O for configuration documents and SVG exports.

use crate::codec::{self, LoadedDesign};
use crate::migration::MigrationReport;
use anyhow::{Context, Result};
use keypadkit_designer::svg_renderer::render_document;
use keypadkit_designer::{render_keypad, KeypadDesign, RenderOptions};
use std::path::Path;

/// Load a configuration document from disk
pub fn load_document(path: impl AsRef<Path>) -> Result<LoadedDesign> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
    let loaded = codec::load(&content)
        .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;
    Ok(loaded)
}

/// Load only the design from a configuration document
pub fn load_design(path: impl AsRef<Path>) -> Result<KeypadDesign> {
    load_document(path).map(|loaded| loaded.design)
}

/// Save a design as a configuration document
pub fn save_document(path: impl AsRef<Path>, design: &KeypadDesign, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = codec::to_json(design, pretty).context("Failed to serialize design")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write configuration file {}", path.display()))?;
    tracing::info!("Saved configuration to {}", path.display());
    Ok(())
}

/// Render a design and write it as an SVG document
pub fn export_svg(path: impl AsRef<Path>, design: &KeypadDesign, options: &RenderOptions) -> Result<()> {
    let path = path.as_ref();
    let svg = render_document(&render_keypad(design, options));
    std::fs::write(path, svg)
        .with_context(|| format!("Failed to write SVG file {}", path.display()))?;
    tracing::info!("Exported overlay to {}", path.display());
    Ok(())
}

/// Rewrite a document in the current schema
pub fn migrate_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    pretty: bool,
) -> Result<MigrationReport> {
    let loaded = load_document(input)?;
    save_document(output, &loaded.design, pretty)?;
    Ok(loaded.migration)
}
