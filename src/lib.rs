//! # KeypadKit
//!
//! Printable overlays for membrane keypads:
//! - Exact-size button grids (every button is exactly its configured size)
//! - Text labels with `|` line breaks and built-in symbols
//! - SVG output that prints at 100% scale
//! - Versioned JSON configurations with automatic migration
//!
//! ## Architecture
//!
//! KeypadKit is organized as a workspace with multiple crates:
//!
//! 1. **keypadkit-core** - Colours, units, geometric values, errors
//! 2. **keypadkit-designer** - Design model, layout, shape and SVG rendering
//! 3. **keypadkit-settings** - Configuration documents, migration, app config
//! 4. **keypadkit** - Command-line front end that integrates all crates

pub mod cli;

pub use keypadkit_core::{Color, CoreError, MeasurementSystem};
pub use keypadkit_designer::{
    render_keypad, ButtonOverride, ContentType, DesignSummary, Grid, GridSpec, KeypadDesign,
    Layout, OuterFrameSpec, Padding, RenderOptions,
};
pub use keypadkit_settings::{CodecError, Config, MigrationReport, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr so documents can be piped from stdout
/// - RUST_LOG environment variable support, falling back to `default_level`
pub fn init_logging(default_level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
