//! KeypadKit Settings Crate
//!
//! Configuration documents (serialize, parse, migrate), file persistence,
//! and the application configuration file.

pub mod codec;
pub mod config;
pub mod error;
pub mod migration;
pub mod persistence;

pub use codec::{
    apply_to, load, load_value, parse, parse_value, serialize, to_json, Document,
    DocumentSettings, LoadedDesign, CURRENT_VERSION,
};
pub use config::{Config, DisplaySettings, ExportSettings, RenderSettings};
pub use error::{CodecError, CodecResult, SettingsError, SettingsResult};
pub use migration::{LegacyPaddingStep, MigrationChain, MigrationReport, MigrationStep};
pub use persistence::{export_svg, load_design, load_document, migrate_file, save_document};
