//! Error types for the settings crate.
//!
//! Codec errors describe documents that cannot become a design. Settings
//! errors cover the application configuration file and its directory.

use std::io;
use thiserror::Error;

/// Errors raised while reading a configuration document.
///
/// A parse that fails with any of these leaves the caller's design untouched.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The document is not a JSON object.
    #[error("Invalid configuration file format: expected a JSON object")]
    NotAnObject,

    /// A required top-level section is absent.
    #[error("Invalid configuration file format: missing '{0}'")]
    MissingSection(&'static str),

    /// A field has the wrong type or an unusable value.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// Button rows have different lengths.
    #[error("Button grid is ragged: row {row} has {len} buttons, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The button grid does not match the declared dimensions.
    #[error("Button grid is {found_rows}x{found_cols} but settings declare {rows}x{cols}")]
    GridMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    /// JSON syntax or typed decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration directory could not be found or created.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A configuration document error occurred.
    #[error("Document error: {0}")]
    Codec(#[from] CodecError),
}

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
