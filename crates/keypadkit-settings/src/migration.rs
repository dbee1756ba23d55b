//! Schema migration for configuration documents.
//!
//! Migrations run on the untyped JSON tree before it is decoded. Each step
//! recognises the shape it upgrades by the presence of a legacy key, never
//! by comparing version strings, so a document is migrated correctly even
//! when its `version` field is missing or wrong. New schema changes add a
//! step to [`MigrationChain::standard`].

use crate::codec::CURRENT_VERSION;
use crate::error::{CodecError, CodecResult};
use serde_json::{Map, Value};

/// One upgrade from a precursor shape to the next.
pub trait MigrationStep {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// True when `settings` still has the precursor shape.
    fn applies_to(&self, settings: &Map<String, Value>) -> bool;

    /// Rewrites `settings` into the successor shape.
    fn apply(&self, settings: &mut Map<String, Value>) -> CodecResult<()>;
}

/// Single `outerBorderPadding` (1.0) to four per-side paddings (1.1).
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyPaddingStep;

impl LegacyPaddingStep {
    pub const LEGACY_KEY: &'static str = "outerBorderPadding";
    pub const SIDE_KEYS: [&'static str; 4] = [
        "outerBorderPaddingTop",
        "outerBorderPaddingBottom",
        "outerBorderPaddingLeft",
        "outerBorderPaddingRight",
    ];
}

impl MigrationStep for LegacyPaddingStep {
    fn name(&self) -> &'static str {
        "legacy-uniform-padding"
    }

    fn applies_to(&self, settings: &Map<String, Value>) -> bool {
        settings.contains_key(Self::LEGACY_KEY)
    }

    fn apply(&self, settings: &mut Map<String, Value>) -> CodecResult<()> {
        let legacy = settings.remove(Self::LEGACY_KEY).unwrap_or(Value::Null);
        let value = legacy.as_f64().ok_or_else(|| CodecError::InvalidField {
            field: Self::LEGACY_KEY.to_string(),
            reason: format!("expected a number, found {}", legacy),
        })?;

        // The legacy value applies to every side, replacing any per-side keys
        for key in Self::SIDE_KEYS {
            settings.insert(key.to_string(), Value::from(value));
        }
        Ok(())
    }
}

/// What a migration run changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MigrationReport {
    /// `version` as found in the document.
    pub source_version: Option<String>,
    /// Names of the steps that ran, in order.
    pub applied: Vec<&'static str>,
}

impl MigrationReport {
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Ordered list of migration steps.
pub struct MigrationChain {
    steps: Vec<Box<dyn MigrationStep>>,
}

impl MigrationChain {
    /// Every step known to this build, oldest first.
    pub fn standard() -> Self {
        Self {
            steps: vec![Box::new(LegacyPaddingStep)],
        }
    }

    /// Runs every applicable step and stamps the current version.
    ///
    /// The caller must already have checked that `document` is an object
    /// with a `settings` section.
    pub fn run(&self, document: &mut Map<String, Value>) -> CodecResult<MigrationReport> {
        let mut report = MigrationReport {
            source_version: document
                .get("version")
                .and_then(Value::as_str)
                .map(str::to_string),
            applied: Vec::new(),
        };

        let settings = document
            .get_mut("settings")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| CodecError::InvalidField {
                field: "settings".to_string(),
                reason: "expected an object".to_string(),
            })?;

        for step in &self.steps {
            if step.applies_to(settings) {
                tracing::debug!("Applying migration step '{}'", step.name());
                step.apply(settings)?;
                report.applied.push(step.name());
            }
        }

        document.insert("version".to_string(), Value::from(CURRENT_VERSION));
        Ok(report)
    }
}

impl Default for MigrationChain {
    fn default() -> Self {
        Self::standard()
    }
}
