use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Severity is intentionally small and totally ordered: anything at or above
/// `Error` blocks the transaction, anything below is advisory.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Blocking severities fail the pipeline; advisory ones only inform.
    pub fn is_blocking(self) -> bool {
        self >= Severity::Error
    }
}

/// One detected problem in the context under validation.
///
/// Immutable once constructed: build it with [`Violation::new`] and the
/// `with_*` helpers, then hand it to an outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    /// Machine-readable, stable code (e.g. `STK-002`).
    pub code: String,
    /// Human-readable message, may embed computed values.
    pub message: String,
    pub severity: Severity,

    /// Names the offending context attribute, when one can be singled out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Open key/value payload for audit trails and event consumers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, JsonValue>,
}

impl Violation {
    pub fn new(code: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
            field: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Error, message)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Warning, message)
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Info, message)
    }

    pub fn critical(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Critical, message)
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.severity.is_blocking()
    }
}
