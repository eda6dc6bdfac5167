//! Vehicle registry lookup types.
//!
//! Registry records are opaque: the pipeline never validates their schema and
//! forwards them verbatim to the model as context text.

use serde::{Deserialize, Serialize};

use std::fmt;

/// A JSON record returned by the vehicle registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleRecord(pub serde_json::Value);

impl VehicleRecord {
    /// Whether the record carries no data at all.
    ///
    /// `null`, `[]`, `{}` and `""` all count as empty.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => true,
            serde_json::Value::Array(items) => items.is_empty(),
            serde_json::Value::Object(fields) => fields.is_empty(),
            serde_json::Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Compact JSON rendering, key order preserved.
    pub fn to_compact_json(&self) -> String {
        self.0.to_string()
    }
}

/// Result of a single registry lookup.
///
/// `NotFound` and `TransportError` are kept apart so the caller can decide
/// how a failed lookup is rendered to the model.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(VehicleRecord),
    NotFound,
    TransportError(String),
}

impl LookupOutcome {
    pub fn status(&self) -> EnrichmentStatus {
        match self {
            LookupOutcome::Found(_) => EnrichmentStatus::Found,
            LookupOutcome::NotFound => EnrichmentStatus::NotFound,
            LookupOutcome::TransportError(_) => EnrichmentStatus::Unavailable,
        }
    }
}

/// Caller-facing summary of what enrichment did for this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentStatus {
    Found,
    NotFound,
    Unavailable,
}

impl fmt::Display for EnrichmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrichmentStatus::Found => write!(f, "found"),
            EnrichmentStatus::NotFound => write!(f, "not_found"),
            EnrichmentStatus::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// The plate that was looked up and how the lookup ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentReport {
    pub plate: String,
    pub status: EnrichmentStatus,
}

/// How a registry transport failure is rendered into the conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryErrorPolicy {
    /// Inject the same "no data found" system turn as an empty result.
    #[default]
    NoData,
    /// Inject nothing and continue without vehicle context.
    Skip,
}
