//! # Analytics Event Types
//!
//! Fire-and-forget event payloads. No response data is ever consumed.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Body of `POST /api/analytics/event`
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEvent {
    /// Event tag (e.g., `page_view`, `cta_click`, `lead_capture`)
    pub event: String,

    /// Tag identifying the UI origin of the event
    pub source: String,

    /// Arbitrary scalar metadata
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(event: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            source: source.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Add a single metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Replace the whole metadata mapping
    pub fn with_metadata_map(mut self, metadata: BTreeMap<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }
}
