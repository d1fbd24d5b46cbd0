//! # Analytics Emitter
//!
//! Best-effort event notification. One call per event, no batching, no
//! retries, no ordering between concurrent calls. Failures are logged
//! and swallowed; nothing here ever reaches the user.

use crate::client::ApiClient;
use funnel_core::AnalyticsEvent;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// Fire-and-forget analytics client
#[derive(Clone)]
pub struct AnalyticsEmitter {
    api: ApiClient,
}

impl AnalyticsEmitter {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Track an event by tag; never fails observably
    pub async fn track_event(
        &self,
        event: &str,
        source: &str,
        metadata: BTreeMap<String, Value>,
    ) {
        self.track(AnalyticsEvent::new(event, source).with_metadata_map(metadata))
            .await;
    }

    /// Track a pre-built event; never fails observably
    #[instrument(skip(self, event), fields(event = %event.event, source = %event.source))]
    pub async fn track(&self, event: AnalyticsEvent) {
        match self
            .api
            .post_json::<_, Value>("/analytics/event", &event)
            .await
        {
            Ok(_) => debug!("Analytics event sent"),
            Err(e) => warn!("Analytics event dropped: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_event_posted() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analytics/event"))
            .and(body_partial_json(serde_json::json!({
                "event": "cta_click",
                "source": "hero",
                "metadata": {"button": "buy_now"}
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let emitter = AnalyticsEmitter::new(test_client(&server.uri()));
        let mut metadata = BTreeMap::new();
        metadata.insert("button".to_string(), serde_json::json!("buy_now"));

        emitter.track_event("cta_click", "hero", metadata).await;
    }

    #[tokio::test]
    async fn test_failures_are_swallowed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analytics/event"))
            .respond_with(ResponseTemplate::new(500).set_body_string("down"))
            .expect(1)
            .mount(&server)
            .await;

        let emitter = AnalyticsEmitter::new(test_client(&server.uri()));
        // Returns () even though the endpoint errored
        emitter
            .track_event("page_view", "landing", BTreeMap::new())
            .await;
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_swallowed() {
        // Port from a server that was shut down; connection refused
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let emitter = AnalyticsEmitter::new(test_client(&uri));
        emitter
            .track_event("page_view", "landing", BTreeMap::new())
            .await;
    }
}
