//! # Checkout Gateway
//!
//! Creates a checkout session against the payment collaborator and
//! redirects the user agent to the hosted checkout page.

use crate::client::{read_json, ApiClient};
use crate::navigator::Navigator;
use funnel_core::{CheckoutSessionRequest, CheckoutSessionResult, CustomerData, FunnelError, FunnelResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Checkout session creation + redirect
pub struct CheckoutGateway {
    api: ApiClient,
    navigator: Arc<dyn Navigator>,
    /// Origin URL of the page hosting the purchase trigger
    origin_url: String,
    processing: AtomicBool,
}

impl CheckoutGateway {
    pub fn new(
        api: ApiClient,
        navigator: Arc<dyn Navigator>,
        origin_url: impl Into<String>,
    ) -> Self {
        Self {
            api,
            navigator,
            origin_url: origin_url.into(),
            processing: AtomicBool::new(false),
        }
    }

    /// True while a session request is in flight.
    ///
    /// Advisory only: callers use it to disable the triggering control. A
    /// second call issued despite the flag still executes.
    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::SeqCst)
    }

    /// Create a checkout session and redirect to the returned URL.
    ///
    /// Issues exactly one network call. On success the injected
    /// `Navigator` performs a full-page redirect and the URL is returned.
    /// A response without a `url` field fails with
    /// `FunnelError::MissingCheckoutUrl`; no navigation occurs. Failures
    /// are logged here and rethrown; presenting them is the caller's job.
    #[instrument(skip(self, customer))]
    pub async fn create_checkout_session(&self, customer: CustomerData) -> FunnelResult<String> {
        self.processing.store(true, Ordering::SeqCst);
        let result = self.create_inner(customer).await;
        self.processing.store(false, Ordering::SeqCst);

        if let Err(ref e) = result {
            error!("Checkout session creation failed: {}", e);
        }
        result
    }

    async fn create_inner(&self, customer: CustomerData) -> FunnelResult<String> {
        let request = CheckoutSessionRequest::new(
            self.api.config().package_id.as_str(),
            self.origin_url.as_str(),
        )
        .with_customer(customer);

        // Fresh key per purchase attempt; a server honoring it can
        // collapse duplicate submissions.
        let idempotency_key = Uuid::new_v4().to_string();

        debug!(
            "Creating checkout session: package={}, origin={}",
            request.package_id, request.origin_url
        );

        let response = self
            .api
            .http()
            .post(self.api.api_url("/checkout/session"))
            .header("Idempotency-Key", &idempotency_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| FunnelError::Request(e.to_string()))?;

        let result: CheckoutSessionResult = read_json(response).await?;

        let Some(url) = result.url else {
            return Err(FunnelError::MissingCheckoutUrl);
        };

        info!("Checkout session created, redirecting: url={}", url);
        self.navigator.navigate(&url).await?;

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use wiremock::matchers::{body_partial_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Records navigations instead of performing them
    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn visited(&self) -> Vec<String> {
            self.visited.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Navigator for RecordingNavigator {
        async fn navigate(&self, url: &str) -> FunnelResult<()> {
            self.visited.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn gateway(server_uri: &str, navigator: Arc<RecordingNavigator>) -> CheckoutGateway {
        CheckoutGateway::new(test_client(server_uri), navigator, "https://rov.example")
    }

    #[tokio::test]
    async fn test_redirects_to_returned_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/checkout/session"))
            .and(body_partial_json(serde_json::json!({
                "package_id": "vaga_blindada",
                "origin_url": "https://rov.example"
            })))
            .and(header_exists("Idempotency-Key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"url": "https://pay.example/abc"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let navigator = Arc::new(RecordingNavigator::default());
        let gateway = gateway(&server.uri(), navigator.clone());

        let url = gateway
            .create_checkout_session(CustomerData::new())
            .await
            .unwrap();

        assert_eq!(url, "https://pay.example/abc");
        assert_eq!(navigator.visited(), vec!["https://pay.example/abc"]);
        assert!(!gateway.is_processing());
    }

    #[tokio::test]
    async fn test_customer_data_flattened_into_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/checkout/session"))
            .and(body_partial_json(serde_json::json!({"email": "joao@example.com"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"url": "https://pay.example/xyz"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let navigator = Arc::new(RecordingNavigator::default());
        let gateway = gateway(&server.uri(), navigator);

        let mut customer = CustomerData::new();
        customer.insert("email".into(), serde_json::json!("joao@example.com"));

        gateway.create_checkout_session(customer).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_url_fails_without_navigation() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/checkout/session"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"session_id": "cs_123"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let navigator = Arc::new(RecordingNavigator::default());
        let gateway = gateway(&server.uri(), navigator.clone());

        let err = gateway
            .create_checkout_session(CustomerData::new())
            .await
            .unwrap_err();

        assert!(matches!(err, FunnelError::MissingCheckoutUrl));
        assert_eq!(err.to_string(), "No checkout URL received");
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn test_server_failure_clears_processing_flag() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/checkout/session"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let navigator = Arc::new(RecordingNavigator::default());
        let gateway = gateway(&server.uri(), navigator.clone());

        let err = gateway
            .create_checkout_session(CustomerData::new())
            .await
            .unwrap_err();

        assert!(matches!(err, FunnelError::Request(_)));
        assert!(navigator.visited().is_empty());
        assert!(!gateway.is_processing());
    }
}
