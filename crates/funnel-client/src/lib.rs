//! # funnel-client
//!
//! HTTP client components for the rov-funnel backend API.
//!
//! This crate provides:
//! - `ApiClient` holding the backend base URL explicitly
//! - `CheckoutGateway` for session creation + user-agent redirect
//! - `StatusPoller` for cancellable, deduplicated payment-status polling
//! - `LeadCaptureForm` for validate-then-submit contact capture
//! - `AnalyticsEmitter` for fire-and-forget event tracking
//!
//! ## Example
//!
//! ```rust,ignore
//! use funnel_client::{ApiClient, CheckoutGateway, NoopNavigator, StatusPoller};
//! use funnel_core::CustomerData;
//! use std::sync::Arc;
//!
//! let api = ApiClient::from_env()?;
//!
//! // Kick off a purchase; the navigator performs the redirect
//! let gateway = CheckoutGateway::new(api.clone(), Arc::new(NoopNavigator), "https://rov.example");
//! gateway.create_checkout_session(CustomerData::new()).await?;
//!
//! // On the redirect-return page, poll the session carried in the URL
//! let poller = StatusPoller::new(api);
//! let status = poller.poll("cs_123").await?;
//! ```

pub mod analytics;
pub mod checkout;
pub mod client;
pub mod config;
pub mod leads;
pub mod navigator;
pub mod status;

// Re-exports for convenience
pub use analytics::AnalyticsEmitter;
pub use checkout::CheckoutGateway;
pub use client::ApiClient;
pub use config::{FunnelConfig, DEFAULT_PACKAGE_ID};
pub use leads::LeadCaptureForm;
pub use navigator::{Navigator, NoopNavigator};
pub use status::{PollOptions, StatusPoller};

#[cfg(test)]
pub(crate) mod tests {
    use tracing_subscriber::EnvFilter;

    /// Shared test logging init; safe to call from every test
    pub(crate) fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}
