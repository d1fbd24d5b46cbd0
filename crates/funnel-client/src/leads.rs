//! # Lead Capture
//!
//! Validate-then-submit for the contact form. Local validation never
//! reaches the network; a successful submission is terminal for the form
//! instance and best-effort emits a follow-up `lead_capture` event.

use crate::analytics::AnalyticsEmitter;
use crate::client::ApiClient;
use funnel_core::{AnalyticsEvent, FunnelError, FunnelResult, Lead, LeadReceipt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::{error, info, instrument};

/// One contact-form instance
pub struct LeadCaptureForm {
    api: ApiClient,
    analytics: AnalyticsEmitter,
    /// Tag identifying the UI origin of submissions from this form
    source: String,
    loading: AtomicBool,
    /// Set once on success; the form is terminal afterwards
    receipt: Mutex<Option<LeadReceipt>>,
}

impl LeadCaptureForm {
    pub fn new(api: ApiClient, source: impl Into<String>) -> Self {
        let analytics = AnalyticsEmitter::new(api.clone());
        Self {
            api,
            analytics,
            source: source.into(),
            loading: AtomicBool::new(false),
            receipt: Mutex::new(None),
        }
    }

    /// True while a submission is in flight.
    ///
    /// Advisory only, like the checkout `processing` flag: callers use it
    /// to disable the submit control.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// True once a submission has succeeded
    pub fn is_submitted(&self) -> bool {
        self.receipt.lock().expect("receipt lock poisoned").is_some()
    }

    /// Receipt of the successful submission, if any
    pub fn receipt(&self) -> Option<LeadReceipt> {
        self.receipt.lock().expect("receipt lock poisoned").clone()
    }

    /// Validate and submit a lead.
    ///
    /// Field-level failures return `FunnelError::Validation` with the
    /// field-keyed map and make no network call. The form's `source` tag
    /// replaces whatever the lead carries. A second submit after success
    /// fails with `AlreadySubmitted`.
    #[instrument(skip(self, lead), fields(source = %self.source))]
    pub async fn submit(&self, lead: &Lead) -> FunnelResult<LeadReceipt> {
        if self.is_submitted() {
            return Err(FunnelError::AlreadySubmitted);
        }

        lead.validate().map_err(FunnelError::Validation)?;

        self.loading.store(true, Ordering::SeqCst);
        let result = self.submit_inner(lead).await;
        self.loading.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_inner(&self, lead: &Lead) -> FunnelResult<LeadReceipt> {
        let payload = lead.clone().with_source(self.source.as_str());

        let receipt: LeadReceipt = self
            .api
            .post_json("/leads/capture", &payload)
            .await
            .map_err(|e| {
                error!("Lead submission failed: {}", e);
                e
            })?;

        info!(
            "Lead captured: source={}, lead_id={:?}",
            self.source, receipt.lead_id
        );

        *self.receipt.lock().expect("receipt lock poisoned") = Some(receipt.clone());

        // Follow-up event; best-effort, failure never surfaces
        let mut event = AnalyticsEvent::new("lead_capture", self.source.as_str());
        if let Some(ref lead_id) = receipt.lead_id {
            event = event.with_metadata("lead_id", lead_id.as_str());
        }
        self.analytics.track(event).await;

        Ok(receipt)
    }
}
