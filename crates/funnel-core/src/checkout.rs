//! # Checkout Wire Types
//!
//! Request/response shapes for the checkout-session and payment-status
//! endpoints, plus the payment status snapshot the poller works over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arbitrary customer fields merged into the session request body
pub type CustomerData = BTreeMap<String, serde_json::Value>;

/// Body of `POST /api/checkout/session`.
///
/// Customer fields are flattened into the top-level object, matching the
/// collaborator's `{package_id, origin_url, ...customer}` shape.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSessionRequest {
    /// Constant package identifier for the course being sold
    pub package_id: String,

    /// Origin URL of the page that triggered the purchase
    pub origin_url: String,

    /// Optional customer data (email, name, ...)
    #[serde(flatten)]
    pub customer: CustomerData,
}

impl CheckoutSessionRequest {
    pub fn new(package_id: impl Into<String>, origin_url: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
            origin_url: origin_url.into(),
            customer: CustomerData::new(),
        }
    }

    /// Merge customer data into the request body
    pub fn with_customer(mut self, customer: CustomerData) -> Self {
        self.customer = customer;
        self
    }
}

/// Response of `POST /api/checkout/session`.
///
/// Only `url` is consumed; its absence is an error condition handled by
/// the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSessionResult {
    /// Hosted checkout page to redirect the user agent to
    #[serde(default)]
    pub url: Option<String>,

    /// Provider session id, when the collaborator includes one
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Session lifecycle state reported by the collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Session created, awaiting payment
    Open,
    /// Checkout flow finished
    Complete,
    /// Session is no longer payable
    Expired,
    /// Any state this client does not model
    #[serde(other)]
    Unknown,
}

/// Payment state reported by the collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Paid,
    Unpaid,
    NoPaymentRequired,
    #[serde(other)]
    Unknown,
}

/// Snapshot returned by `GET /api/checkout/status/{session_id}`.
///
/// Each poll produces a fresh snapshot; nothing is cached across polls
/// beyond the latest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatus {
    /// Session lifecycle state
    pub status: SessionStatus,

    /// Payment state within the session
    pub payment_status: PaymentState,
}

impl PaymentStatus {
    /// Terminal success: the payment went through
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentState::Paid
    }

    /// Terminal failure: the session can no longer be paid
    pub fn is_expired(&self) -> bool {
        self.status == SessionStatus::Expired
    }
}

/// Last-known status value kept for observers that do not poll themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSnapshot {
    pub status: PaymentStatus,
    /// When this snapshot was fetched
    pub checked_at: DateTime<Utc>,
}

impl PaymentSnapshot {
    pub fn now(status: PaymentStatus) -> Self {
        Self {
            status,
            checked_at: Utc::now(),
        }
    }
}
