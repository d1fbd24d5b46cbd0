//! # funnel-core
//!
//! Core types for the rov-funnel client.
//!
//! This crate provides:
//! - `Lead` and its field-keyed local validation
//! - Checkout wire types: `CheckoutSessionRequest`, `CheckoutSessionResult`,
//!   `PaymentStatus`
//! - `AnalyticsEvent` for fire-and-forget tracking
//! - `CourseInfo` for the promotional content structure
//! - `FunnelError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use funnel_core::Lead;
//!
//! let lead = Lead::new("Joao Silva", "joao@example.com", "+55 11 99999-0000")
//!     .with_source("hero_form");
//!
//! assert!(lead.validate().is_ok());
//! ```

pub mod analytics;
pub mod checkout;
pub mod course;
pub mod error;
pub mod lead;

// Re-exports for convenience
pub use analytics::AnalyticsEvent;
pub use checkout::{
    CheckoutSessionRequest, CheckoutSessionResult, CustomerData, PaymentSnapshot, PaymentState,
    PaymentStatus, SessionStatus,
};
pub use course::CourseInfo;
pub use error::{FunnelError, FunnelResult};
pub use lead::{Lead, LeadReceipt, ValidationErrors};
