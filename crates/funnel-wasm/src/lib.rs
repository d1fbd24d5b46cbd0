//! # funnel-wasm
//!
//! WebAssembly bindings for rov-funnel-rs.
//!
//! This crate provides WASM-compatible functions for browser hosts:
//! - Redirecting the user agent to the hosted checkout page
//! - Recovering the session id from the redirect-return URL
//! - Client-side lead validation before any network call
//! - BRL price formatting
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { validate_lead, session_id_from_url } from 'rov-funnel-wasm';
//!
//! await init();
//!
//! const errors = validate_lead(name, email, phone);
//! if (Object.keys(errors).length === 0) {
//!   // submit the lead
//! }
//!
//! const sessionId = session_id_from_url();
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use funnel_core::lead::ValidationErrors;
use funnel_core::Lead;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module (called automatically)
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Full-page redirect to a URL (e.g., the hosted checkout page).
///
/// There is no return to the calling code once this succeeds.
#[wasm_bindgen]
pub fn redirect_to(url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.location().set_href(url)
}

/// Read a query parameter from the current page URL
#[wasm_bindgen]
pub fn url_parameter(name: &str) -> Result<Option<String>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let search = window.location().search()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search)?;
    Ok(params.get(name))
}

/// Session id carried back on the redirect-return page
#[wasm_bindgen]
pub fn session_id_from_url() -> Result<Option<String>, JsValue> {
    url_parameter("session_id")
}

/// Validate lead fields client-side.
///
/// Returns a field-keyed error object; empty when the lead is valid.
/// Mirrors the server-side rules so invalid input never leaves the page.
#[wasm_bindgen]
pub fn validate_lead(name: &str, email: &str, phone: &str) -> Result<JsValue, JsValue> {
    let errors = lead_errors(name, email, phone);
    serde_wasm_bindgen::to_value(&errors).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn lead_errors(name: &str, email: &str, phone: &str) -> ValidationErrors {
    match Lead::new(name, email, phone).validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    }
}

/// Format a price in BRL for display (e.g., `297.0` -> `"R$ 297,00"`)
#[wasm_bindgen]
pub fn format_price_brl(amount: f64) -> String {
    format!("R$ {:.2}", amount).replace('.', ",")
}

/// Log to browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
