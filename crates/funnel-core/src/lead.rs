//! # Lead Types
//!
//! Contact-capture payload and its local validation rules.
//! Validation runs before any network call; a lead with a non-empty
//! error map is never submitted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A prospective customer's contact submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Full name
    pub name: String,

    /// Email address (basic `local@domain` shape)
    pub email: String,

    /// Phone number
    pub phone: String,

    /// Tag identifying the UI origin of the submission
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "unknown".to_string()
}

impl Lead {
    /// Create a lead with the default source tag
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            source: default_source(),
        }
    }

    /// Set the UI-origin source tag
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Validate all fields locally.
    ///
    /// Returns the field-keyed error map on failure. Rules: name and phone
    /// non-empty (after trimming), email matching the `local@domain.tld`
    /// shape.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if !email_shape_ok(self.email.trim()) {
            errors.insert("email", "Email is invalid");
        }

        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Basic `\S+@\S+\.\S+` email shape check: non-empty local part, and a
/// domain containing a dot with non-empty segments. No whitespace anywhere.
fn email_shape_ok(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Field-keyed validation error map.
///
/// Keys are field names (`name`, `email`, `phone`); values are the
/// user-correctable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a single field, if that field failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Field names that failed validation
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }
}

/// Response of `POST /api/leads/capture`
#[derive(Debug, Clone, Deserialize)]
pub struct LeadReceipt {
    pub success: bool,

    /// Identifier the collaborator assigned to the stored lead
    #[serde(default)]
    pub lead_id: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> Lead {
        Lead::new("Joao Silva", "joao@example.com", "+55 11 99999-0000")
            .with_source("hero_form")
    }

    #[test]
    fn test_valid_lead_has_no_errors() {
        assert!(valid_lead().validate().is_ok());
    }

    #[test]
    fn test_missing_name() {
        let mut lead = valid_lead();
        lead.name = "   ".to_string();

        let errors = lead.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("name").is_some());
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn test_missing_phone() {
        let mut lead = valid_lead();
        lead.phone = String::new();

        let errors = lead.validate().unwrap_err();
        assert!(errors.get("phone").is_some());
    }

    #[test]
    fn test_all_fields_missing() {
        let lead = Lead::new("", "", "");
        let errors = lead.validate().unwrap_err();

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["email", "name", "phone"]);
    }

    #[test]
    fn test_email_shape() {
        assert!(email_shape_ok("user@example.com"));
        assert!(email_shape_ok("first.last@sub.example.co"));
        assert!(!email_shape_ok("user@example"));
        assert!(!email_shape_ok("@example.com"));
        assert!(!email_shape_ok("user@.com"));
        assert!(!email_shape_ok("user@example."));
        assert!(!email_shape_ok("user name@example.com"));
        assert!(!email_shape_ok("plainstring"));
    }

    #[test]
    fn test_invalid_email_keyed() {
        let mut lead = valid_lead();
        lead.email = "not-an-email".to_string();

        let errors = lead.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is invalid"));
    }

    #[test]
    fn test_errors_display() {
        let lead = Lead::new("", "x@y.z", "");
        let errors = lead.validate().unwrap_err();
        let display = errors.to_string();

        assert!(display.contains("name: Name is required"));
        assert!(display.contains("phone: Phone is required"));
    }

    #[test]
    fn test_default_source_on_deserialize() {
        let lead: Lead =
            serde_json::from_str(r#"{"name":"A","email":"a@b.co","phone":"1"}"#).unwrap();
        assert_eq!(lead.source, "unknown");
    }
}
