//! Contact form intake: field validation and notification dispatch.

pub mod handlers;
pub mod mailer;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Raw form body. Fields are optional so absent keys surface as validation errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A form that passed validation, ready for dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

/// Checks presence of every field, then the email shape.
///
/// Whitespace-only fields count as missing. The email is matched as sent, so
/// padding around it fails the format check; name and message are trimmed.
pub fn validate(form: ContactForm) -> Result<ContactSubmission, AppError> {
    let (Some(name), Some(email), Some(message)) = (
        required(form.name),
        required(form.email),
        required(form.message),
    ) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    if !is_valid_email(&email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    Ok(ContactSubmission {
        name: name.trim().to_string(),
        email,
        message: message.trim().to_string(),
        received_at: Utc::now(),
    })
}
