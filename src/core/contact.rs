use crate::domain::model::{ContactSubmission, Notice, DEFAULT_BUDGET, DEFAULT_COMPANY};
use crate::domain::ports::ContactNotifier;
use crate::utils::error::{Result, SiteError};
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const SUCCESS_NOTICE: &str = "Thanks for reaching out! We'll get back to you within 24 hours.";
pub const ERROR_NOTICE: &str = "Please fill out all required fields.";
pub const DELIVERY_ERROR_NOTICE: &str =
    "Sorry, we could not record your message. Please email us directly.";

/// Raw contact form fields as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub budget: Option<String>,
    pub message: Option<String>,
}

/// 必填欄位：不存在或只有空白都視為缺漏
fn required(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn optional_or(value: &Option<String>, default: &str) -> String {
    required(value).unwrap_or(default).to_string()
}

impl ContactForm {
    pub fn into_submission(self, received_at: DateTime<Utc>) -> Result<ContactSubmission> {
        let mut missing = Vec::new();
        let name = required(&self.name);
        let email = required(&self.email);
        let message = required(&self.message);

        if name.is_none() {
            missing.push("name");
        }
        if email.is_none() {
            missing.push("email");
        }
        if message.is_none() {
            missing.push("message");
        }

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
                name: name.to_string(),
                email: email.to_string(),
                company: optional_or(&self.company, DEFAULT_COMPANY),
                budget: optional_or(&self.budget, DEFAULT_BUDGET),
                message: message.to_string(),
                received_at,
            }),
            _ => Err(SiteError::ValidationError { fields: missing }),
        }
    }
}

/// Validates a posted form, hands valid submissions to the notifier and
/// returns the notice for the next page. Rejected values are dropped.
pub async fn process_submission(
    form: ContactForm,
    notifier: &dyn ContactNotifier,
    received_at: DateTime<Utc>,
) -> Notice {
    let submission = match form.into_submission(received_at) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::info!("Contact form rejected: {}", e);
            return Notice::error(ERROR_NOTICE);
        }
    };

    match notifier.notify(&submission).await {
        Ok(()) => Notice::success(SUCCESS_NOTICE),
        Err(e) => {
            tracing::error!(
                "❌ Contact notifier failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            Notice::error(DELIVERY_ERROR_NOTICE)
        }
    }
}
