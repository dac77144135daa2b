use crate::domain::model::ContactSubmission;
use crate::domain::ports::ContactNotifier;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Records contact submissions in the log. No email is sent.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl ContactNotifier for LogNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<()> {
        // TODO: deliver to the site contact address once an SMTP relay is configured
        // `message` 是 tracing 保留欄位，表單內容改用 contact_message
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            company = %submission.company,
            budget = %submission.budget,
            contact_message = %submission.message,
            timestamp = %submission.received_at.to_rfc3339(),
            "📨 New contact form submission"
        );
        Ok(())
    }
}
