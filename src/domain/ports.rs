use crate::domain::model::ContactSubmission;
use crate::domain::page::PageContext;
use crate::utils::error::Result;
use async_trait::async_trait;
use axum::response::Response;

/// Turns a handler's page context into an HTTP response.
pub trait Presenter: Send + Sync {
    fn render(&self, page: &PageContext<'_>) -> Response;
}

/// Receives validated contact submissions.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> Result<()>;
}
