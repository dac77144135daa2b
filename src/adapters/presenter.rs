use crate::domain::page::PageContext;
use crate::domain::ports::Presenter;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Serialises page contexts as JSON for an external renderer.
#[derive(Debug, Clone, Default)]
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&self, page: &PageContext<'_>) -> Response {
        match serde_json::to_value(page) {
            Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Err(e) => {
                tracing::error!("❌ Failed to serialise {} page: {}", page.body.name(), e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
