use crate::app::handlers;
use crate::app::state::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/services", get(handlers::services))
        .route("/services/:service_id", get(handlers::service_detail))
        .route("/projects", get(handlers::projects))
        .route("/projects/:project_id", get(handlers::project_detail))
        .route("/about", get(handlers::about))
        .route(
            "/contact",
            get(handlers::contact_form).post(handlers::contact_submit),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}
