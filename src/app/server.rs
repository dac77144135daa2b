use crate::app::router::create_router;
use crate::app::state::AppState;
use crate::utils::error::{Result, SiteError};
use tokio::net::TcpListener;

/// Serves the site until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("🌐 Listening on http://{}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SiteError::ServerError {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        // 無法監聽訊號時持續服務
        std::future::pending::<()>().await;
    }
    tracing::info!("👋 Shutting down");
}
