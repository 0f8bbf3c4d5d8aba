use crate::api::handlers::{display_handler, health_handler, languages_handler};
use crate::api::types::ApiState;
use crate::core::{ConfigProvider, DisplayService, EngineTable};
use crate::utils::error::Result;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Any origin, method and header, with credentials.
///
/// A literal `*` cannot be combined with credentials, so the request's own
/// values are mirrored back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn create_router(engines: Arc<EngineTable>) -> Router {
    let state = ApiState {
        service: DisplayService::new(engines),
    };

    Router::new()
        .route("/languages", get(languages_handler))
        .route("/display/:lang_code", get(display_handler))
        .route("/health", get(health_handler))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve<C: ConfigProvider + ?Sized>(config: &C, engines: Arc<EngineTable>) -> Result<()> {
    let addr = format!("{}:{}", config.host(), config.port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(engines))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
