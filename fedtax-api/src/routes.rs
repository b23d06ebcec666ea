//! Route table and server loop.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Result;
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::handlers;
use crate::state::AppState;

/// Builds the full application router: the session API plus the browser
/// UI served from `web_root` as the fallback, behind a permissive CORS
/// layer.
pub fn router(state: AppState, web_root: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/add_job", post(handlers::add_job))
        .route("/remove_job", post(handlers::remove_job))
        .route("/get_jobs", get(handlers::get_jobs))
        .route("/set_status", post(handlers::set_status))
        .route("/get_filing_status", get(handlers::get_filing_status))
        .route("/get_status_names", get(handlers::get_status_names))
        .route("/add_deduct", post(handlers::add_deduct))
        .route("/remove_deduct", post(handlers::remove_deduct))
        .route("/get_deductions", get(handlers::get_deductions))
        .route("/add_rcredit", post(handlers::add_rcredit))
        .route("/remove_rcredit", post(handlers::remove_rcredit))
        .route(
            "/get_refundable_credits",
            get(handlers::get_refundable_credits),
        )
        .route("/add_nrcredit", post(handlers::add_nrcredit))
        .route("/remove_nrcredit", post(handlers::remove_nrcredit))
        .route(
            "/get_non_refundable_credits",
            get(handlers::get_non_refundable_credits),
        )
        .route(
            "/get_standard_deduction_added",
            get(handlers::get_standard_deduction_added),
        )
        .route(
            "/get_standard_deduction_amount",
            get(handlers::get_standard_deduction_amount),
        )
        .route("/period_to_number", get(handlers::period_to_number))
        .route(
            "/get_period_multiplier",
            get(handlers::get_period_multiplier),
        )
        .route("/calculate_fica", get(handlers::calculate_fica))
        .route("/calculate_tax", get(handlers::calculate_tax))
        .route("/calculate", get(handlers::calculate))
        .fallback_service(ServeDir::new(web_root))
        .layer(cors)
        .with_state(state)
}

/// Binds `address` and serves one fresh session until ctrl-c.
pub async fn serve(address: SocketAddr, web_root: &Path) -> Result<()> {
    let app = router(AppState::new(), web_root);

    let listener = TcpListener::bind(address).await?;
    info!(%address, web_root = %web_root.display(), "serving");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(error) => {
            // With no signal handler the server cannot shut down
            // gracefully, but it should not shut down immediately.
            warn!(%error, "cannot listen for shutdown signals");
            std::future::pending::<()>().await;
        }
    }
}
