//! HTTP server for lead intake.
//!
//! This module wires the lead service into an `axum` router. Every
//! response carries permissive CORS headers so the landing page can post
//! from any origin.

pub mod handlers;

use crate::metrics::LeadMetrics;
use crate::services::LeadService;
use anyhow::Result;
use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared state of the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn LeadService>,
    pub metrics: LeadMetrics,
}

impl AppState {
    pub fn new(service: Arc<dyn LeadService>) -> Self {
        Self {
            service,
            metrics: LeadMetrics::new(),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/leads",
            post(handlers::submit_lead)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health_check))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(Arc::new(state))
}

/// Serve until `shutdown` resolves, then log the lead counters.
pub async fn serve_with_shutdown<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics = state.metrics.clone();

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    let summary = metrics.summary();
    tracing::info!(
        received = summary.received_total,
        accepted = summary.accepted_total,
        rejected = summary.rejected_total,
        internal_errors = summary.internal_errors_total,
        emails_sent = summary.emails_sent_total,
        emails_failed = summary.emails_failed_total,
        emails_skipped = summary.emails_skipped_total,
        "Lead server stopped"
    );

    Ok(())
}

/// Run the server until Ctrl-C.
pub async fn run_server(listener: TcpListener, state: AppState) -> Result<()> {
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
