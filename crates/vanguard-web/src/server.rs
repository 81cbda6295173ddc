use crate::views;
use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use vanguard_core::client::RunsApi;
use vanguard_core::errors::FetchError;

const DASHBOARD_CSS: &str = include_str!("../assets/dashboard.css");

/// Shared by every handler. Holds no per-request data: each page load
/// fetches afresh.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn RunsApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn RunsApi>) -> Self {
        Self { api }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/runs", get(list_runs))
        .route("/runs/:id", get(show_run))
        .route("/health", get(health_check))
        .route("/assets/dashboard.css", get(stylesheet))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn page(status: StatusCode, body: String) -> Response {
    (status, [(header::CACHE_CONTROL, "no-store")], Html(body)).into_response()
}

/// A list fetch that failed. Not caught by the page; rendered as a 500.
pub struct PageError(FetchError);

impl From<FetchError> for PageError {
    fn from(e: FetchError) -> Self {
        Self(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(event = "page_error", error = %self.0);
        page(
            StatusCode::INTERNAL_SERVER_ERROR,
            views::error_page(&self.0.to_string()),
        )
    }
}

async fn home() -> Response {
    page(StatusCode::OK, views::home())
}

async fn list_runs(State(state): State<AppState>) -> Result<Response, PageError> {
    let runs = state.api.fetch_runs().await?;
    tracing::debug!(event = "runs_rendered", count = runs.len());
    Ok(page(StatusCode::OK, views::runs_page(&runs)))
}

async fn show_run(State(state): State<AppState>, Path(run_id): Path<String>) -> Response {
    match state.api.fetch_run(&run_id).await {
        Ok(run) => page(StatusCode::OK, views::run_page(&run)),
        Err(e) => {
            tracing::info!(event = "run_fetch_failed", run_id = %run_id, error = %e);
            page(StatusCode::NOT_FOUND, views::not_found())
        }
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        DASHBOARD_CSS,
    )
}

async fn fallback() -> Response {
    page(StatusCode::NOT_FOUND, views::not_found())
}

pub struct Server;

impl Server {
    pub async fn run(listen: SocketAddr, api: Arc<dyn RunsApi>) -> Result<()> {
        let upstream = api.describe();
        let app = router(AppState::new(api));

        let listener = tokio::net::TcpListener::bind(listen)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", listen, e))?;
        let local = listener.local_addr()?;

        tracing::info!(event = "server_start", listen = %local, upstream = %upstream);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow::anyhow!("dashboard server failed: {}", e))?;

        tracing::info!(event = "server_stop");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(event = "signal_error", error = %e);
        std::future::pending::<()>().await;
    }
}
