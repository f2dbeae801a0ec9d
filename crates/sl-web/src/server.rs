//! HTTP server — JSON API + embedded web UI.
//!
//! Endpoints:
//!   GET  /            → sleep logger HTML page
//!   GET  /api/chart   → chart built from the persisted entries
//!   POST /api/entries → submit one interval, return the updated chart

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use sl_core::ChartDescription;
use sl_store::Store;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::handler::{self, Interaction};
use crate::html::PAGE_HTML;

type AppState = Arc<Store>;

/// Binds the listener and serves until the host environment stops us.
pub async fn serve(store: Store, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, data_path = %store.path().display(), "sleeplog listening");

    axum::serve(listener, router(store)).await?;
    Ok(())
}

fn router(store: Store) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/chart", get(current_chart))
        .route("/api/entries", post(submit_entry))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(store))
}

async fn root() -> Html<&'static str> {
    Html(PAGE_HTML)
}

/// One submitted interval, both fields free text.
#[derive(Debug, Deserialize)]
struct SubmitRequest {
    start: String,
    end: String,
}

/// What the page renders after every interaction.
#[derive(Debug, Serialize)]
struct InteractionResponse {
    chart: ChartDescription,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    appended: bool,
}

impl From<Interaction> for InteractionResponse {
    fn from(outcome: Interaction) -> Self {
        Self {
            chart: outcome.chart,
            error: outcome.error,
            appended: outcome.appended,
        }
    }
}

// GET /api/chart — the initial page load
async fn current_chart(State(store): State<AppState>) -> impl IntoResponse {
    Json(InteractionResponse::from(handler::current(&store)))
}

// POST /api/entries — one submit action
async fn submit_entry(
    State(store): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> impl IntoResponse {
    Json(InteractionResponse::from(handler::submit(
        &store, &req.start, &req.end,
    )))
}
