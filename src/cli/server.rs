//! HTTP server exposing the pagination service

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::client::STUFF_PATH;
use crate::config::ServerSettings;
use crate::database::RecordStore;
use crate::error::{Error, Result};
use crate::pagination::PaginationService;
use crate::types::ApiError;

/// Pagination service over any record store, shareable across handlers
pub type SharedService = Arc<PaginationService<Arc<dyn RecordStore>>>;

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    service: SharedService,
}

/// Query string of `GET /stuff`. `page` stays raw text so that parse
/// failures go through the same validation as out-of-range pages.
#[derive(Debug, Deserialize)]
struct StuffQuery {
    #[serde(default)]
    page: Option<String>,
}

/// Build a shared service over a store handle
pub fn shared_service(store: Arc<dyn RecordStore>) -> SharedService {
    Arc::new(PaginationService::new(store))
}

/// Build the application router
pub fn router(service: SharedService) -> Router {
    // Read-only API, any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(STUFF_PATH, get(list_stuff))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}

/// Start the HTTP server on the configured address
pub async fn serve(settings: &ServerSettings, service: SharedService) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .map_err(|e| Error::config(format!("Invalid listen address: {e}")))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    serve_on(listener, service).await
}

/// Serve on an already bound listener
pub async fn serve_on(listener: TcpListener, service: SharedService) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Starting HTTP server on http://{}", addr);

    axum::serve(listener, router(service))
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// `GET /stuff?page={n}`
async fn list_stuff(State(state): State<AppState>, Query(query): Query<StuffQuery>) -> Response {
    match state.service.get_page_from_query(query.page.as_deref()) {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => error_response(&e, query.page.as_deref()),
    }
}

/// Map a service error to a response: validation failures are the caller's
/// fault, anything else is a server fault
fn error_response(err: &Error, raw_page: Option<&str>) -> Response {
    if err.is_client_error() {
        tracing::warn!("Rejected page {:?}: {}", raw_page.unwrap_or_default(), err);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(ApiError::INVALID_PAGE, err.to_string())),
        )
            .into_response();
    }

    tracing::error!("Failed to serve page {:?}: {}", raw_page.unwrap_or("1"), err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(
            ApiError::INTERNAL_ERROR,
            "An unexpected error occurred",
        )),
    )
        .into_response()
}
