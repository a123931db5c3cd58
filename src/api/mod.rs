//! HTTP interface - axum routers, handlers, and response envelopes.
//!
//! All application routes live under `/api`, with a bare `/health` liveness
//! probe at the root. CORS is permissive: any origin, method, and header.

/// Accessory endpoints
pub mod accessories;
/// Fish endpoints
pub mod fish;
/// Order endpoints
pub mod orders;
/// Summary-statistics endpoint
pub mod stats;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::errors::Error;

/// Shared state for all API handlers.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the shop database
    pub conn: DatabaseConnection,
}

/// Body for update and delete acknowledgements.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// What happened
    pub message: &'static str,
}

/// Body for create acknowledgements.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// What happened
    pub message: &'static str,
    /// Id of the freshly inserted row
    pub id: i64,
}

/// Body for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error detail
    pub error: String,
}

/// Translates crate errors into HTTP responses: Not-Found becomes a 404,
/// everything else a 500.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => {
                error!("Request failed: {}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Builds the full application router over the given database connection.
#[must_use]
pub fn app_router(conn: DatabaseConnection) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .merge(fish::routes())
        .merge(accessories::routes())
        .merge(orders::routes())
        .merge(stats::routes());

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(cors)
        .with_state(AppState { conn })
}
