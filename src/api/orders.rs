//! Order endpoints: list recent, create, status update.
//!
//! There is deliberately no delete route for orders.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::Deserialize;

use super::{ApiError, AppState, CreatedResponse, MessageResponse};
use crate::core::order::{self, NewOrder, OrderDetails};

/// Only `status` is reachable through the order update endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpdateOrderRequest {
    status: Option<String>,
}

/// Routes for the order resource, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(list_orders_handler).post(create_order_handler),
        )
        .route("/orders/{id}", put(update_order_handler))
}

async fn list_orders_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderDetails>>, ApiError> {
    let orders = order::list_recent_orders(&state.conn).await?;
    Ok(Json(orders))
}

async fn create_order_handler(
    State(state): State<AppState>,
    Json(payload): Json<NewOrder>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let created = order::create_order(&state.conn, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "created",
            id: created.id,
        }),
    ))
}

async fn update_order_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    order::update_order_status(&state.conn, id, payload.status).await?;
    Ok(Json(MessageResponse { message: "updated" }))
}
