//! Accessory endpoints: list, create, partial update, delete.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::Serialize;

use super::{ApiError, AppState, CreatedResponse, MessageResponse};
use crate::core::accessory::{self, AccessoryUpdate, NewAccessory};
use crate::entities::accessory::Model as AccessoryModel;

/// Wire shape for an accessory row; `created_at` stays internal.
#[derive(Debug, Serialize)]
struct AccessoryResponse {
    id: i64,
    name: Option<String>,
    category: Option<String>,
    price: f64,
    stock: i32,
}

impl From<AccessoryModel> for AccessoryResponse {
    fn from(model: AccessoryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category: model.category,
            price: model.price,
            stock: model.stock,
        }
    }
}

/// Routes for the accessory resource, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/accessories",
            get(list_accessories_handler).post(create_accessory_handler),
        )
        .route(
            "/accessories/{id}",
            put(update_accessory_handler).delete(delete_accessory_handler),
        )
}

async fn list_accessories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccessoryResponse>>, ApiError> {
    let rows = accessory::list_accessories(&state.conn).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

async fn create_accessory_handler(
    State(state): State<AppState>,
    Json(payload): Json<NewAccessory>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let created = accessory::create_accessory(&state.conn, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "created",
            id: created.id,
        }),
    ))
}

async fn update_accessory_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AccessoryUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    accessory::update_accessory(&state.conn, id, payload).await?;
    Ok(Json(MessageResponse { message: "updated" }))
}

async fn delete_accessory_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    accessory::delete_accessory(&state.conn, id).await?;
    Ok(Json(MessageResponse { message: "deleted" }))
}
