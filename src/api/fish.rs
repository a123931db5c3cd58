//! Fish endpoints: list, create, partial update, delete.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::Serialize;

use super::{ApiError, AppState, CreatedResponse, MessageResponse};
use crate::core::fish::{self, FishUpdate, NewFish};
use crate::entities::fish::Model as FishModel;

/// Wire shape for a fish row; `created_at` stays internal.
#[derive(Debug, Serialize)]
struct FishResponse {
    id: i64,
    name: Option<String>,
    species: Option<String>,
    price: f64,
    stock: i32,
}

impl From<FishModel> for FishResponse {
    fn from(model: FishModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            species: model.species,
            price: model.price,
            stock: model.stock,
        }
    }
}

/// Routes for the fish resource, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/fish", get(list_fish_handler).post(create_fish_handler))
        .route(
            "/fish/{id}",
            put(update_fish_handler).delete(delete_fish_handler),
        )
}

async fn list_fish_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<FishResponse>>, ApiError> {
    let rows = fish::list_fish(&state.conn).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

async fn create_fish_handler(
    State(state): State<AppState>,
    Json(payload): Json<NewFish>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let created = fish::create_fish(&state.conn, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "created",
            id: created.id,
        }),
    ))
}

async fn update_fish_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<FishUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    fish::update_fish(&state.conn, id, payload).await?;
    Ok(Json(MessageResponse { message: "updated" }))
}

async fn delete_fish_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    fish::delete_fish(&state.conn, id).await?;
    Ok(Json(MessageResponse { message: "deleted" }))
}
