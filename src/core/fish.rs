//! Fish business logic - Handles all fish-related store operations.
//!
//! Provides functions for listing, creating, updating, and deleting fish
//! rows. Creation follows accept-and-default semantics: omitted fields become
//! NULL or zero rather than being rejected. All functions are async and
//! return Result types for error handling.

use crate::{
    entities::{Fish, fish},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Fields accepted when creating a fish. Every field is optional on the
/// wire; omitted fields take the defaults below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewFish {
    /// Display name; stored as NULL when omitted
    pub name: Option<String>,
    /// Species label; stored as NULL when omitted
    pub species: Option<String>,
    /// Unit price in dollars, defaults to 0
    pub price: f64,
    /// Units in stock, defaults to 0
    pub stock: i32,
}

/// Field-level change set for a partial fish update.
///
/// An omitted key leaves the stored value untouched. For the nullable
/// columns the inner `Option` carries an explicit `null`, which clears the
/// column.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FishUpdate {
    /// New display name, or `Some(None)` to clear it
    #[serde(deserialize_with = "super::explicit_null")]
    pub name: Option<Option<String>>,
    /// New species label, or `Some(None)` to clear it
    #[serde(deserialize_with = "super::explicit_null")]
    pub species: Option<Option<String>>,
    /// New unit price
    pub price: Option<f64>,
    /// New stock count
    pub stock: Option<i32>,
}

/// Retrieves all fish rows in natural storage order.
pub async fn list_fish(db: &DatabaseConnection) -> Result<Vec<fish::Model>> {
    Fish::find().all(db).await.map_err(Into::into)
}

/// Inserts a new fish row, stamping `created_at` with the current time.
pub async fn create_fish(db: &DatabaseConnection, new: NewFish) -> Result<fish::Model> {
    let row = fish::ActiveModel {
        name: Set(new.name),
        species: Set(new.species),
        price: Set(new.price),
        stock: Set(new.stock),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    row.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to an existing fish row.
///
/// Only the fields present in `update` overwrite stored values; everything
/// else, `created_at` included, is left as-is.
pub async fn update_fish(
    db: &DatabaseConnection,
    id: i64,
    update: FishUpdate,
) -> Result<fish::Model> {
    let existing = Fish::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound { entity: "fish", id })?;

    let mut row: fish::ActiveModel = existing.clone().into();
    if let Some(name) = update.name {
        row.name = Set(name);
    }
    if let Some(species) = update.species {
        row.species = Set(species);
    }
    if let Some(price) = update.price {
        row.price = Set(price);
    }
    if let Some(stock) = update.stock {
        row.stock = Set(stock);
    }

    if !row.is_changed() {
        return Ok(existing);
    }
    row.update(db).await.map_err(Into::into)
}

/// Deletes a fish row by id.
pub async fn delete_fish(db: &DatabaseConnection, id: i64) -> Result<()> {
    let existing = Fish::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound { entity: "fish", id })?;

    existing.delete(db).await?;
    Ok(())
}
