//! Accessory business logic - Handles all accessory-related store operations.
//!
//! Same shape as the fish operations with `category` in place of `species`.

use crate::{
    entities::{Accessory, accessory},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Fields accepted when creating an accessory; omitted fields take the
/// defaults below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewAccessory {
    /// Display name; stored as NULL when omitted
    pub name: Option<String>,
    /// Category label; stored as NULL when omitted
    pub category: Option<String>,
    /// Unit price in dollars, defaults to 0
    pub price: f64,
    /// Units in stock, defaults to 0
    pub stock: i32,
}

/// Field-level change set for a partial accessory update. An omitted key
/// leaves the stored value untouched; an explicit `null` clears a nullable
/// column.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccessoryUpdate {
    /// New display name, or `Some(None)` to clear it
    #[serde(deserialize_with = "super::explicit_null")]
    pub name: Option<Option<String>>,
    /// New category label, or `Some(None)` to clear it
    #[serde(deserialize_with = "super::explicit_null")]
    pub category: Option<Option<String>>,
    /// New unit price
    pub price: Option<f64>,
    /// New stock count
    pub stock: Option<i32>,
}

/// Retrieves all accessory rows in natural storage order.
pub async fn list_accessories(db: &DatabaseConnection) -> Result<Vec<accessory::Model>> {
    Accessory::find().all(db).await.map_err(Into::into)
}

/// Inserts a new accessory row, stamping `created_at` with the current time.
pub async fn create_accessory(
    db: &DatabaseConnection,
    new: NewAccessory,
) -> Result<accessory::Model> {
    let row = accessory::ActiveModel {
        name: Set(new.name),
        category: Set(new.category),
        price: Set(new.price),
        stock: Set(new.stock),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    row.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to an existing accessory row.
pub async fn update_accessory(
    db: &DatabaseConnection,
    id: i64,
    update: AccessoryUpdate,
) -> Result<accessory::Model> {
    let existing = Accessory::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "accessory",
            id,
        })?;

    let mut row: accessory::ActiveModel = existing.clone().into();
    if let Some(name) = update.name {
        row.name = Set(name);
    }
    if let Some(category) = update.category {
        row.category = Set(category);
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

/// Deletes an accessory row by id.
pub async fn delete_accessory(db: &DatabaseConnection, id: i64) -> Result<()> {
    let existing = Accessory::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "accessory",
            id,
        })?;

    existing.delete(db).await?;
    Ok(())
}
