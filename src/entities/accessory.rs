//! Accessory entity - aquarium accessories offered for sale.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Accessory database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accessories")]
pub struct Model {
    /// Unique identifier for the accessory
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Air Pump"); NULL when the caller omitted it
    pub name: Option<String>,
    /// Category label (e.g., "filtration")
    pub category: Option<String>,
    /// Unit price in dollars
    pub price: f64,
    /// Units currently in stock
    pub stock: i32,
    /// When the row was inserted; assigned store-side, never updated
    pub created_at: DateTimeUtc,
}

/// No relations - orders reference accessories by id without enforcement
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
