//! Order entity - customer orders against the shop inventory.
//!
//! The `items` column holds the JSON-serialized line-item sequence; it is
//! encoded and decoded in `core::order` only, so the rest of the crate sees
//! typed line items. `total` is caller-supplied and never recomputed from
//! the items.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the ordering customer; empty when not supplied
    pub customer_name: String,
    /// JSON-serialized line items
    #[sea_orm(column_type = "Text")]
    pub items: String,
    /// Order total in dollars, as supplied by the caller
    pub total: f64,
    /// Fulfillment status, e.g. `"Pending"`
    pub status: String,
    /// When the row was inserted; assigned store-side, never updated
    pub created_at: DateTimeUtc,
}

/// No relations - line items live inside the `items` blob
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
