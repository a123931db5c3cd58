//! Fish entity - live fish offered for sale.
//!
//! Rows are created through the API with accept-and-default semantics: a
//! missing name is stored as NULL rather than rejected.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fish database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fish")]
pub struct Model {
    /// Unique identifier for the fish
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Betta"); NULL when the caller omitted it
    pub name: Option<String>,
    /// Species label (e.g., "Betta splendens")
    pub species: Option<String>,
    /// Unit price in dollars
    pub price: f64,
    /// Units currently in stock
    pub stock: i32,
    /// When the row was inserted; assigned store-side, never updated
    pub created_at: DateTimeUtc,
}

/// No relations - orders reference fish by id without enforcement
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
