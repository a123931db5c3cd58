//! Summary statistics across the fish, accessories, and orders tables.
//!
//! Nothing is cached: every call re-reads the tables, so the summary is
//! always consistent with the latest mutation.

use crate::{
    entities::{Accessory, Fish, Order},
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;

/// Shop-wide counters and revenue, recomputed per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Number of fish rows
    pub total_fish: u64,
    /// Number of accessory rows
    pub total_accessories: u64,
    /// Number of order rows
    pub total_orders: u64,
    /// Sum of `total` across all orders
    pub total_revenue: f64,
}

/// Counts the rows of all three tables and sums order totals.
pub async fn summarize(db: &DatabaseConnection) -> Result<StatsSummary> {
    let total_fish = Fish::find().count(db).await?;
    let total_accessories = Accessory::find().count(db).await?;
    let total_orders = Order::find().count(db).await?;

    let total_revenue = Order::find()
        .all(db)
        .await?
        .iter()
        .map(|order| order.total)
        .sum();

    Ok(StatsSummary {
        total_fish,
        total_accessories,
        total_orders,
        total_revenue,
    })
}
