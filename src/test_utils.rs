//! Shared test utilities for the `AquaShop` backend.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{accessory, fish, order},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test fish with sensible defaults.
///
/// # Defaults
/// * `species`: "Betta splendens"
/// * `price`: 9.99
/// * `stock`: 5
pub async fn create_test_fish(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::fish::Model> {
    fish::create_fish(
        db,
        fish::NewFish {
            name: Some(name.to_string()),
            species: Some("Betta splendens".to_string()),
            price: 9.99,
            stock: 5,
        },
    )
    .await
}

/// Creates a test accessory with sensible defaults.
///
/// # Defaults
/// * `category`: "filtration"
/// * `price`: 24.99
/// * `stock`: 3
pub async fn create_test_accessory(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::accessory::Model> {
    accessory::create_accessory(
        db,
        accessory::NewAccessory {
            name: Some(name.to_string()),
            category: Some("filtration".to_string()),
            price: 24.99,
            stock: 3,
        },
    )
    .await
}

/// Creates a test order with a single fish line item.
///
/// # Defaults
/// * `items`: one line referencing fish id 1, qty 2
pub async fn create_test_order(
    db: &DatabaseConnection,
    customer_name: &str,
    total: f64,
) -> Result<order::OrderDetails> {
    order::create_order(
        db,
        order::NewOrder {
            customer_name: customer_name.to_string(),
            items: vec![order::LineItem {
                kind: order::LineItemKind::Fish,
                id: 1,
                qty: 2,
                price: 9.99,
            }],
            total,
        },
    )
    .await
}
