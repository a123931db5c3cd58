//! Database configuration module for the `AquaShop` backend.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. Table creation uses `Schema::create_table_from_entity` so the
//! database schema always matches the Rust entity definitions, and every
//! statement is guarded with `IF NOT EXISTS` - schema creation runs once at
//! process startup and is idempotent, so a restart against an existing
//! database file is safe.

use crate::entities::{Accessory, Fish, Order};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/aquashop.sqlite?mode=rwc";

/// Gets the database URL from the environment or returns the default
/// `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`,
/// falling back to the default local `SQLite` file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates the fish, accessories, and orders tables from the entity
/// definitions.
///
/// Safe to call against a database that already has the tables.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut fish_table = schema.create_table_from_entity(Fish);
    fish_table.if_not_exists();
    let mut accessory_table = schema.create_table_from_entity(Accessory);
    accessory_table.if_not_exists();
    let mut order_table = schema.create_table_from_entity(Order);
    order_table.if_not_exists();

    db.execute(builder.build(&fish_table)).await?;
    db.execute(builder.build(&accessory_table)).await?;
    db.execute(builder.build(&order_table)).await?;

    Ok(())
}
