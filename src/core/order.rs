//! Order business logic - Handles order creation, listing, and status updates.
//!
//! Line items are typed in the domain and serialized to JSON only at the
//! storage boundary, into the order row's `items` text column. Items are
//! never validated against live fish or accessory rows - a line item may
//! reference a deleted or nonexistent id. `total` is taken from the caller
//! and never recomputed from the items.

use crate::{
    entities::{Order, order},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Most orders the listing endpoint will return.
pub const RECENT_ORDERS_CAP: u64 = 200;

/// Status assigned to every newly created order.
pub const DEFAULT_STATUS: &str = "Pending";

/// Which table a line item refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemKind {
    /// References a fish row
    Fish,
    /// References an accessory row
    Accessory,
}

/// One entry in an order's items sequence. The referenced id is not checked
/// against the fish or accessory tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Whether this line refers to a fish or an accessory
    #[serde(rename = "type")]
    pub kind: LineItemKind,
    /// Id of the referenced fish or accessory
    pub id: i64,
    /// Quantity ordered
    pub qty: i64,
    /// Unit price at time of ordering
    pub price: f64,
}

/// An order with its line items decoded from the storage blob.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    /// Unique identifier for the order
    pub id: i64,
    /// Name of the ordering customer
    pub customer_name: String,
    /// Decoded line items
    pub items: Vec<LineItem>,
    /// Caller-supplied order total
    pub total: f64,
    /// Fulfillment status
    pub status: String,
    /// When the order was created
    pub created_at: DateTimeUtc,
}

/// Fields accepted when creating an order; omitted fields take the defaults
/// below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewOrder {
    /// Customer name, defaults to empty
    pub customer_name: String,
    /// Line items, default empty
    pub items: Vec<LineItem>,
    /// Order total in dollars, defaults to 0
    pub total: f64,
}

fn decode_order(model: order::Model) -> Result<OrderDetails> {
    let items: Vec<LineItem> = serde_json::from_str(&model.items)?;
    Ok(OrderDetails {
        id: model.id,
        customer_name: model.customer_name,
        items,
        total: model.total,
        status: model.status,
        created_at: model.created_at,
    })
}

/// Retrieves the most recently created orders, newest first, capped at
/// [`RECENT_ORDERS_CAP`].
///
/// Rows created within the same timestamp granularity are tiebroken by id
/// descending so the listing is deterministic.
pub async fn list_recent_orders(db: &DatabaseConnection) -> Result<Vec<OrderDetails>> {
    let rows = Order::find()
        .order_by_desc(order::Column::CreatedAt)
        .order_by_desc(order::Column::Id)
        .limit(RECENT_ORDERS_CAP)
        .all(db)
        .await?;

    rows.into_iter().map(decode_order).collect()
}

/// Inserts a new order with status [`DEFAULT_STATUS`], serializing the line
/// items into the storage blob and stamping `created_at` with the current
/// time.
pub async fn create_order(db: &DatabaseConnection, new: NewOrder) -> Result<OrderDetails> {
    let items_blob = serde_json::to_string(&new.items)?;

    let row = order::ActiveModel {
        customer_name: Set(new.customer_name),
        items: Set(items_blob),
        total: Set(new.total),
        status: Set(DEFAULT_STATUS.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let model = row.insert(db).await?;
    decode_order(model)
}

/// Updates the status of an existing order. No other order field is mutable
/// through this operation; passing `None` leaves the row untouched.
pub async fn update_order_status(
    db: &DatabaseConnection,
    id: i64,
    status: Option<String>,
) -> Result<OrderDetails> {
    let existing = Order::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound { entity: "order", id })?;

    let mut row: order::ActiveModel = existing.clone().into();
    if let Some(status) = status {
        row.status = Set(status);
    }

    let model = if row.is_changed() {
        row.update(db).await?
    } else {
        existing
    };
    decode_order(model)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_order, setup_test_db};

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem {
                kind: LineItemKind::Fish,
                id: 1,
                qty: 2,
                price: 9.99,
            },
            LineItem {
                kind: LineItemKind::Accessory,
                id: 4,
                qty: 1,
                price: 24.99,
            },
        ]
    }

    #[test]
    fn test_line_item_wire_format() {
        let item = LineItem {
            kind: LineItemKind::Fish,
            id: 1,
            qty: 2,
            price: 9.99,
        };

        let encoded = serde_json::to_string(&item).unwrap();
        assert_eq!(encoded, r#"{"type":"fish","id":1,"qty":2,"price":9.99}"#);

        let decoded: LineItem = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, item);
    }

    #[tokio::test]
    async fn test_create_order_round_trips_items() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_order(
            &db,
            NewOrder {
                customer_name: "Alice".to_string(),
                items: sample_items(),
                total: 44.97,
            },
        )
        .await?;

        assert_eq!(created.status, DEFAULT_STATUS);

        let listed = list_recent_orders(&db).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].customer_name, "Alice");
        assert_eq!(listed[0].items, sample_items());
        assert_eq!(listed[0].total, 44.97);
        assert_eq!(listed[0].status, "Pending");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_defaults() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_order(&db, NewOrder::default()).await?;

        assert_eq!(created.customer_name, "");
        assert!(created.items.is_empty());
        assert_eq!(created.total, 0.0);
        assert_eq!(created.status, "Pending");

        Ok(())
    }

    #[tokio::test]
    async fn test_line_items_are_not_checked_against_inventory() -> Result<()> {
        let db = setup_test_db().await?;

        // No fish with id 999 exists; the order is stored anyway
        let created = create_order(
            &db,
            NewOrder {
                customer_name: "Bob".to_string(),
                items: vec![LineItem {
                    kind: LineItemKind::Fish,
                    id: 999,
                    qty: 1,
                    price: 5.0,
                }],
                total: 5.0,
            },
        )
        .await?;

        assert_eq!(created.items[0].id, 999);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_status_leaves_other_fields_alone() -> Result<()> {
        let db = setup_test_db().await?;
        let order = create_test_order(&db, "Alice", 19.98).await?;

        let updated = update_order_status(&db, order.id, Some("Shipped".to_string())).await?;

        assert_eq!(updated.status, "Shipped");
        assert_eq!(updated.customer_name, order.customer_name);
        assert_eq!(updated.items, order.items);
        assert_eq!(updated.total, order.total);
        assert_eq!(updated.created_at, order.created_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_status_missing_order_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_order_status(&db, 31, Some("Shipped".to_string())).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "order", id: 31 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_listing_is_newest_first() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_test_order(&db, "first", 1.0).await?;
        let second = create_test_order(&db, "second", 2.0).await?;
        let third = create_test_order(&db, "third", 3.0).await?;

        let listed = list_recent_orders(&db).await?;
        let ids: Vec<i64> = listed.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);

        Ok(())
    }

    #[tokio::test]
    async fn test_listing_caps_at_two_hundred() -> Result<()> {
        let db = setup_test_db().await?;

        for i in 0..205 {
            create_test_order(&db, &format!("customer {i}"), f64::from(i)).await?;
        }

        let listed = list_recent_orders(&db).await?;
        assert_eq!(listed.len(), 200);

        // The five oldest orders fall off the end
        assert_eq!(listed[0].customer_name, "customer 204");
        assert_eq!(listed[199].customer_name, "customer 5");

        Ok(())
    }
}
