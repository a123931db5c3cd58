//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables; no relations are declared
//! between them - order line items reference fish and accessories by id
//! without foreign-key enforcement.

pub mod accessory;
pub mod fish;
pub mod order;

// Re-export specific types to avoid conflicts
pub use accessory::{Column as AccessoryColumn, Entity as Accessory, Model as AccessoryModel};
pub use fish::{Column as FishColumn, Entity as Fish, Model as FishModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
