//! Configuration for the `AquaShop` backend.
//!
//! The only external knob is `DATABASE_URL`; the listen address is fixed.

/// Database connection management and schema creation
pub mod database;

/// Address the HTTP server binds to. The port is fixed; there is no
/// configuration surface for it.
pub const LISTEN_ADDR: &str = "0.0.0.0:5002";
