//! Shared types for the inventory system
//!
//! Domain and wire types used by the server and any client: products,
//! orders, line items, and the input/patch payloads the API accepts.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    LineItem, Order, OrderDate, OrderInput, OrderPatch, OrderStatusFilter, Product, ProductInput,
    ProductPatch,
};
