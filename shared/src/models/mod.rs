//! Domain Models

pub mod order;
pub mod product;

pub use order::{LineItem, Order, OrderDate, OrderInput, OrderPatch, OrderStatusFilter};
pub use product::{Product, ProductInput, ProductPatch};
