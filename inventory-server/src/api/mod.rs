//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`products`] - catalog management
//! - [`orders`] - order creation, update and queries
//! - [`system`] - reset endpoint

pub mod health;
pub mod orders;
pub mod products;
pub mod system;


use axum::Router;

use crate::core::ServerState;

/// Assemble the full API router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(system::router())
}
