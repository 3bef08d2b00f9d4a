//! Product API module

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", axum::routing::post(handler::create).patch(handler::update))
        .route("/in-stock", get(handler::list_in_stock))
        .route("/by-id", get(handler::list_by_ids))
        .route("/by-name", get(handler::list_by_names))
        .route("/by-manufacturer/{manufacturer}", get(handler::list_by_manufacturer))
}
