//! Order API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list_by_status)
                .post(handler::create)
                .patch(handler::update),
        )
        .route("/{id}", get(handler::get_by_id))
        .route("/by-id", get(handler::list_by_ids))
}
