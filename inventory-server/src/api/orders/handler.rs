//! Order API Handlers
//!
//! Batch create/update report per-entry outcomes in the response body; a
//! failed entry never fails the HTTP request.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_list};
use shared::models::{Order, OrderInput, OrderPatch, OrderStatusFilter};

/// Per-entry outcome of a batch create or update
#[derive(Debug, Serialize)]
pub struct OrderOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Comma-separated id list, e.g. `?ids=a,b,c`
#[derive(Deserialize)]
pub struct IdsQuery {
    ids: String,
}

/// POST /api/orders - create a batch of orders
pub async fn create(
    State(state): State<ServerState>,
    Json(inputs): Json<Vec<OrderInput>>,
) -> AppResult<Json<AppResponse<Vec<OrderOutcome>>>> {
    let outcomes = state
        .manager
        .create_orders(inputs)
        .into_iter()
        .map(|result| match result {
            Ok(order_id) => OrderOutcome {
                success: true,
                order_id: Some(order_id),
                error: None,
            },
            Err(e) => OrderOutcome {
                success: false,
                order_id: None,
                error: Some(e.to_string()),
            },
        })
        .collect();
    Ok(ok(outcomes))
}

/// PATCH /api/orders - update a batch of orders
pub async fn update(
    State(state): State<ServerState>,
    Json(patches): Json<Vec<OrderPatch>>,
) -> AppResult<Json<AppResponse<Vec<OrderOutcome>>>> {
    let ids: Vec<String> = patches.iter().map(|p| p.id.clone()).collect();
    let outcomes = state
        .manager
        .update_orders(patches)
        .into_iter()
        .zip(ids)
        .map(|(result, order_id)| match result {
            Ok(()) => OrderOutcome {
                success: true,
                order_id: Some(order_id),
                error: None,
            },
            Err(e) => OrderOutcome {
                success: false,
                order_id: Some(order_id),
                error: Some(e.to_string()),
            },
        })
        .collect();
    Ok(ok(outcomes))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Order>>> {
    let order = state
        .manager
        .get_order(&id)?
        .ok_or_else(|| AppError::NotFound(format!("Order {id}")))?;
    Ok(ok(order))
}

/// GET /api/orders/by-id?ids=a,b
pub async fn list_by_ids(
    State(state): State<ServerState>,
    Query(query): Query<IdsQuery>,
) -> AppResult<Json<AppResponse<Vec<Order>>>> {
    let ids: Vec<String> = query
        .ids
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    let orders = state.manager.orders_by_ids(&ids)?;
    Ok(ok_list(orders))
}

/// GET /api/orders?paid=&shipped=
pub async fn list_by_status(
    State(state): State<ServerState>,
    Query(filter): Query<OrderStatusFilter>,
) -> AppResult<Json<AppResponse<Vec<Order>>>> {
    let orders = state.manager.orders_by_status(filter)?;
    Ok(ok_list(orders))
}
