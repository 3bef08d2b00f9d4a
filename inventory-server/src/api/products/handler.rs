//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::{AppResponse, AppResult, ok, ok_list};
use shared::models::{Product, ProductInput, ProductPatch};

/// Comma-separated id list, e.g. `?ids=a,b,c`
#[derive(Deserialize)]
pub struct IdsQuery {
    ids: String,
}

/// Comma-separated name list, e.g. `?names=a,b,c`
#[derive(Deserialize)]
pub struct NamesQuery {
    names: String,
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// POST /api/products - add a batch of products, returns assigned ids
pub async fn create(
    State(state): State<ServerState>,
    Json(inputs): Json<Vec<ProductInput>>,
) -> AppResult<Json<AppResponse<Vec<String>>>> {
    let ids = state.manager.add_products(inputs)?;
    Ok(ok(ids))
}

/// PATCH /api/products - apply a batch of field patches
pub async fn update(
    State(state): State<ServerState>,
    Json(patches): Json<Vec<ProductPatch>>,
) -> AppResult<Json<AppResponse<()>>> {
    state.manager.update_products(patches)?;
    Ok(ok(()))
}

/// GET /api/products/in-stock
pub async fn list_in_stock(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<Product>>>> {
    let products = state.manager.products_in_stock()?;
    Ok(ok_list(products))
}

/// GET /api/products/by-id?ids=a,b
pub async fn list_by_ids(
    State(state): State<ServerState>,
    Query(query): Query<IdsQuery>,
) -> AppResult<Json<AppResponse<Vec<Product>>>> {
    let products = state.manager.products_by_ids(&split_csv(&query.ids))?;
    Ok(ok_list(products))
}

/// GET /api/products/by-name?names=a,b
pub async fn list_by_names(
    State(state): State<ServerState>,
    Query(query): Query<NamesQuery>,
) -> AppResult<Json<AppResponse<Vec<Product>>>> {
    let products = state.manager.products_by_names(&split_csv(&query.names))?;
    Ok(ok_list(products))
}

/// GET /api/products/by-manufacturer/{manufacturer}
pub async fn list_by_manufacturer(
    State(state): State<ServerState>,
    Path(manufacturer): Path<String>,
) -> AppResult<Json<AppResponse<Vec<Product>>>> {
    let products = state.manager.products_by_manufacturer(&manufacturer)?;
    Ok(ok_list(products))
}
