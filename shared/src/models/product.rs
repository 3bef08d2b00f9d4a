//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// Identity is the pair (id, name): the id is assigned by the server at
/// creation time and the name is unique across the catalog. `amount` is the
/// on-hand stock and never goes negative as an effect of order processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub manufacturer: String,
    pub wholesale_cost: f64,
    pub sale_cost: f64,
    /// On-hand stock, invariant `amount >= 0`
    pub amount: i64,
}

/// Create product payload
///
/// The server assigns the id. An input whose name already exists in the
/// catalog is silently skipped and excluded from the returned id list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub wholesale_cost: f64,
    #[serde(default)]
    pub sale_cost: f64,
    #[serde(default)]
    pub amount: i64,
}

/// Update product payload
///
/// The target is resolved by `id` when non-empty, otherwise by `name`;
/// neither field is itself updatable. Field-specific skip sentinels follow
/// the wire contract: an absent/empty string leaves a text field unchanged,
/// an absent/negative value leaves a numeric field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub wholesale_cost: Option<f64>,
    #[serde(default)]
    pub sale_cost: Option<f64>,
    #[serde(default)]
    pub amount: Option<i64>,
}
