//! Order Model

use serde::{Deserialize, Serialize};

/// Order date as entered by the caller (no calendar arithmetic is done)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDate {
    pub month: i32,
    pub day: i32,
    pub year: i32,
}

impl OrderDate {
    /// Range validation: 1-12 / 1-31 / 0-9999
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month) && (1..=31).contains(&self.day) && (0..=9999).contains(&self.year)
    }
}

/// A (product reference, quantity) pair attached to an order
///
/// Persisted line items always carry `quantity > 0` and at most one entry
/// per product. In request payloads either `product_id` or `product_name`
/// may be empty; resolution prefers the id when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    pub quantity: i64,
}

impl LineItem {
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
        }
    }
}

/// Order entity
///
/// The persisted line items always reflect quantities that have already
/// been subtracted from the corresponding products' stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub destination: String,
    pub date: OrderDate,
    pub is_paid: bool,
    pub is_shipped: bool,
    pub items: Vec<LineItem>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderInput {
    pub destination: String,
    pub date: OrderDate,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub is_shipped: bool,
    pub items: Vec<LineItem>,
}

/// Update order payload
///
/// Absent fields are left unchanged. `is_paid`/`is_shipped` are one-way
/// latches: `Some(true)` sets the flag, nothing ever clears it. An empty
/// `items` list means "no line-item update"; a non-empty list becomes the
/// order's authoritative item set if stock allows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPatch {
    pub id: String,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub date: Option<OrderDate>,
    #[serde(default)]
    pub is_paid: Option<bool>,
    #[serde(default)]
    pub is_shipped: Option<bool>,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Status filter for order queries
///
/// Both flags true selects orders that are paid AND shipped; exactly one
/// flag selects on that flag alone; both false selects orders that are
/// neither paid nor shipped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OrderStatusFilter {
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub shipped: bool,
}

impl OrderStatusFilter {
    /// Whether an order matches this filter
    pub fn matches(&self, order: &Order) -> bool {
        match (self.paid, self.shipped) {
            (true, true) => order.is_paid && order.is_shipped,
            (true, false) => order.is_paid,
            (false, true) => order.is_shipped,
            (false, false) => !order.is_paid && !order.is_shipped,
        }
    }
}
