use super::*;
use crate::store::InventoryStore;
use shared::models::{
    LineItem, OrderDate, OrderInput, OrderPatch, OrderStatusFilter, ProductInput, ProductPatch,
};

fn create_test_manager() -> InventoryManager {
    let store = InventoryStore::open_in_memory().unwrap();
    InventoryManager::new(store)
}

// ========================================================================
// Helpers: catalog seeding
// ========================================================================

fn product_input(name: &str, manufacturer: &str, amount: i64) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: format!("{name} description"),
        manufacturer: manufacturer.to_string(),
        wholesale_cost: 1.5,
        sale_cost: 3.0,
        amount,
    }
}

/// Seed one product and return its assigned id.
fn seed_product(manager: &InventoryManager, name: &str, amount: i64) -> String {
    let ids = manager
        .add_products(vec![product_input(name, "Acme", amount)])
        .unwrap();
    assert_eq!(ids.len(), 1, "seeding {name} failed");
    ids[0].clone()
}

fn amount_of(manager: &InventoryManager, id: &str) -> i64 {
    manager.products_by_ids(&[id.to_string()]).unwrap()[0].amount
}

// ========================================================================
// Helpers: order construction
// ========================================================================

fn valid_date() -> OrderDate {
    OrderDate { month: 6, day: 15, year: 2026 }
}

fn item_by_id(id: &str, quantity: i64) -> LineItem {
    LineItem::new(id, "", quantity)
}

fn item_by_name(name: &str, quantity: i64) -> LineItem {
    LineItem::new("", name, quantity)
}

fn order_input(items: Vec<LineItem>) -> OrderInput {
    OrderInput {
        destination: "Lisbon".to_string(),
        date: valid_date(),
        is_paid: false,
        is_shipped: false,
        items,
    }
}

/// Create one order and unwrap its id.
fn create_order_ok(manager: &InventoryManager, items: Vec<LineItem>) -> String {
    manager.create_order(order_input(items)).unwrap()
}

/// Patch that only replaces the line-item set.
fn items_patch(order_id: &str, items: Vec<LineItem>) -> OrderPatch {
    OrderPatch {
        id: order_id.to_string(),
        items,
        ..OrderPatch::default()
    }
}

mod test_flows;
