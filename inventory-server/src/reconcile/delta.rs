//! Minimal-delta calculation between an order's persisted line items and a
//! requested replacement set
//!
//! Pure function over two in-memory snapshots; never touches the store.

use shared::models::LineItem;
use std::collections::HashMap;

/// Per-product quantity deltas separating net reservations from net releases
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineItemDelta {
    /// Net increases, to be checked against stock and subtracted from it
    pub added: Vec<LineItem>,
    /// Net decreases, to be credited back to stock
    pub removed: Vec<LineItem>,
}

/// Compute the minimal set of stock movements that turns `old` into
/// `requested`.
///
/// For each requested item: a quantity at or above the persisted one yields
/// an `added` entry with the difference (possibly zero), a quantity below it
/// yields a `removed` entry, and a product absent from `old` is wholly new
/// and added at its full quantity. Items present in `old` but absent from
/// `requested` are deliberately NOT released here; the caller expresses
/// removal by sending the item with quantity zero.
///
/// O(n) in the requested set via hash lookup into `old`.
pub fn compute_delta(old: &HashMap<String, i64>, requested: &[LineItem]) -> LineItemDelta {
    let mut delta = LineItemDelta::default();

    for item in requested {
        match old.get(&item.product_id) {
            Some(&old_quantity) => {
                if item.quantity >= old_quantity {
                    delta.added.push(LineItem::new(
                        &item.product_id,
                        &item.product_name,
                        item.quantity - old_quantity,
                    ));
                } else {
                    delta.removed.push(LineItem::new(
                        &item.product_id,
                        &item.product_name,
                        old_quantity - item.quantity,
                    ));
                }
            }
            None => {
                delta.added.push(item.clone());
            }
        }
    }

    delta
}
