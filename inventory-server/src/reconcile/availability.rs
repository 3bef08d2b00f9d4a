//! Availability check for a proposed set of line-item reservations
//!
//! Pure read over a product-lookup view; no side effects.

use crate::store::StoreResult;
use shared::models::{LineItem, Product};

/// Whether the catalog can satisfy every requested increase.
///
/// `resolve` maps an (id, name) reference to a product, id taking precedence
/// when non-empty. A resolvable entry fails the check when its on-hand
/// amount is below the requested quantity. Unresolvable entries are skipped:
/// in the contexts this runs in, an unknown product is dropped (create) or
/// ignored (release) by the caller, so there is nothing to reserve here.
pub fn check_available<F>(resolve: F, requested: &[LineItem]) -> StoreResult<bool>
where
    F: Fn(&str, &str) -> StoreResult<Option<Product>>,
{
    for item in requested {
        if let Some(product) = resolve(&item.product_id, &item.product_name)?
            && product.amount < item.quantity
        {
            tracing::debug!(
                product_id = %product.id,
                on_hand = product.amount,
                requested = item.quantity,
                "insufficient stock",
            );
            return Ok(false);
        }
    }
    Ok(true)
}
