//! InventoryManager - the transactional reconciliation core
//!
//! Sequences availability checking, stock adjustment, and order persistence
//! for order creation and update. Every operation runs inside one redb write
//! transaction: all stock mutations and the order write commit together or
//! none do, and the transaction holds exclusive write access to both tables
//! for its whole duration (the single-writer model).
//!
//! # Create flow
//!
//! ```text
//! create_order(input)
//!     ├─ 1. Validate date ranges (hard failure on create)
//!     ├─ 2. Reject negative quantities
//!     ├─ 3. Availability check against the requested quantities
//!     ├─ 4. Resolve + merge + clamp into the reservable set
//!     ├─ 5. Decrement catalog for every reservable item
//!     ├─ 6. Persist the order under a fresh id
//!     └─ 7. Commit
//! ```
//!
//! Dropping the transaction on any early return aborts it, so a failed
//! request leaves the catalog untouched.

use crate::reconcile::availability::check_available;
use crate::reconcile::delta::compute_delta;
use crate::reconcile::{ReconcileError, ReconcileResult};
use crate::store::InventoryStore;
use shared::models::{
    LineItem, Order, OrderInput, OrderPatch, OrderStatusFilter, Product, ProductInput,
    ProductPatch,
};
use std::collections::HashMap;
use uuid::Uuid;

/// The reconciliation orchestrator
///
/// Holds the store handle explicitly (no process-wide singleton); opened at
/// service start and shared via `Arc` for the lifetime of the server.
pub struct InventoryManager {
    store: InventoryStore,
}

impl InventoryManager {
    pub fn new(store: InventoryStore) -> Self {
        Self { store }
    }

    // ========== Catalog Operations ==========

    /// Add products to the catalog, assigning ids
    ///
    /// An input whose name is empty or already taken is silently skipped and
    /// excluded from the returned id list. The whole batch commits in one
    /// transaction.
    pub fn add_products(&self, inputs: Vec<ProductInput>) -> ReconcileResult<Vec<String>> {
        let txn = self.store.begin_write()?;
        let mut ids = Vec::new();

        for input in inputs {
            if input.name.is_empty() || self.store.name_exists_txn(&txn, &input.name)? {
                tracing::debug!(name = %input.name, "product add skipped: empty or duplicate name");
                continue;
            }
            let product = Product {
                id: Uuid::new_v4().to_string(),
                name: input.name,
                description: input.description,
                manufacturer: input.manufacturer,
                wholesale_cost: input.wholesale_cost.max(0.0),
                sale_cost: input.sale_cost.max(0.0),
                amount: input.amount.max(0),
            };
            self.store.insert_product_txn(&txn, &product)?;
            ids.push(product.id);
        }

        txn.commit()?;
        tracing::info!(added = ids.len(), "products added");
        Ok(ids)
    }

    /// Apply field patches to existing products
    ///
    /// The target is resolved by id when non-empty, otherwise by name; an
    /// unresolvable patch is a silent no-op. Skip sentinels: empty string
    /// for text fields, negative value for numeric fields. Setting `amount`
    /// here is the administrative path; it bypasses reconciliation.
    pub fn update_products(&self, patches: Vec<ProductPatch>) -> ReconcileResult<()> {
        let txn = self.store.begin_write()?;

        for patch in patches {
            let Some(mut product) =
                self.store.resolve_product_txn(&txn, &patch.id, &patch.name)?
            else {
                tracing::debug!(id = %patch.id, name = %patch.name, "product patch skipped: not found");
                continue;
            };

            if let Some(description) = patch.description
                && !description.is_empty()
            {
                product.description = description;
            }
            if let Some(manufacturer) = patch.manufacturer
                && !manufacturer.is_empty()
            {
                product.manufacturer = manufacturer;
            }
            if let Some(wholesale_cost) = patch.wholesale_cost
                && wholesale_cost >= 0.0
            {
                product.wholesale_cost = wholesale_cost;
            }
            if let Some(sale_cost) = patch.sale_cost
                && sale_cost >= 0.0
            {
                product.sale_cost = sale_cost;
            }
            if let Some(amount) = patch.amount
                && amount >= 0
            {
                product.amount = amount;
            }

            self.store.update_product_txn(&txn, &product)?;
        }

        txn.commit()?;
        Ok(())
    }

    /// Products for a set of ids, unknown ids skipped
    pub fn products_by_ids(&self, ids: &[String]) -> ReconcileResult<Vec<Product>> {
        let mut products = Vec::new();
        for id in ids {
            if let Some(product) = self.store.get_product(id)? {
                products.push(product);
            }
        }
        Ok(products)
    }

    /// Products for a set of names, unknown names skipped
    pub fn products_by_names(&self, names: &[String]) -> ReconcileResult<Vec<Product>> {
        let mut products = Vec::new();
        for name in names {
            if let Some(product) = self.store.get_product_by_name(name)? {
                products.push(product);
            }
        }
        Ok(products)
    }

    pub fn products_by_manufacturer(&self, manufacturer: &str) -> ReconcileResult<Vec<Product>> {
        Ok(self.store.products_by_manufacturer(manufacturer)?)
    }

    pub fn products_in_stock(&self) -> ReconcileResult<Vec<Product>> {
        Ok(self.store.products_in_stock()?)
    }

    // ========== Order Operations ==========

    /// Create a batch of orders, each independently succeeding or failing
    pub fn create_orders(
        &self,
        inputs: Vec<OrderInput>,
    ) -> Vec<ReconcileResult<String>> {
        inputs.into_iter().map(|input| self.create_order(input)).collect()
    }

    /// Create one order, reserving stock atomically
    pub fn create_order(&self, input: OrderInput) -> ReconcileResult<String> {
        if !input.date.is_valid() {
            return Err(ReconcileError::InvalidDate {
                month: input.date.month,
                day: input.date.day,
                year: input.date.year,
            });
        }
        reject_negative_quantities(&input.items)?;

        let txn = self.store.begin_write()?;

        // Hard check against the requested quantities: an over-ask fails the
        // whole order before any mutation.
        let available = check_available(
            |id, name| self.store.resolve_product_txn(&txn, id, name),
            &input.items,
        )?;
        if !available {
            return Err(ReconcileError::InsufficientStock);
        }

        // Resolve to canonical (id, name), merge duplicates, clamp to
        // on-hand. Unknown products and non-positive quantities drop out.
        let mut reservable = Vec::new();
        for item in self.normalize_items(&txn, &input.items)? {
            if let Some(product) = self.store.get_product_txn(&txn, &item.product_id)? {
                let quantity = item.quantity.min(product.amount);
                if quantity > 0 {
                    reservable.push(LineItem::new(&product.id, &product.name, quantity));
                }
            }
        }
        if reservable.is_empty() {
            return Err(ReconcileError::NoReservableStock);
        }

        for item in &reservable {
            self.store.adjust_amount_txn(&txn, &item.product_id, -item.quantity)?;
        }

        let order = Order {
            id: Uuid::new_v4().to_string(),
            destination: input.destination,
            date: input.date,
            is_paid: input.is_paid,
            is_shipped: input.is_shipped,
            items: reservable,
        };
        self.store.put_order_txn(&txn, &order)?;
        txn.commit()?;

        tracing::info!(order_id = %order.id, items = order.items.len(), "order created");
        Ok(order.id)
    }

    /// Update a batch of orders, each independently succeeding or failing
    pub fn update_orders(&self, patches: Vec<OrderPatch>) -> Vec<ReconcileResult<()>> {
        patches.into_iter().map(|patch| self.update_order(patch)).collect()
    }

    /// Update an order's fields and/or replace its line-item set
    ///
    /// Field updates and the line-item update are one transaction, but the
    /// line-item part is skipped in its entirety when stock cannot cover the
    /// net increase; destination/date/flag updates still apply in that case.
    pub fn update_order(&self, patch: OrderPatch) -> ReconcileResult<()> {
        reject_negative_quantities(&patch.items)?;

        let txn = self.store.begin_write()?;
        let mut order = self
            .store
            .get_order_txn(&txn, &patch.id)?
            .ok_or_else(|| ReconcileError::NotFound(format!("order {}", patch.id)))?;

        if let Some(destination) = patch.destination
            && !destination.is_empty()
        {
            order.destination = destination;
        }

        // Unlike create, an invalid date on update is silently skipped.
        if let Some(date) = patch.date {
            if date.is_valid() {
                order.date = date;
            } else {
                tracing::debug!(order_id = %order.id, ?date, "invalid date on update, skipped");
            }
        }

        if !patch.items.is_empty() {
            let requested = self.normalize_items(&txn, &patch.items)?;
            let old: HashMap<String, i64> = order
                .items
                .iter()
                .map(|item| (item.product_id.clone(), item.quantity))
                .collect();
            let delta = compute_delta(&old, &requested);

            let available = check_available(
                |id, name| self.store.resolve_product_txn(&txn, id, name),
                &delta.added,
            )?;
            if available {
                for item in &delta.added {
                    self.store.adjust_amount_txn(&txn, &item.product_id, -item.quantity)?;
                }
                for item in &delta.removed {
                    self.store.adjust_amount_txn(&txn, &item.product_id, item.quantity)?;
                }
                // The requested set becomes authoritative; a zeroed item has
                // released its stock and leaves the order.
                order.items = requested
                    .into_iter()
                    .filter(|item| item.quantity > 0)
                    .collect();
            } else {
                tracing::warn!(
                    order_id = %order.id,
                    "line-item update skipped: insufficient stock"
                );
            }
        }

        // One-way latches: a true sets the flag, nothing ever clears it.
        if patch.is_paid == Some(true) {
            order.is_paid = true;
        }
        if patch.is_shipped == Some(true) {
            order.is_shipped = true;
        }

        self.store.put_order_txn(&txn, &order)?;
        txn.commit()?;
        Ok(())
    }

    pub fn get_order(&self, id: &str) -> ReconcileResult<Option<Order>> {
        Ok(self.store.get_order(id)?)
    }

    /// Orders for a set of ids, unknown ids skipped
    pub fn orders_by_ids(&self, ids: &[String]) -> ReconcileResult<Vec<Order>> {
        let mut orders = Vec::new();
        for id in ids {
            if let Some(order) = self.store.get_order(id)? {
                orders.push(order);
            }
        }
        Ok(orders)
    }

    pub fn orders_by_status(&self, filter: OrderStatusFilter) -> ReconcileResult<Vec<Order>> {
        Ok(self.store.orders_where(|order| filter.matches(order))?)
    }

    // ========== Reset ==========

    /// Wipe both stores (test/reset only)
    pub fn clear(&self) -> ReconcileResult<()> {
        Ok(self.store.clear()?)
    }

    // ========== Internals ==========

    /// Resolve requested line items to canonical (id, name) pairs and merge
    /// duplicate references to the same product by summing quantities.
    ///
    /// Unresolvable entries are dropped: they can reserve nothing, and
    /// persisting them would break the stock-reserved invariant.
    fn normalize_items(
        &self,
        txn: &redb::WriteTransaction,
        items: &[LineItem],
    ) -> ReconcileResult<Vec<LineItem>> {
        let mut merged: Vec<LineItem> = Vec::new();
        for item in items {
            let Some(product) =
                self.store.resolve_product_txn(txn, &item.product_id, &item.product_name)?
            else {
                tracing::debug!(
                    id = %item.product_id,
                    name = %item.product_name,
                    "unresolvable line item dropped",
                );
                continue;
            };
            match merged.iter_mut().find(|m| m.product_id == product.id) {
                Some(existing) => existing.quantity += item.quantity,
                None => merged.push(LineItem::new(&product.id, &product.name, item.quantity)),
            }
        }
        Ok(merged)
    }
}

fn reject_negative_quantities(items: &[LineItem]) -> ReconcileResult<()> {
    for item in items {
        if item.quantity < 0 {
            let reference = if item.product_id.is_empty() {
                item.product_name.clone()
            } else {
                item.product_id.clone()
            };
            return Err(ReconcileError::InvalidLineItem(reference));
        }
    }
    Ok(())
}
