//! redb-based record store for the catalog and order tables
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `products` | `product_id` | `Product` | Catalog rows |
//! | `product_names` | `name` | `product_id` | Name uniqueness + lookup |
//! | `orders` | `order_id` | `Order` | Order rows |
//!
//! # Single-writer model
//!
//! redb admits exactly one write transaction at a time, so every
//! create/update operation that runs inside one [`WriteTransaction`] has
//! exclusive access to both tables for its whole duration. Commits are
//! durable as soon as `commit()` returns (copy-on-write with atomic pointer
//! swap), which keeps the database consistent across interrupts: a write
//! either reached its durable point and survives, or it never happened.

mod error;
pub use error::{StoreError, StoreResult};

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use shared::models::{Order, Product};
use std::path::Path;
use std::sync::Arc;

/// Table for catalog rows: key = product id, value = JSON-serialized Product
const PRODUCTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("products");

/// Table for the name index: key = product name, value = product id
const PRODUCT_NAMES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("product_names");

/// Table for order rows: key = order id, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Record store backed by redb
#[derive(Clone)]
pub struct InventoryStore {
    db: Arc<Database>,
}

impl InventoryStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    fn init_tables(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(PRODUCTS_TABLE)?;
            let _ = write_txn.open_table(PRODUCT_NAMES_TABLE)?;
            let _ = write_txn.open_table(ORDERS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Begin a write transaction
    ///
    /// Blocks until exclusive write access is available. All mutations of one
    /// create/update operation go through a single transaction so they commit
    /// together or not at all.
    pub fn begin_write(&self) -> StoreResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    // ========== Catalog: Writes ==========

    /// Insert a new product row and its name index entry
    ///
    /// The caller is responsible for checking name uniqueness first; an
    /// existing name index entry is overwritten.
    pub fn insert_product_txn(
        &self,
        txn: &WriteTransaction,
        product: &Product,
    ) -> StoreResult<()> {
        let mut products = txn.open_table(PRODUCTS_TABLE)?;
        let value = serde_json::to_vec(product)?;
        products.insert(product.id.as_str(), value.as_slice())?;

        let mut names = txn.open_table(PRODUCT_NAMES_TABLE)?;
        names.insert(product.name.as_str(), product.id.as_str())?;
        Ok(())
    }

    /// Overwrite an existing product row (id and name are never changed)
    pub fn update_product_txn(
        &self,
        txn: &WriteTransaction,
        product: &Product,
    ) -> StoreResult<()> {
        let mut products = txn.open_table(PRODUCTS_TABLE)?;
        let value = serde_json::to_vec(product)?;
        products.insert(product.id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Atomically adjust a product's on-hand amount by a signed delta
    ///
    /// Fails the transaction with [`StoreError::StockUnderflow`] if the
    /// resulting amount would be negative. Only the reconciliation path is
    /// allowed to call this.
    pub fn adjust_amount_txn(
        &self,
        txn: &WriteTransaction,
        product_id: &str,
        delta: i64,
    ) -> StoreResult<()> {
        let mut products = txn.open_table(PRODUCTS_TABLE)?;

        let mut product: Product = match products.get(product_id)? {
            Some(value) => serde_json::from_slice(value.value())?,
            None => return Err(StoreError::ProductNotFound(product_id.to_string())),
        };

        let adjusted = product.amount + delta;
        if adjusted < 0 {
            return Err(StoreError::StockUnderflow(product_id.to_string()));
        }
        product.amount = adjusted;

        let value = serde_json::to_vec(&product)?;
        products.insert(product_id, value.as_slice())?;
        Ok(())
    }

    // ========== Catalog: Reads ==========

    /// Whether a product with this name already exists (within transaction)
    pub fn name_exists_txn(&self, txn: &WriteTransaction, name: &str) -> StoreResult<bool> {
        let names = txn.open_table(PRODUCT_NAMES_TABLE)?;
        Ok(names.get(name)?.is_some())
    }

    /// Get a product by id
    pub fn get_product(&self, id: &str) -> StoreResult<Option<Product>> {
        let read_txn = self.db.begin_read()?;
        let products = read_txn.open_table(PRODUCTS_TABLE)?;
        match products.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get a product by id (within transaction)
    pub fn get_product_txn(
        &self,
        txn: &WriteTransaction,
        id: &str,
    ) -> StoreResult<Option<Product>> {
        let products = txn.open_table(PRODUCTS_TABLE)?;
        match products.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get a product by its unique name
    pub fn get_product_by_name(&self, name: &str) -> StoreResult<Option<Product>> {
        let read_txn = self.db.begin_read()?;
        let names = read_txn.open_table(PRODUCT_NAMES_TABLE)?;
        let id = match names.get(name)? {
            Some(value) => value.value().to_string(),
            None => return Ok(None),
        };
        let products = read_txn.open_table(PRODUCTS_TABLE)?;
        match products.get(id.as_str())? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Resolve a product reference by id if non-empty, otherwise by name
    ///
    /// This is the single resolution policy for line items and product
    /// patches; id and name are never combined in one predicate.
    pub fn resolve_product_txn(
        &self,
        txn: &WriteTransaction,
        id: &str,
        name: &str,
    ) -> StoreResult<Option<Product>> {
        if !id.is_empty() {
            return self.get_product_txn(txn, id);
        }
        if name.is_empty() {
            return Ok(None);
        }
        let names = txn.open_table(PRODUCT_NAMES_TABLE)?;
        let id = match names.get(name)? {
            Some(value) => value.value().to_string(),
            None => return Ok(None),
        };
        drop(names);
        self.get_product_txn(txn, &id)
    }

    /// All products, in key order
    pub fn all_products(&self) -> StoreResult<Vec<Product>> {
        let read_txn = self.db.begin_read()?;
        let products = read_txn.open_table(PRODUCTS_TABLE)?;

        let mut result = Vec::new();
        for entry in products.iter()? {
            let (_key, value) = entry?;
            result.push(serde_json::from_slice(value.value())?);
        }
        Ok(result)
    }

    /// Products with on-hand amount greater than zero
    pub fn products_in_stock(&self) -> StoreResult<Vec<Product>> {
        Ok(self
            .all_products()?
            .into_iter()
            .filter(|p| p.amount > 0)
            .collect())
    }

    /// Products from a given manufacturer
    pub fn products_by_manufacturer(&self, manufacturer: &str) -> StoreResult<Vec<Product>> {
        Ok(self
            .all_products()?
            .into_iter()
            .filter(|p| p.manufacturer == manufacturer)
            .collect())
    }

    // ========== Orders ==========

    /// Insert or overwrite an order row
    pub fn put_order_txn(&self, txn: &WriteTransaction, order: &Order) -> StoreResult<()> {
        let mut orders = txn.open_table(ORDERS_TABLE)?;
        let value = serde_json::to_vec(order)?;
        orders.insert(order.id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Get an order by id
    pub fn get_order(&self, id: &str) -> StoreResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let orders = read_txn.open_table(ORDERS_TABLE)?;
        match orders.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get an order by id (within transaction)
    pub fn get_order_txn(&self, txn: &WriteTransaction, id: &str) -> StoreResult<Option<Order>> {
        let orders = txn.open_table(ORDERS_TABLE)?;
        match orders.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// All orders satisfying a predicate
    pub fn orders_where(&self, predicate: impl Fn(&Order) -> bool) -> StoreResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let orders = read_txn.open_table(ORDERS_TABLE)?;

        let mut result = Vec::new();
        for entry in orders.iter()? {
            let (_key, value) = entry?;
            let order: Order = serde_json::from_slice(value.value())?;
            if predicate(&order) {
                result.push(order);
            }
        }
        Ok(result)
    }

    // ========== Reset ==========

    /// Wipe all products and orders in one transaction (test/reset only)
    pub fn clear(&self) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        txn.delete_table(PRODUCTS_TABLE)?;
        txn.delete_table(PRODUCT_NAMES_TABLE)?;
        txn.delete_table(ORDERS_TABLE)?;
        {
            let _ = txn.open_table(PRODUCTS_TABLE)?;
            let _ = txn.open_table(PRODUCT_NAMES_TABLE)?;
            let _ = txn.open_table(ORDERS_TABLE)?;
        }
        txn.commit()?;
        tracing::info!("Inventory store cleared");
        Ok(())
    }
}
