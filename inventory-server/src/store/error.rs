//! Store errors

use thiserror::Error;

/// Errors from the record store layer
///
/// redb faults and serialization faults are wrapped as-is and propagate to
/// the caller without retries.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Stock underflow for product {0}")]
    StockUnderflow(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
