//! Reconciliation errors

use crate::store::StoreError;
use thiserror::Error;

/// Errors from the reconciliation core
///
/// Each variant is fatal to the single request that produced it and leaves
/// no partial effect; batched callers receive one outcome per entry.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Caller-supplied date out of range on order creation
    #[error("Invalid order date {month}/{day}/{year}")]
    InvalidDate { month: i32, day: i32, year: i32 },

    /// Line item with a negative quantity (would mint stock on reconcile)
    #[error("Invalid line item for product '{0}': negative quantity")]
    InvalidLineItem(String),

    /// A requested quantity exceeds the on-hand amount; nothing was mutated
    #[error("Insufficient stock for requested line items")]
    InsufficientStock,

    /// No requested line item resolved to a non-zero reservable quantity
    #[error("No reservable stock for any requested line item")]
    NoReservableStock,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<redb::CommitError> for ReconcileError {
    fn from(e: redb::CommitError) -> Self {
        Self::Store(e.into())
    }
}

pub type ReconcileResult<T> = Result<T, ReconcileError>;
