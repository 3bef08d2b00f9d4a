//! Stock-aware order reconciliation
//!
//! The core of the service: atomically reserves inventory when an order is
//! created and applies the minimal delta of stock movements when an order is
//! updated, never letting on-hand quantity go negative.
//!
//! - [`delta`]: pure minimal-delta calculation between line-item sets
//! - [`availability`]: pure availability predicate over a catalog view
//! - [`manager`]: the transactional orchestrator tying both to the store

pub mod availability;
pub mod delta;
mod error;
pub mod manager;

pub use availability::check_available;
pub use delta::{LineItemDelta, compute_delta};
pub use error::{ReconcileError, ReconcileResult};
pub use manager::InventoryManager;

#[cfg(test)]
mod tests;
