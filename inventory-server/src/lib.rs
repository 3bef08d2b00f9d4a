//! Inventory Server - stock-aware catalog and order service
//!
//! # Architecture
//!
//! - **Store** (`store`): embedded redb key-value store holding the product
//!   catalog and the order book
//! - **Reconciliation** (`reconcile`): the transactional core that reserves
//!   stock on order creation and applies minimal stock deltas on update
//! - **HTTP API** (`api`): thin RESTful translation layer
//!
//! # Module structure
//!
//! ```text
//! inventory-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── store/         # redb-backed catalog + order tables
//! ├── reconcile/     # delta calculator, availability check, manager
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # error envelope, logging
//! ```

pub mod api;
pub mod core;
pub mod reconcile;
pub mod store;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use reconcile::{InventoryManager, ReconcileError};
pub use store::{InventoryStore, StoreError};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
