//! Server state
//!
//! Shared handle bundle passed to every request handler.

use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use crate::core::Config;
use crate::reconcile::InventoryManager;
use crate::store::InventoryStore;

/// Server state - shared references to the long-lived services
///
/// Cloning is shallow (`Arc` fields), so handlers receive it by value.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// The reconciliation core, owning the store handle
    pub manager: Arc<InventoryManager>,
    /// Cooperative shutdown signal
    pub shutdown: CancellationToken,
}

impl ServerState {
    /// Open the store under the configured working directory and build the
    /// full state bundle
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)
            .with_context(|| format!("creating work dir {}", config.work_dir))?;

        let db_path = config.database_path();
        let store = InventoryStore::open(&db_path)
            .with_context(|| format!("opening database {}", db_path.display()))?;
        tracing::info!(path = %db_path.display(), "database opened");

        Ok(Self {
            config: config.clone(),
            manager: Arc::new(InventoryManager::new(store)),
            shutdown: CancellationToken::new(),
        })
    }

    /// In-memory state for tests
    pub fn for_tests() -> anyhow::Result<Self> {
        let store = InventoryStore::open_in_memory()?;
        Ok(Self {
            config: Config::with_overrides("/tmp", 0),
            manager: Arc::new(InventoryManager::new(store)),
            shutdown: CancellationToken::new(),
        })
    }
}
