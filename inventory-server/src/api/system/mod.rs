//! System endpoints
//!
//! The reset endpoint wipes both stores. It exists for test setups and
//! controlled resets only.

use axum::{Json, Router, extract::State, routing::post};

use crate::core::ServerState;
use crate::utils::{AppResponse, AppResult, ok};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/system/reset", post(reset))
}

/// POST /api/system/reset - wipe catalog and orders
async fn reset(State(state): State<ServerState>) -> AppResult<Json<AppResponse<()>>> {
    state.manager.clear()?;
    tracing::warn!("database cleared via reset endpoint");
    Ok(ok(()))
}
