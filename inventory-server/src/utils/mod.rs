//! Shared utilities
//!
//! - [`AppError`] / [`AppResponse`] - API error type and response envelope
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResponse, AppResult, ok, ok_list};
