//! AssetFlow Asset Tracking Server
//!
//! A Rust implementation of the AssetFlow asset tracking server, providing
//! an HTTP API for managing assets, vendors, assignments and status history.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
