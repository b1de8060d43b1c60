//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `TokenService` keeps its keys behind `Arc`
//! - `AdminCodeService` uses `Arc` for shared state

use sea_orm::DatabaseConnection;

use crate::server::{middleware::token::TokenService, service::admin::code::AdminCodeService};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Holds the first-admin registration code while no admin exists.
    pub admin_code_service: AdminCodeService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing secret
    /// - `admin_code_service` - Service for managing admin codes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        admin_code_service: AdminCodeService,
    ) -> Self {
        Self {
            db,
            tokens,
            admin_code_service,
        }
    }
}
