//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through
//! Axum's state extraction. Both fields are cheap to clone: the database connection
//! is a pool handle and the mail service sits behind an `Arc`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::mail::MailService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the catalog.
    pub db: DatabaseConnection,

    /// Notification service selected by configuration at startup.
    pub mail_service: Arc<dyn MailService>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mail_service` - Mail service implementation to notify through
    pub fn new(db: DatabaseConnection, mail_service: Arc<dyn MailService>) -> Self {
        Self { db, mail_service }
    }
}
