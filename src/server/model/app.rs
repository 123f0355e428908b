use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::admin::AdminSite;

/// Handles shared with the admin console: the database and the explicit admin registry.
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection
    pub db: DatabaseConnection,
    /// Entities registered with the admin console
    pub admin: Arc<AdminSite>,
}

impl AppState {
    /// Creates application state from a connection and an admin registry.
    pub fn new(db: DatabaseConnection, admin: AdminSite) -> Self {
        Self {
            db,
            admin: Arc::new(admin),
        }
    }
}

/// Uses the default admin registry.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, AdminSite::default())
    }
}
