//! Database connection cleanup helpers for graceful shutdown.

use tracing::{error, info};

/// Close a SeaORM PostgreSQL connection pool.
///
/// The pool also closes on drop; closing explicitly gets the outcome into
/// the shutdown logs.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
