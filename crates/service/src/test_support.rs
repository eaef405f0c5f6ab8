#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Each call gets its own private in-memory database, so tests never share rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}
