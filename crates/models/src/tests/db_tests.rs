use crate::db::{connect_in_memory, connect_with_config, ensure_schema, IN_MEMORY_URL};
use crate::errors::ModelError;
use crate::student;
use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseBackend, Set, Statement};

#[tokio::test]
async fn test_in_memory_connection() -> Result<()> {
    let db = connect_in_memory().await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let value: i32 = row.try_get("", "test")?;
    assert_eq!(value, 1);
    Ok(())
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() -> Result<()> {
    let db = connect_with_config(&DatabaseConfig::with_url(IN_MEMORY_URL)).await?;
    ensure_schema(&db).await?;
    ensure_schema(&db).await?;
    assert!(student::list_all(&db).await?.is_empty());
    Ok(())
}

/// A write that skips the email lookup still hits the unique index.
#[tokio::test]
async fn test_unique_index_rejects_duplicate_email() -> Result<()> {
    let db = connect_in_memory().await?;
    let row = || student::ActiveModel {
        name: Set("Ann Lee".into()),
        email: Set("ann@x.com".into()),
        phone: Set("+12345678901".into()),
        course: Set("CS".into()),
        address: Set("1 Main St".into()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    row().insert(&db).await?;

    let err = row().insert(&db).await.map_err(ModelError::from).unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_)), "got {err:?}");
    assert_eq!(student::list_all(&db).await?.len(), 1);
    Ok(())
}
